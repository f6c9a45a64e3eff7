//! Item definitions.
//!
//! Items are plain data: a name, a usage class, and one closed effect. The
//! engine interprets effects; content crates only build tables of these.

use crate::status::StatusKind;

/// When an item can be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Usable from the inventory scene, outside combat.
    Consumable,
    /// Usable only during battle.
    Battle,
    /// Never actively used; consumed by the engine when its trigger fires.
    Passive,
}

/// Who a status-applying item hits when used in battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemTarget {
    User,
    Enemy,
}

/// What using (or triggering) an item does.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    /// Restores HP, capped at the user's starting HP.
    Heal { amount: i32 },
    /// Permanently raises base attack.
    RaiseBaseAttack { amount: i32 },
    /// Grants gold on use.
    GainGold { amount: u32 },
    /// Applies a status effect to the target. `magnitude` is 0 for kinds
    /// that carry none.
    ApplyStatus {
        kind: StatusKind,
        duration: u32,
        magnitude: u32,
        target: ItemTarget,
    },
    /// Brings the holder back at full HP when they would die.
    Revive,
}

/// One item template, as stored in inventories and shop offers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub name: String,
    pub kind: ItemKind,
    pub effect: ItemEffect,
}

impl ItemDefinition {
    pub fn new(name: impl Into<String>, kind: ItemKind, effect: ItemEffect) -> Self {
        Self {
            name: name.into(),
            kind,
            effect,
        }
    }

    /// True for the passive revival trigger.
    pub fn is_revive(&self) -> bool {
        matches!(self.effect, ItemEffect::Revive)
    }
}
