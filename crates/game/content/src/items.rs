//! Item tables: the starter kit, reward pulls, and monster drops.

use game_core::env::{ItemOracle, RngStream};
use game_core::item::{ItemDefinition, ItemEffect, ItemKind, ItemTarget};
use game_core::status::StatusKind;

/// Static item catalog.
#[derive(Clone, Copy, Debug, Default)]
pub struct ItemCatalog;

impl ItemCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn potion() -> ItemDefinition {
        ItemDefinition::new(
            "Potion",
            ItemKind::Consumable,
            ItemEffect::Heal { amount: 5 },
        )
    }

    pub fn greater_potion() -> ItemDefinition {
        ItemDefinition::new(
            "Greater Potion",
            ItemKind::Consumable,
            ItemEffect::Heal { amount: 12 },
        )
    }

    pub fn whetstone() -> ItemDefinition {
        ItemDefinition::new(
            "Whetstone",
            ItemKind::Consumable,
            ItemEffect::RaiseBaseAttack { amount: 1 },
        )
    }

    pub fn strength_elixir() -> ItemDefinition {
        ItemDefinition::new(
            "Strength Elixir",
            ItemKind::Consumable,
            ItemEffect::ApplyStatus {
                kind: StatusKind::AtkUp,
                duration: 5,
                magnitude: 2,
                target: ItemTarget::User,
            },
        )
    }

    pub fn healing_scroll() -> ItemDefinition {
        ItemDefinition::new(
            "Healing Scroll",
            ItemKind::Consumable,
            ItemEffect::ApplyStatus {
                kind: StatusKind::HealingScroll,
                duration: 5,
                magnitude: 3,
                target: ItemTarget::User,
            },
        )
    }

    pub fn aegis_scroll() -> ItemDefinition {
        ItemDefinition::new(
            "Aegis Scroll",
            ItemKind::Consumable,
            ItemEffect::ApplyStatus {
                kind: StatusKind::DamageReduction,
                duration: 3,
                magnitude: 70,
                target: ItemTarget::User,
            },
        )
    }

    pub fn immunity_charm() -> ItemDefinition {
        ItemDefinition::new(
            "Immunity Charm",
            ItemKind::Consumable,
            ItemEffect::ApplyStatus {
                kind: StatusKind::Immune,
                duration: 3,
                magnitude: 0,
                target: ItemTarget::User,
            },
        )
    }

    pub fn flying_hammer() -> ItemDefinition {
        ItemDefinition::new(
            "Flying Hammer",
            ItemKind::Battle,
            ItemEffect::ApplyStatus {
                kind: StatusKind::Stun,
                duration: 1,
                magnitude: 0,
                target: ItemTarget::Enemy,
            },
        )
    }

    pub fn giant_scroll() -> ItemDefinition {
        ItemDefinition::new(
            "Giant Scroll",
            ItemKind::Battle,
            ItemEffect::ApplyStatus {
                kind: StatusKind::AtkMultiplier,
                duration: 1,
                magnitude: 2,
                target: ItemTarget::User,
            },
        )
    }

    pub fn barrier_scroll() -> ItemDefinition {
        ItemDefinition::new(
            "Barrier Scroll",
            ItemKind::Battle,
            ItemEffect::ApplyStatus {
                kind: StatusKind::Barrier,
                duration: 2,
                magnitude: 0,
                target: ItemTarget::User,
            },
        )
    }

    pub fn revive_scroll() -> ItemDefinition {
        ItemDefinition::new("Revive Scroll", ItemKind::Passive, ItemEffect::Revive)
    }

    /// Everything a reward door or drop can pull.
    fn pool() -> Vec<ItemDefinition> {
        vec![
            Self::potion(),
            Self::potion(),
            Self::greater_potion(),
            Self::whetstone(),
            Self::strength_elixir(),
            Self::healing_scroll(),
            Self::aegis_scroll(),
            Self::immunity_charm(),
            Self::flying_hammer(),
            Self::giant_scroll(),
            Self::barrier_scroll(),
            Self::revive_scroll(),
        ]
    }
}

impl ItemOracle for ItemCatalog {
    fn starter_kit(&self) -> Vec<ItemDefinition> {
        vec![
            Self::revive_scroll(),
            Self::flying_hammer(),
            Self::giant_scroll(),
            Self::barrier_scroll(),
        ]
    }

    fn random_item(&self, stream: &mut RngStream<'_>) -> ItemDefinition {
        let pool = Self::pool();
        pool[stream.pick_index(pool.len())].clone()
    }

    fn monster_loot(&self, stream: &mut RngStream<'_>, tier: u8) -> Option<ItemDefinition> {
        let chance = 15 + 10 * tier as i32;
        if stream.chance(chance) {
            Some(self.random_item(stream))
        } else {
            None
        }
    }
}
