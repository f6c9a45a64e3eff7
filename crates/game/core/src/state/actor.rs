use crate::config::GameConfig;
use crate::log::MessageLog;
use crate::state::inventory::InventoryState;
use crate::status::{AppliedStatus, StatusInstance, StatusKind, StatusSet};

/// Mutable state of one combatant.
///
/// `attack` is derived: it is recomputed from `base_attack` plus the live
/// status set whenever either changes, never adjusted in place. That keeps
/// repeated buff/debuff churn from drifting the stat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub name: String,
    pub hp: i32,
    /// HP ceiling; also the value revival restores.
    pub starting_hp: i32,
    pub base_attack: i32,
    /// Derived attack. See [`ActorState::recompute_attack`].
    pub attack: i32,
    pub gold: u32,
    /// Strength class, monsters only.
    pub tier: Option<u8>,
    pub statuses: StatusSet,
    pub inventory: InventoryState,
}

impl ActorState {
    /// Fresh player at run start (and after a restart).
    pub fn player(name: impl Into<String>, config: &GameConfig) -> Self {
        Self {
            name: name.into(),
            hp: config.start_hp,
            starting_hp: config.start_hp,
            base_attack: config.start_attack,
            attack: config.start_attack,
            gold: config.start_gold,
            tier: None,
            statuses: StatusSet::empty(),
            inventory: InventoryState::empty(),
        }
    }

    /// Monster built from a content template.
    pub fn monster(name: impl Into<String>, hp: i32, attack: i32, tier: u8) -> Self {
        Self {
            name: name.into(),
            hp,
            starting_hp: hp,
            base_attack: attack,
            attack,
            gold: 0,
            tier: Some(tier),
            statuses: StatusSet::empty(),
            inventory: InventoryState::empty(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Recomputes derived attack from base attack and live statuses:
    /// flat AtkUp bonus and Weak penalty first, then the AtkMultiplier,
    /// floored at 1. Immune suppresses the Weak penalty for as long as
    /// both are active.
    pub fn recompute_attack(&mut self) {
        let mut attack = self.base_attack;
        if let Some(bonus) = self.statuses.magnitude(StatusKind::AtkUp) {
            attack += bonus as i32;
        }
        if self.statuses.is_active(StatusKind::Weak)
            && !self.statuses.is_active(StatusKind::Immune)
        {
            attack -= GameConfig::WEAK_ATTACK_PENALTY;
        }
        if let Some(multiplier) = self.statuses.magnitude(StatusKind::AtkMultiplier) {
            attack *= multiplier as i32;
        }
        self.attack = attack.max(1);
    }

    /// Applies a status and refreshes derived attack.
    pub fn apply_status(&mut self, instance: StatusInstance, log: &mut MessageLog) -> AppliedStatus {
        let outcome = self.statuses.apply(instance, &self.name, log);
        self.recompute_attack();
        outcome
    }

    /// Drops battle-scoped statuses (combat end, successful escape).
    pub fn clear_battle_statuses(&mut self) {
        self.statuses.clear_battle();
        self.recompute_attack();
    }

    /// Restores HP, capped at `starting_hp`. Returns the amount actually
    /// gained.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp + amount).min(self.starting_hp);
        self.hp - before
    }

    /// Raises base attack permanently and refreshes the derived stat.
    pub fn raise_base_attack(&mut self, amount: i32) {
        self.base_attack += amount;
        self.recompute_attack();
    }
}
