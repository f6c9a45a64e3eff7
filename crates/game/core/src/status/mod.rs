//! Status effect engine.
//!
//! Status effects are timed modifiers that change combat math: attack
//! buffs/debuffs, damage-over-time, crowd control, damage gating. Each kind
//! has a fixed *category* deciding which turn type ticks it down, and a
//! *combine policy* deciding what happens when an actor re-acquires a kind
//! it already holds.
//!
//! The closed [`StatusKind`] enum plus exhaustive matching replaces the
//! class-per-kind dispatch a dynamic language would use: adding a kind
//! forces every policy site to handle it.

mod instance;
mod set;

pub use instance::{StatusError, StatusInstance};
pub use set::{AppliedStatus, StatusSet};

use strum::{Display, EnumIter};

/// When a status effect's duration counts down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusCategory {
    /// Ticks once per battle exchange; cleared when combat ends.
    Battle,
    /// Ticks once per adventure (non-battle) turn; survives combat.
    Persistent,
}

/// How a re-applied status merges into the live instance of the same kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombinePolicy {
    /// duration = max(existing, incoming).
    MaxDuration,
    /// duration = max; magnitude = max.
    MaxDurationMaxMagnitude,
    /// duration = max; magnitude = existing + incoming.
    MaxDurationSumMagnitude,
    /// duration = existing + incoming.
    SumDuration,
}

/// Closed set of status effect kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusKind {
    /// Attack reduced by a flat 2 (floor 1).
    Weak,
    /// Loses 10% of current HP per battle tick (min 1).
    Poison,
    /// Cannot act.
    Stun,
    /// Attack multiplied by the stored magnitude.
    AtkMultiplier,
    /// Blocks all incoming damage.
    Barrier,
    /// Attack raised by the stored magnitude.
    AtkUp,
    /// Incoming damage scaled down to the stored retained-percent.
    DamageReduction,
    /// Heals a random 1..=magnitude per adventure tick.
    HealingScroll,
    /// Blocks the application of new negative statuses.
    Immune,
}

impl StatusKind {
    /// Which turn type ticks this kind down.
    pub fn category(self) -> StatusCategory {
        match self {
            StatusKind::Weak
            | StatusKind::Poison
            | StatusKind::Stun
            | StatusKind::AtkMultiplier
            | StatusKind::Barrier => StatusCategory::Battle,
            StatusKind::AtkUp
            | StatusKind::DamageReduction
            | StatusKind::HealingScroll
            | StatusKind::Immune => StatusCategory::Persistent,
        }
    }

    /// Merge rule used when an actor re-acquires this kind.
    pub fn combine_policy(self) -> CombinePolicy {
        match self {
            StatusKind::Weak | StatusKind::Poison | StatusKind::Stun | StatusKind::Barrier => {
                CombinePolicy::MaxDuration
            }
            StatusKind::AtkMultiplier => CombinePolicy::MaxDurationMaxMagnitude,
            StatusKind::AtkUp => CombinePolicy::MaxDurationSumMagnitude,
            StatusKind::DamageReduction | StatusKind::HealingScroll | StatusKind::Immune => {
                CombinePolicy::SumDuration
            }
        }
    }

    /// Kinds gated by an active Immune status.
    pub fn is_negative(self) -> bool {
        matches!(
            self,
            StatusKind::Weak | StatusKind::Poison | StatusKind::Stun
        )
    }

    /// Kinds that are meaningless without a magnitude.
    pub fn requires_magnitude(self) -> bool {
        matches!(
            self,
            StatusKind::AtkMultiplier
                | StatusKind::AtkUp
                | StatusKind::DamageReduction
                | StatusKind::HealingScroll
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn battle_kinds_match_glossary() {
        let battle: Vec<StatusKind> = StatusKind::iter()
            .filter(|k| k.category() == StatusCategory::Battle)
            .collect();
        assert_eq!(
            battle,
            vec![
                StatusKind::Weak,
                StatusKind::Poison,
                StatusKind::Stun,
                StatusKind::AtkMultiplier,
                StatusKind::Barrier,
            ]
        );
    }

    #[test]
    fn only_crowd_control_and_dots_are_negative() {
        for kind in StatusKind::iter() {
            let expected = matches!(
                kind,
                StatusKind::Weak | StatusKind::Poison | StatusKind::Stun
            );
            assert_eq!(kind.is_negative(), expected, "{kind}");
        }
    }
}
