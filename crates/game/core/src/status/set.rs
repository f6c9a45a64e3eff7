use arrayvec::ArrayVec;

use super::{CombinePolicy, StatusCategory, StatusInstance, StatusKind};
use crate::config::GameConfig;
use crate::log::MessageLog;

/// Result of applying a status instance to a set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppliedStatus {
    /// Inserted as a new entry.
    Added,
    /// Merged into an existing entry of the same kind.
    Combined,
    /// Dropped because the owner is Immune and the kind is negative.
    BlockedByImmunity,
}

/// Live status effects on one actor: at most one entry per kind.
///
/// The set never stores an entry with duration 0; expiry removes entries
/// during the tick that drains them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusSet {
    effects: ArrayVec<StatusInstance, { GameConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_active(&self, kind: StatusKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    pub fn get(&self, kind: StatusKind) -> Option<&StatusInstance> {
        self.effects.iter().find(|e| e.kind == kind)
    }

    /// Remaining duration of a kind, 0 if absent.
    pub fn duration(&self, kind: StatusKind) -> u32 {
        self.get(kind).map(|e| e.duration).unwrap_or(0)
    }

    /// Magnitude of a kind, if present.
    pub fn magnitude(&self, kind: StatusKind) -> Option<u32> {
        self.get(kind).map(|e| e.magnitude)
    }

    /// Applies an instance: immunity gate, then combine-or-insert.
    ///
    /// `owner` names the actor in log lines. Callers must recompute the
    /// owner's derived attack afterwards; the set itself only stores data.
    pub fn apply(
        &mut self,
        incoming: StatusInstance,
        owner: &str,
        log: &mut MessageLog,
    ) -> AppliedStatus {
        if incoming.kind.is_negative() && self.is_active(StatusKind::Immune) {
            log.push(format!(
                "{owner} is immune: {} has no effect!",
                incoming.kind
            ));
            return AppliedStatus::BlockedByImmunity;
        }

        let Some(existing) = self.effects.iter_mut().find(|e| e.kind == incoming.kind) else {
            log.push(format!(
                "{owner} gains {} for {} turns.",
                incoming.kind, incoming.duration
            ));
            // Capacity is one slot per kind, so this cannot overflow.
            self.effects.push(incoming);
            return AppliedStatus::Added;
        };

        let old_duration = existing.duration;
        let old_magnitude = existing.magnitude;
        match incoming.kind.combine_policy() {
            CombinePolicy::MaxDuration => {
                existing.duration = existing.duration.max(incoming.duration);
            }
            CombinePolicy::MaxDurationMaxMagnitude => {
                existing.duration = existing.duration.max(incoming.duration);
                existing.magnitude = existing.magnitude.max(incoming.magnitude);
            }
            CombinePolicy::MaxDurationSumMagnitude => {
                existing.duration = existing.duration.max(incoming.duration);
                existing.magnitude += incoming.magnitude;
            }
            CombinePolicy::SumDuration => {
                existing.duration += incoming.duration;
            }
        }

        if existing.duration != old_duration {
            log.push(format!(
                "{owner}: {} extended from {} to {} turns.",
                incoming.kind, old_duration, existing.duration
            ));
        }
        if existing.magnitude != old_magnitude {
            log.push(format!(
                "{owner}: {} strengthened from {} to {}.",
                incoming.kind, old_magnitude, existing.magnitude
            ));
        }
        AppliedStatus::Combined
    }

    /// Removes a kind immediately, returning whether it was present.
    pub fn remove(&mut self, kind: StatusKind) -> bool {
        let before = self.effects.len();
        self.effects.retain(|e| e.kind != kind);
        self.effects.len() != before
    }

    /// Removes every battle-category status (end of combat, escape).
    pub fn clear_battle(&mut self) {
        self.effects
            .retain(|e| e.kind.category() != StatusCategory::Battle);
    }

    /// Decrements every status of `category` by one tick and removes the
    /// drained ones. Returns the expired kinds in set order.
    pub fn tick(
        &mut self,
        category: StatusCategory,
    ) -> ArrayVec<StatusKind, { GameConfig::MAX_STATUS_EFFECTS }> {
        let mut expired = ArrayVec::new();
        for effect in self.effects.iter_mut() {
            if effect.kind.category() == category {
                effect.duration -= 1;
                if effect.duration == 0 {
                    expired.push(effect.kind);
                }
            }
        }
        self.effects.retain(|e| e.duration > 0);
        expired
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusInstance> {
        self.effects.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Human-readable summary, e.g. `Poison(2), AtkUp(5)x3`, or `none`.
    pub fn summary(&self) -> String {
        if self.effects.is_empty() {
            return "none".to_string();
        }
        self.effects
            .iter()
            .map(|e| e.summary())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(kind: StatusKind, duration: u32) -> StatusInstance {
        StatusInstance::new(kind, duration).unwrap()
    }

    fn valued(kind: StatusKind, duration: u32, magnitude: u32) -> StatusInstance {
        StatusInstance::with_magnitude(kind, duration, magnitude).unwrap()
    }

    #[test]
    fn max_duration_combine() {
        let mut log = MessageLog::new();
        for kind in [
            StatusKind::Weak,
            StatusKind::Poison,
            StatusKind::Stun,
            StatusKind::Barrier,
        ] {
            let mut set = StatusSet::empty();
            set.apply(plain(kind, 3), "Hero", &mut log);
            let outcome = set.apply(plain(kind, 2), "Hero", &mut log);
            assert_eq!(outcome, AppliedStatus::Combined);
            assert_eq!(set.duration(kind), 3, "{kind}");

            set.apply(plain(kind, 5), "Hero", &mut log);
            assert_eq!(set.duration(kind), 5, "{kind}");
        }
    }

    #[test]
    fn sum_duration_combine() {
        let mut log = MessageLog::new();
        let mut set = StatusSet::empty();
        set.apply(plain(StatusKind::Immune, 3), "Hero", &mut log);
        set.apply(plain(StatusKind::Immune, 4), "Hero", &mut log);
        assert_eq!(set.duration(StatusKind::Immune), 7);

        set.apply(valued(StatusKind::DamageReduction, 5, 70), "Hero", &mut log);
        set.apply(valued(StatusKind::DamageReduction, 2, 70), "Hero", &mut log);
        assert_eq!(set.duration(StatusKind::DamageReduction), 7);

        set.apply(valued(StatusKind::HealingScroll, 10, 5), "Hero", &mut log);
        set.apply(valued(StatusKind::HealingScroll, 1, 5), "Hero", &mut log);
        assert_eq!(set.duration(StatusKind::HealingScroll), 11);
    }

    #[test]
    fn atk_up_sums_magnitude_keeps_max_duration() {
        let mut log = MessageLog::new();
        let mut set = StatusSet::empty();
        set.apply(valued(StatusKind::AtkUp, 5, 3), "Hero", &mut log);
        set.apply(valued(StatusKind::AtkUp, 2, 4), "Hero", &mut log);
        assert_eq!(set.duration(StatusKind::AtkUp), 5);
        assert_eq!(set.magnitude(StatusKind::AtkUp), Some(7));
    }

    #[test]
    fn atk_multiplier_takes_max_magnitude() {
        let mut log = MessageLog::new();
        let mut set = StatusSet::empty();
        set.apply(valued(StatusKind::AtkMultiplier, 1, 2), "Hero", &mut log);
        set.apply(valued(StatusKind::AtkMultiplier, 3, 3), "Hero", &mut log);
        assert_eq!(set.duration(StatusKind::AtkMultiplier), 3);
        assert_eq!(set.magnitude(StatusKind::AtkMultiplier), Some(3));
    }

    #[test]
    fn immunity_blocks_only_negative_kinds() {
        let mut log = MessageLog::new();
        let mut set = StatusSet::empty();
        set.apply(plain(StatusKind::Immune, 5), "Hero", &mut log);

        for kind in [StatusKind::Weak, StatusKind::Poison, StatusKind::Stun] {
            let outcome = set.apply(plain(kind, 3), "Hero", &mut log);
            assert_eq!(outcome, AppliedStatus::BlockedByImmunity);
            assert!(!set.is_active(kind), "{kind} should have been dropped");
        }

        assert_eq!(
            set.apply(valued(StatusKind::AtkUp, 3, 2), "Hero", &mut log),
            AppliedStatus::Added
        );
        assert_eq!(
            set.apply(plain(StatusKind::Barrier, 2), "Hero", &mut log),
            AppliedStatus::Added
        );
        assert_eq!(
            set.apply(valued(StatusKind::DamageReduction, 4, 70), "Hero", &mut log),
            AppliedStatus::Added
        );
    }

    #[test]
    fn tick_only_touches_matching_category() {
        let mut log = MessageLog::new();
        let mut set = StatusSet::empty();
        set.apply(plain(StatusKind::Poison, 1), "Hero", &mut log);
        set.apply(plain(StatusKind::Immune, 2), "Hero", &mut log);

        let expired = set.tick(StatusCategory::Battle);
        assert_eq!(expired.as_slice(), &[StatusKind::Poison]);
        assert!(!set.is_active(StatusKind::Poison));
        assert_eq!(set.duration(StatusKind::Immune), 2);

        let expired = set.tick(StatusCategory::Persistent);
        assert!(expired.is_empty());
        assert_eq!(set.duration(StatusKind::Immune), 1);
    }
}
