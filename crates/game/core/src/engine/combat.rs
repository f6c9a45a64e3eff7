//! Attack and damage resolution.
//!
//! These functions resolve one hit: no status ticking and no scene
//! transitions happen here. The battle scene layer sequences actions and
//! runs the turn passes; callers act on the returned outcome instead of
//! re-deriving state.

use crate::config::GameConfig;
use crate::env::RngStream;
use crate::log::MessageLog;
use crate::state::ActorState;
use crate::status::StatusKind;

/// What happened to the defender when damage was dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    /// A barrier absorbed the hit; no HP change.
    Blocked,
    Survived { damage: i32 },
    /// Lethal damage, consumed by a Revive item; back at starting HP.
    Revived { damage: i32 },
    Defeated { damage: i32 },
}

/// Result of one attack action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackOutcome {
    /// The attacker is stunned and loses the action.
    Stunned,
    Landed(DamageOutcome),
}

/// Deals raw damage to a target, honoring Barrier and DamageReduction,
/// then runs the death check: a held Revive item is consumed to restore
/// starting HP, otherwise the target is defeated.
///
/// Reduced damage keeps a floor of 1 so a reduced hit never becomes free.
pub fn apply_damage(target: &mut ActorState, raw: i32, log: &mut MessageLog) -> DamageOutcome {
    if target.statuses.is_active(StatusKind::Barrier) {
        log.push(format!("{}'s barrier absorbs the blow!", target.name));
        return DamageOutcome::Blocked;
    }

    let damage = match target.statuses.magnitude(StatusKind::DamageReduction) {
        Some(retained) => {
            let reduced = ((raw * retained as i32) / 100).max(1);
            log.push(format!(
                "{}'s ward dampens the hit: {} becomes {}.",
                target.name, raw, reduced
            ));
            reduced
        }
        None => raw,
    };
    target.hp -= damage;
    log.push(format!(
        "{} takes {} damage. ({} HP left)",
        target.name,
        damage,
        target.hp.max(0)
    ));

    if target.hp > 0 {
        return DamageOutcome::Survived { damage };
    }
    if target.inventory.take_revive().is_some() {
        target.hp = target.starting_hp;
        log.push(format!(
            "{}'s Revive Scroll burns to ash, dragging them back to their feet!",
            target.name
        ));
        DamageOutcome::Revived { damage }
    } else {
        log.push(format!("{} is defeated!", target.name));
        DamageOutcome::Defeated { damage }
    }
}

/// Resolves one attack: a stunned attacker forfeits; otherwise the
/// attacker's derived attack, with a little variance, is dealt to the
/// defender.
pub fn resolve_attack(
    attacker: &ActorState,
    defender: &mut ActorState,
    stream: &mut RngStream<'_>,
    log: &mut MessageLog,
) -> AttackOutcome {
    if attacker.statuses.is_active(StatusKind::Stun) {
        log.push(format!("{} is stunned and cannot act!", attacker.name));
        return AttackOutcome::Stunned;
    }
    log.push(format!("{} attacks {}!", attacker.name, defender.name));
    let raw = (attacker.attack - stream.range(0, 1) as i32).max(1);
    AttackOutcome::Landed(apply_damage(defender, raw, log))
}

/// Chance (percent) that a monster hit inflicts a negative status.
pub fn inflict_chance(tier: u8) -> i32 {
    let bonus = GameConfig::INFLICT_PER_TIER_PERCENT * (tier.saturating_sub(1) as i32);
    (GameConfig::INFLICT_BASE_PERCENT + bonus).min(GameConfig::INFLICT_CAP_PERCENT)
}

/// Chance (percent) that fleeing a battle succeeds. Weak and Poison each
/// lower the odds; a stunned player cannot flee at all.
pub fn escape_chance(player: &ActorState) -> i32 {
    if player.statuses.is_active(StatusKind::Stun) {
        return 0;
    }
    let mut chance = GameConfig::ESCAPE_BASE_PERCENT;
    if player.statuses.is_active(StatusKind::Weak) {
        chance -= GameConfig::ESCAPE_STATUS_PENALTY;
    }
    if player.statuses.is_active(StatusKind::Poison) {
        chance -= GameConfig::ESCAPE_STATUS_PENALTY;
    }
    chance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::item::{ItemDefinition, ItemEffect, ItemKind};
    use crate::status::StatusInstance;

    fn combatants() -> (ActorState, ActorState, MessageLog) {
        (
            ActorState::monster("Hero", 20, 5, 1),
            ActorState::monster("Goblin", 12, 3, 1),
            MessageLog::new(),
        )
    }

    #[test]
    fn plain_attack_deals_derived_attack_with_variance() {
        let rng = PcgRng;
        let mut stream = RngStream::new(&rng, 5);
        let (hero, mut goblin, mut log) = combatants();
        match resolve_attack(&hero, &mut goblin, &mut stream, &mut log) {
            AttackOutcome::Landed(DamageOutcome::Survived { damage }) => {
                assert!((4..=5).contains(&damage));
                assert_eq!(goblin.hp, 12 - damage);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn variance_never_drops_below_one() {
        let rng = PcgRng;
        let (_, mut goblin, mut log) = combatants();
        let mouse = ActorState::monster("Mouse", 2, 1, 1);
        for seed in 0..20 {
            let mut stream = RngStream::new(&rng, seed);
            goblin.hp = 12;
            match resolve_attack(&mouse, &mut goblin, &mut stream, &mut log) {
                AttackOutcome::Landed(DamageOutcome::Survived { damage }) => {
                    assert_eq!(damage, 1)
                }
                other => panic!("unexpected outcome {other:?}"),
            }
        }
    }

    #[test]
    fn stunned_attacker_forfeits() {
        let rng = PcgRng;
        let mut stream = RngStream::new(&rng, 5);
        let (mut hero, mut goblin, mut log) = combatants();
        hero.apply_status(StatusInstance::new(StatusKind::Stun, 1).unwrap(), &mut log);

        let outcome = resolve_attack(&hero, &mut goblin, &mut stream, &mut log);
        assert_eq!(outcome, AttackOutcome::Stunned);
        assert_eq!(goblin.hp, 12);
    }

    #[test]
    fn barrier_blocks_everything() {
        let (_, mut goblin, mut log) = combatants();
        goblin.apply_status(StatusInstance::new(StatusKind::Barrier, 2).unwrap(), &mut log);

        assert_eq!(apply_damage(&mut goblin, 999, &mut log), DamageOutcome::Blocked);
        assert_eq!(goblin.hp, 12);
    }

    #[test]
    fn damage_reduction_scales_and_floors() {
        let (mut hero, _, mut log) = combatants();
        hero.apply_status(
            StatusInstance::with_magnitude(StatusKind::DamageReduction, 3, 70).unwrap(),
            &mut log,
        );

        assert_eq!(
            apply_damage(&mut hero, 10, &mut log),
            DamageOutcome::Survived { damage: 7 }
        );
        // 1 * 70 / 100 rounds to zero, floored back up to 1.
        assert_eq!(
            apply_damage(&mut hero, 1, &mut log),
            DamageOutcome::Survived { damage: 1 }
        );
    }

    #[test]
    fn lethal_damage_consumes_a_revive_item() {
        let (mut hero, _, mut log) = combatants();
        hero.hp = 1;
        hero.inventory
            .store(ItemDefinition::new(
                "Revive Scroll",
                ItemKind::Passive,
                ItemEffect::Revive,
            ))
            .unwrap();

        assert_eq!(
            apply_damage(&mut hero, 9, &mut log),
            DamageOutcome::Revived { damage: 9 }
        );
        assert_eq!(hero.hp, hero.starting_hp);
        assert!(!hero.inventory.has_revive());

        // Second death with no scroll left.
        assert_eq!(
            apply_damage(&mut hero, 99, &mut log),
            DamageOutcome::Defeated { damage: 99 }
        );
        assert!(!hero.is_alive());
    }

    #[test]
    fn inflict_chance_scales_with_tier_and_caps() {
        assert_eq!(inflict_chance(1), 10);
        assert_eq!(inflict_chance(2), 20);
        assert_eq!(inflict_chance(4), 40);
        assert_eq!(inflict_chance(7), 40);
    }

    #[test]
    fn escape_chance_penalties_stack() {
        let (mut hero, _, mut log) = combatants();
        assert_eq!(escape_chance(&hero), 30);

        hero.apply_status(StatusInstance::new(StatusKind::Weak, 2).unwrap(), &mut log);
        assert_eq!(escape_chance(&hero), 20);

        hero.apply_status(StatusInstance::new(StatusKind::Poison, 2).unwrap(), &mut log);
        assert_eq!(escape_chance(&hero), 10);

        hero.apply_status(StatusInstance::new(StatusKind::Stun, 1).unwrap(), &mut log);
        assert_eq!(escape_chance(&hero), 0);
    }
}
