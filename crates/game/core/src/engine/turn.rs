//! Per-turn status resolution.
//!
//! A *turn pass* is the end-of-turn upkeep for one actor: damage-over-time,
//! duration countdown for one status category, regeneration, and the
//! derived-attack refresh. Battle exchanges run a battle pass per combatant
//! per input; adventure steps run a persistent pass on the player.

use crate::config::GameConfig;
use crate::env::RngStream;
use crate::log::MessageLog;
use crate::state::ActorState;
use crate::status::{StatusCategory, StatusKind};

/// Runs one turn pass of the given category on the actor.
///
/// Order: poison damage (battle passes only, suppressed while Immune),
/// duration countdown and expiry, healing regeneration (persistent passes
/// only), derived-attack refresh. Poison can kill; callers check
/// `is_alive` afterwards.
pub fn resolve_turn(
    actor: &mut ActorState,
    category: StatusCategory,
    stream: &mut RngStream<'_>,
    log: &mut MessageLog,
) {
    if category == StatusCategory::Battle
        && actor.statuses.is_active(StatusKind::Poison)
        && !actor.statuses.is_active(StatusKind::Immune)
    {
        let damage = (actor.hp / GameConfig::POISON_HP_DIVISOR).max(1);
        actor.hp -= damage;
        log.push(format!(
            "{} suffers {} poison damage. ({} HP left)",
            actor.name,
            damage,
            actor.hp.max(0)
        ));
    }

    for kind in actor.statuses.tick(category) {
        log.push(format!("{}'s {} wore off.", actor.name, kind));
    }

    if category == StatusCategory::Persistent {
        if let Some(cap) = actor.statuses.magnitude(StatusKind::HealingScroll) {
            let healed = actor.heal(stream.range(1, cap) as i32);
            if healed > 0 {
                log.push(format!(
                    "{}'s healing scroll restores {} HP.",
                    actor.name, healed
                ));
            }
        }
    }

    actor.recompute_attack();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::status::StatusInstance;

    fn pass(actor: &mut ActorState, category: StatusCategory, log: &mut MessageLog) {
        let rng = PcgRng;
        let mut stream = RngStream::new(&rng, 1);
        resolve_turn(actor, category, &mut stream, log);
    }

    #[test]
    fn poison_drains_a_tenth_per_battle_pass() {
        let mut log = MessageLog::new();
        let mut actor = ActorState::monster("Hero", 100, 5, 1);
        actor.apply_status(StatusInstance::new(StatusKind::Poison, 3).unwrap(), &mut log);

        pass(&mut actor, StatusCategory::Battle, &mut log);
        assert_eq!(actor.hp, 90);
        pass(&mut actor, StatusCategory::Battle, &mut log);
        assert_eq!(actor.hp, 81);
    }

    #[test]
    fn poison_always_bites_for_at_least_one() {
        let mut log = MessageLog::new();
        let mut actor = ActorState::monster("Rat", 3, 1, 1);
        actor.apply_status(StatusInstance::new(StatusKind::Poison, 5).unwrap(), &mut log);

        pass(&mut actor, StatusCategory::Battle, &mut log);
        assert_eq!(actor.hp, 2);
    }

    #[test]
    fn immunity_suppresses_lingering_poison() {
        let mut log = MessageLog::new();
        let mut actor = ActorState::monster("Hero", 100, 5, 1);
        actor.apply_status(StatusInstance::new(StatusKind::Poison, 3).unwrap(), &mut log);
        actor.apply_status(StatusInstance::new(StatusKind::Immune, 2).unwrap(), &mut log);

        pass(&mut actor, StatusCategory::Battle, &mut log);
        assert_eq!(actor.hp, 100);
    }

    #[test]
    fn battle_pass_skips_persistent_statuses() {
        let mut log = MessageLog::new();
        let mut actor = ActorState::monster("Hero", 20, 5, 1);
        actor.apply_status(StatusInstance::new(StatusKind::Stun, 1).unwrap(), &mut log);
        actor.apply_status(StatusInstance::new(StatusKind::Immune, 2).unwrap(), &mut log);

        pass(&mut actor, StatusCategory::Battle, &mut log);
        assert!(!actor.statuses.is_active(StatusKind::Stun));
        assert_eq!(actor.statuses.duration(StatusKind::Immune), 2);
    }

    #[test]
    fn healing_scroll_restores_on_adventure_pass() {
        let mut log = MessageLog::new();
        let mut actor = ActorState::monster("Hero", 20, 5, 1);
        actor.hp = 5;
        actor.apply_status(
            StatusInstance::with_magnitude(StatusKind::HealingScroll, 5, 4).unwrap(),
            &mut log,
        );

        pass(&mut actor, StatusCategory::Persistent, &mut log);
        assert!(actor.hp > 5 && actor.hp <= 9);
        assert_eq!(actor.statuses.duration(StatusKind::HealingScroll), 4);
    }

    #[test]
    fn weak_expiry_restores_attack() {
        let mut log = MessageLog::new();
        let mut actor = ActorState::monster("Hero", 20, 10, 1);
        actor.apply_status(StatusInstance::new(StatusKind::Weak, 1).unwrap(), &mut log);
        assert_eq!(actor.attack, 8);

        pass(&mut actor, StatusCategory::Battle, &mut log);
        assert_eq!(actor.attack, 10);
    }
}
