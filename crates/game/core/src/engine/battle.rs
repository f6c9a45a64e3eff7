//! Battle scene: attack, item detour, escape.

use crate::engine::combat::{self, AttackOutcome, DamageOutcome};
use crate::engine::errors::EngineError;
use crate::engine::items::acquire_item;
use crate::engine::turn::resolve_turn;
use crate::env::{GameEnv, RngStream};
use crate::item::ItemKind;
use crate::state::{DoorScene, GameState, Scene};
use crate::status::{StatusCategory, StatusInstance, StatusKind};

const CHOICE_ATTACK: usize = 0;
const CHOICE_USE_ITEM: usize = 1;
const CHOICE_ESCAPE: usize = 2;

/// Negative statuses a monster hit can inflict, uniform pick.
const INFLICTABLE: [StatusKind; 3] = [StatusKind::Weak, StatusKind::Poison, StatusKind::Stun];

pub(super) fn handle(
    state: &mut GameState,
    env: &GameEnv<'_>,
    stream: &mut RngStream<'_>,
    index: usize,
) -> Result<(), EngineError> {
    match index {
        CHOICE_ATTACK => attack(state, env, stream),
        CHOICE_USE_ITEM => {
            if state.player.inventory.usable(ItemKind::Battle).is_empty() {
                state.log.push("You carry nothing you could use in a fight.");
                return Ok(());
            }
            state.scenes.go_to(Scene::UseItem);
            Ok(())
        }
        CHOICE_ESCAPE => escape(state, env, stream),
        _ => {
            state.log.push("That's not one of your options.");
            Ok(())
        }
    }
}

fn attack(
    state: &mut GameState,
    env: &GameEnv<'_>,
    stream: &mut RngStream<'_>,
) -> Result<(), EngineError> {
    let defeated = {
        let Scene::Battle(battle) = &mut state.scenes.current else {
            return Ok(());
        };
        let outcome =
            combat::resolve_attack(&state.player, &mut battle.monster, stream, &mut state.log);
        matches!(
            outcome,
            AttackOutcome::Landed(DamageOutcome::Defeated { .. })
        )
    };
    if defeated {
        return victory(state, env, stream);
    }
    enemy_round(state, env, stream)
}

fn escape(
    state: &mut GameState,
    env: &GameEnv<'_>,
    stream: &mut RngStream<'_>,
) -> Result<(), EngineError> {
    let chance = combat::escape_chance(&state.player);
    if stream.chance(chance) {
        state.log.push("You slip away from the fight!");
        state.player.clear_battle_statuses();
        if !state.scenes.resume() {
            state.scenes.replace(Scene::Door(DoorScene::default()));
        }
        Ok(())
    } else {
        state.log.push("You fail to get away!");
        enemy_round(state, env, stream)
    }
}

/// Runs the monster's action and both combatants' battle passes. Shared
/// with the inventory detour so an item use still costs the turn.
pub(super) fn enemy_round(
    state: &mut GameState,
    env: &GameEnv<'_>,
    stream: &mut RngStream<'_>,
) -> Result<(), EngineError> {
    {
        let Scene::Battle(battle) = &mut state.scenes.current else {
            return Ok(());
        };
        let monster = &mut battle.monster;

        let outcome = combat::resolve_attack(monster, &mut state.player, stream, &mut state.log);
        if let AttackOutcome::Landed(DamageOutcome::Survived { .. }) = outcome {
            if let Some(tier) = monster.tier {
                if stream.chance(combat::inflict_chance(tier)) {
                    let kind = INFLICTABLE[stream.pick_index(INFLICTABLE.len())];
                    let duration = stream.range(1, 2);
                    state.log.push(format!("{}'s blow carries a curse!", monster.name));
                    state
                        .player
                        .apply_status(StatusInstance::new(kind, duration)?, &mut state.log);
                }
            }
        }
        if !state.player.is_alive() {
            return Ok(());
        }

        resolve_turn(
            &mut state.player,
            StatusCategory::Battle,
            stream,
            &mut state.log,
        );
        resolve_turn(monster, StatusCategory::Battle, stream, &mut state.log);

        if monster.is_alive() {
            return Ok(());
        }
        state.log.push(format!("{} is defeated!", monster.name));
    }
    victory(state, env, stream)
}

fn victory(
    state: &mut GameState,
    env: &GameEnv<'_>,
    stream: &mut RngStream<'_>,
) -> Result<(), EngineError> {
    let (bounty, tier) = {
        let Scene::Battle(battle) = &state.scenes.current else {
            return Ok(());
        };
        (battle.monster.gold, battle.monster.tier.unwrap_or(1))
    };

    if bounty > 0 {
        state.player.gold += bounty;
        state.log.push(format!(
            "You loot {} gold. ({} gold)",
            bounty, state.player.gold
        ));
    }
    if let Some(loot) = env.items()?.monster_loot(stream, tier) {
        acquire_item(&mut state.player, loot, &mut state.log)?;
    }
    state.player.clear_battle_statuses();
    state.scenes.replace(Scene::Door(DoorScene::default()));
    Ok(())
}
