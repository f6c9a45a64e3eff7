//! Door scene: pick a door or detour into the inventory.
//!
//! Every real door choice advances the round counter. Non-monster doors
//! also advance the adventure clock: lingering battle statuses are cleared
//! and the player's persistent statuses run one pass. Monster doors defer
//! everything to the battle scene so battle statuses never double-tick.

use crate::engine::combat;
use crate::engine::errors::EngineError;
use crate::engine::items::acquire_item;
use crate::engine::turn::resolve_turn;
use crate::env::RngStream;
use crate::state::{
    BattleScene, DoorEvent, EventScene, GameState, RewardSpec, Scene, ShopScene,
};
use crate::status::StatusCategory;

pub(super) fn handle(
    state: &mut GameState,
    stream: &mut RngStream<'_>,
    index: usize,
) -> Result<(), EngineError> {
    let Scene::Door(door) = &state.scenes.current else {
        return Ok(());
    };
    let door_count = door.doors.len();
    if index == door_count {
        state.scenes.go_to(Scene::UseItem);
        return Ok(());
    }
    let Some(chosen) = door.doors.get(index).cloned() else {
        state.log.push("That's not one of your options.");
        return Ok(());
    };

    state.round += 1;
    state.log.push(format!("You open door {}...", index + 1));
    if !matches!(chosen.event, DoorEvent::Monster(_)) {
        state.player.clear_battle_statuses();
        adventure_step(state, stream);
        if !state.player.is_alive() {
            return Ok(());
        }
    }

    match chosen.event {
        DoorEvent::Monster(monster) => {
            state
                .log
                .push(format!("{} lunges out of the dark!", monster.name));
            // Door set stays stacked: escaping the fight returns to it.
            state.scenes.go_to(Scene::Battle(BattleScene { monster }));
        }
        DoorEvent::Trap { damage, gold_loss } => {
            state.log.push("A trap springs!");
            if gold_loss > 0 {
                let lost = state.player.gold.min(gold_loss);
                if lost > 0 {
                    state.player.gold -= lost;
                    state
                        .log
                        .push(format!("{lost} gold spills into the grates."));
                }
            }
            combat::apply_damage(&mut state.player, damage, &mut state.log);
            discard_doors(state);
        }
        DoorEvent::Reward(spec) => {
            match spec {
                RewardSpec::Gold { amount } => {
                    state.player.gold += amount;
                    state.log.push(format!(
                        "You find a pouch of {} gold. ({} gold)",
                        amount, state.player.gold
                    ));
                }
                RewardSpec::Item(item) => {
                    acquire_item(&mut state.player, item, &mut state.log)?;
                }
            }
            discard_doors(state);
        }
        DoorEvent::Shop => {
            if state.player.gold <= 0 {
                state
                    .log
                    .push("A merchant sizes up your empty purse and waves you off.");
                discard_doors(state);
            } else {
                state.log.push("A wandering merchant beckons you inside.");
                // Leaving the shop resumes this same door set.
                state.scenes.go_to(Scene::Shop(ShopScene::default()));
            }
        }
        DoorEvent::Event(card) => {
            if card.choices.is_empty() {
                return Err(EngineError::EmptyEventCard { title: card.title });
            }
            discard_doors(state);
            state.scenes.go_to(Scene::Event(EventScene { card }));
        }
    }
    Ok(())
}

/// One persistent-status pass on the player.
fn adventure_step(state: &mut GameState, stream: &mut RngStream<'_>) {
    resolve_turn(
        &mut state.player,
        StatusCategory::Persistent,
        stream,
        &mut state.log,
    );
}

/// Empties the current door set so the next population rolls a fresh one.
fn discard_doors(state: &mut GameState) {
    if let Scene::Door(door) = &mut state.scenes.current {
        door.doors.clear();
    }
}
