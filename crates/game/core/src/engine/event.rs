//! Event scene: resolve one narrative choice.
//!
//! Outcomes were rolled when the card was drawn, so this is pure state
//! application. Picking a choice always closes the card (unless the player
//! can't cover its gold cost, which keeps it open).

use crate::engine::combat;
use crate::engine::errors::EngineError;
use crate::engine::items::acquire_item;
use crate::state::{DoorScene, EventEffect, GameState, Scene};
use crate::status::StatusInstance;

pub(super) fn handle(state: &mut GameState, index: usize) -> Result<(), EngineError> {
    let Scene::Event(event) = &state.scenes.current else {
        return Ok(());
    };
    let Some(choice) = event.card.choices.get(index).cloned() else {
        state.log.push("That's not one of your options.");
        return Ok(());
    };

    if state.player.gold < choice.gold_cost {
        state.log.push(format!(
            "You can't spare {} gold.",
            choice.gold_cost
        ));
        return Ok(());
    }
    if choice.gold_cost > 0 {
        state.player.gold -= choice.gold_cost;
        state.log.push(format!(
            "You hand over {} gold. ({} gold left)",
            choice.gold_cost, state.player.gold
        ));
    }

    state.log.push(choice.outcome.message.clone());
    for effect in &choice.outcome.effects {
        apply_effect(state, effect)?;
        if !state.player.is_alive() {
            break;
        }
    }

    state.scenes.replace(Scene::Door(DoorScene::default()));
    Ok(())
}

fn apply_effect(state: &mut GameState, effect: &EventEffect) -> Result<(), EngineError> {
    match effect {
        EventEffect::Damage { amount } => {
            combat::apply_damage(&mut state.player, *amount, &mut state.log);
        }
        EventEffect::Heal { amount } => {
            let healed = state.player.heal(*amount);
            state.log.push(format!(
                "You recover {} HP. ({} HP)",
                healed, state.player.hp
            ));
        }
        EventEffect::GainGold { amount } => {
            state.player.gold += amount;
            state.log.push(format!(
                "You gain {} gold. ({} gold)",
                amount, state.player.gold
            ));
        }
        EventEffect::LoseGold { amount } => {
            let lost = state.player.gold.min(*amount);
            state.player.gold -= lost;
            state.log.push(format!(
                "You lose {} gold. ({} gold left)",
                lost, state.player.gold
            ));
        }
        EventEffect::GainItem(item) => {
            acquire_item(&mut state.player, item.clone(), &mut state.log)?;
        }
        EventEffect::RaiseBaseAttack { amount } => {
            state.player.raise_base_attack(*amount);
            state
                .log
                .push(format!("Your attack rises by {amount}."));
        }
        EventEffect::ApplyStatus {
            kind,
            duration,
            magnitude,
        } => {
            let instance = StatusInstance::from_parts(*kind, *duration, *magnitude)?;
            state.player.apply_status(instance, &mut state.log);
        }
    }
    Ok(())
}
