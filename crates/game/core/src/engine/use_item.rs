//! Inventory scene: use a battle item or go back.
//!
//! Only battle-category items are usable on demand; consumables never
//! reach the pack and passives trigger on their own. Using an item in
//! combat costs the turn, so the monster still gets its round. Outside
//! combat an item can be used to walk into the next fight pre-buffed.

use crate::engine::battle;
use crate::engine::errors::EngineError;
use crate::engine::items::apply_item_effect;
use crate::env::{GameEnv, RngStream};
use crate::item::ItemKind;
use crate::state::{DoorScene, GameState, Scene, SceneKind};

pub(super) fn handle(
    state: &mut GameState,
    env: &GameEnv<'_>,
    stream: &mut RngStream<'_>,
    index: usize,
) -> Result<(), EngineError> {
    let in_battle = matches!(
        state.scenes.last.as_ref().map(Scene::kind),
        Some(SceneKind::Battle)
    );
    let usable: Vec<usize> = state
        .player
        .inventory
        .usable(ItemKind::Battle)
        .into_iter()
        .map(|(slot, _)| slot)
        .collect();

    if index == usable.len() {
        if !state.scenes.resume() {
            state.scenes.replace(Scene::Door(DoorScene::default()));
        }
        return Ok(());
    }
    let Some(&slot) = usable.get(index) else {
        state.log.push("That's not one of your options.");
        return Ok(());
    };
    let Some(item) = state.player.inventory.remove(slot) else {
        return Ok(());
    };
    state.log.push(format!("You use the {}.", item.name));

    if in_battle {
        let enemy = match state.scenes.last.as_mut() {
            Some(Scene::Battle(battle)) => Some(&mut battle.monster),
            _ => None,
        };
        apply_item_effect(&mut state.player, enemy, &item, &mut state.log)?;
        state.scenes.resume();
        battle::enemy_round(state, env, stream)
    } else {
        apply_item_effect(&mut state.player, None, &item, &mut state.log)?;
        state.scenes.resume();
        Ok(())
    }
}
