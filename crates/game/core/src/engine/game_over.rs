//! Game-over scene: restart, burn the revive scroll, or quit.

use crate::engine::errors::EngineError;
use crate::engine::items::issue_starter_kit;
use crate::env::GameEnv;
use crate::state::{DoorScene, GameState, Scene};

const CHOICE_RESTART: usize = 0;
const CHOICE_REVIVE: usize = 1;
const CHOICE_QUIT: usize = 2;

pub(super) fn handle(
    state: &mut GameState,
    env: &GameEnv<'_>,
    index: usize,
) -> Result<(), EngineError> {
    match index {
        CHOICE_RESTART => {
            state.reset();
            issue_starter_kit(&mut state.player, env)?;
            state.log.push("A new run begins. Three doors await.");
            Ok(())
        }
        CHOICE_REVIVE => {
            if state.player.inventory.take_revive().is_some() {
                state.player.hp = state.player.starting_hp;
                state
                    .log
                    .push("The Revive Scroll burns to ash as life floods back!");
                if !state.scenes.resume() {
                    state.scenes.replace(Scene::Door(DoorScene::default()));
                }
            } else {
                state.log.push("You have no Revive Scroll.");
            }
            Ok(())
        }
        CHOICE_QUIT => {
            state.quit_requested = true;
            state.log.push("You abandon the dungeon.");
            Ok(())
        }
        _ => {
            state.log.push("That's not one of your options.");
            Ok(())
        }
    }
}
