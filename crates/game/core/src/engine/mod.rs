//! Turn resolution engine.
//!
//! [`GameEngine`] is the single entry point for player input: it seeds a
//! deterministic roll stream from the session seed and input nonce,
//! dispatches to the current scene's handler, enforces the death invariant,
//! and materializes oracle-backed scene content.

mod battle;
mod combat;
mod door;
mod errors;
mod event;
mod game_over;
mod items;
mod shop;
mod turn;
mod use_item;

pub use combat::{
    AttackOutcome, DamageOutcome, apply_damage, escape_chance, inflict_chance, resolve_attack,
};
pub use errors::EngineError;
pub use items::{acquire_item, apply_item_effect, issue_starter_kit};
pub use turn::resolve_turn;

use crate::config::GameConfig;
use crate::env::{GameEnv, RngStream, compute_seed};
use crate::state::{GameState, Scene, SceneKind};

/// Roll-seed context tags, one per purpose within a single input.
const CTX_ACTION: u32 = 0;
const CTX_POPULATE: u32 = 1;

/// Drives one run's state in response to choice inputs.
pub struct GameEngine<'s> {
    state: &'s mut GameState,
}

impl<'s> GameEngine<'s> {
    pub fn new(state: &'s mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Handles one player input: the `index`-th choice of the current
    /// scene, as ordered by [`GameState::choice_labels`].
    pub fn handle_choice(&mut self, env: &GameEnv<'_>, index: usize) -> Result<(), EngineError> {
        self.ensure_populated(env)?;
        self.state.nonce += 1;

        let rng = env.rng()?;
        let seed = compute_seed(self.state.session_seed, self.state.nonce, CTX_ACTION);
        let mut stream = RngStream::new(rng, seed);

        match self.state.scenes.current.kind() {
            SceneKind::Door => door::handle(self.state, &mut stream, index)?,
            SceneKind::Battle => battle::handle(self.state, env, &mut stream, index)?,
            SceneKind::Shop => shop::handle(self.state, index)?,
            SceneKind::UseItem => use_item::handle(self.state, env, &mut stream, index)?,
            SceneKind::Event => event::handle(self.state, index)?,
            SceneKind::GameOver => game_over::handle(self.state, env, index)?,
        }

        // Death invariant: whatever dropped the player to zero, the run is
        // in the game-over scene before control returns. The killing scene
        // stays stacked so a revival resumes it.
        if !self.state.player.is_alive()
            && self.state.scenes.current.kind() != SceneKind::GameOver
        {
            self.state
                .log
                .push(format!("{} collapses...", self.state.player.name));
            self.state.scenes.go_to(Scene::GameOver);
        }

        self.ensure_populated(env)
    }

    /// Fills in oracle-backed scene content: a fresh door set or shop
    /// stock. No-op when the current scene is already materialized.
    ///
    /// The round counter advances when a door is chosen, so the set rolled
    /// here belongs to round `round + 1`.
    pub fn ensure_populated(&mut self, env: &GameEnv<'_>) -> Result<(), EngineError> {
        match &self.state.scenes.current {
            Scene::Door(door) if door.doors.is_empty() => {
                let upcoming = self.state.round + 1;
                let rng = env.rng()?;
                let seed = compute_seed(self.state.session_seed, self.state.nonce, CTX_POPULATE);
                let mut stream = RngStream::new(rng, seed);
                let doors = env.doors()?.door_set(&mut stream, upcoming);
                if doors.len() != GameConfig::DOORS_PER_SET {
                    return Err(EngineError::MalformedDoorSet { count: doors.len() });
                }
                self.state.log.push(format!(
                    "Round {upcoming}: three doors stand before you."
                ));
                if let Scene::Door(door) = &mut self.state.scenes.current {
                    door.doors = doors;
                }
                Ok(())
            }
            Scene::Shop(shop) if shop.offers.is_empty() => {
                let rng = env.rng()?;
                let seed = compute_seed(self.state.session_seed, self.state.nonce, CTX_POPULATE);
                let mut stream = RngStream::new(rng, seed);
                let offers = env.shop()?.offers(&mut stream, self.state.player.gold);
                if offers.len() != GameConfig::SHOP_OFFER_COUNT {
                    return Err(EngineError::MalformedShop {
                        count: offers.len(),
                    });
                }
                if let Scene::Shop(shop) = &mut self.state.scenes.current {
                    shop.offers = offers;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
