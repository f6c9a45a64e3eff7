//! Mutable run state.
//!
//! [`GameState`] is everything a session owns: the player, the scene
//! machine, the RNG bookkeeping, and the message log. It holds no behavior
//! beyond bookkeeping; the engine module mutates it.

mod actor;
mod inventory;
mod scene;

pub use actor::ActorState;
pub use inventory::InventoryState;
pub use scene::{
    BattleScene, DoorDescriptor, DoorEvent, DoorScene, EventCard, EventChoice, EventEffect,
    EventOutcome, EventScene, RewardSpec, Scene, SceneKind, SceneState, ShopOffer, ShopScene,
};

use crate::config::GameConfig;
use crate::item::ItemKind;
use crate::log::MessageLog;

/// Complete state of one run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub config: GameConfig,
    /// Base seed fixed at session creation; replaying the same seed and
    /// input sequence reproduces the run.
    pub session_seed: u64,
    /// Input sequence number, incremented once per handled choice.
    pub nonce: u64,
    /// Doors opened so far; drives monster tier scaling.
    pub round: u32,
    pub player: ActorState,
    pub scenes: SceneState,
    pub log: MessageLog,
    /// Set when the player quits from the game-over scene.
    pub quit_requested: bool,
}

impl GameState {
    pub fn new(player_name: impl Into<String>, session_seed: u64, config: GameConfig) -> Self {
        Self {
            session_seed,
            nonce: 0,
            round: 0,
            player: ActorState::player(player_name, &config),
            scenes: SceneState::new(),
            log: MessageLog::new(),
            quit_requested: false,
            config,
        }
    }

    /// Starts a fresh run in place: new player, round counter and scenes
    /// reset. The seed and nonce carry over so the new run's rolls differ
    /// from the first.
    pub fn reset(&mut self) {
        self.player = ActorState::player(self.player.name.clone(), &self.config);
        self.round = 0;
        self.scenes = SceneState::new();
        self.quit_requested = false;
    }

    /// Labels for the current scene's choices, in input-index order.
    pub fn choice_labels(&self) -> Vec<String> {
        match &self.scenes.current {
            Scene::Door(door) => {
                let mut labels: Vec<String> = door
                    .doors
                    .iter()
                    .enumerate()
                    .map(|(i, d)| format!("Door {}: {}", i + 1, d.hint))
                    .collect();
                labels.push("Check inventory".to_string());
                labels
            }
            Scene::Battle(_) => vec![
                "Attack".to_string(),
                "Use item".to_string(),
                "Run away".to_string(),
            ],
            Scene::Shop(shop) => {
                let mut labels: Vec<String> = shop
                    .offers
                    .iter()
                    .map(|offer| format!("Buy {} ({}g)", offer.item.name, offer.price))
                    .collect();
                labels.push("Leave the shop".to_string());
                labels
            }
            Scene::UseItem => {
                let mut labels: Vec<String> = self
                    .player
                    .inventory
                    .usable(ItemKind::Battle)
                    .into_iter()
                    .map(|(_, item)| item.name.clone())
                    .collect();
                labels.push("Back".to_string());
                labels
            }
            Scene::Event(event) => event
                .card
                .choices
                .iter()
                .map(|choice| {
                    if choice.gold_cost > 0 {
                        format!("{} ({}g)", choice.label, choice.gold_cost)
                    } else {
                        choice.label.clone()
                    }
                })
                .collect(),
            Scene::GameOver => vec![
                "Restart".to_string(),
                "Use Revive Scroll".to_string(),
                "Quit".to_string(),
            ],
        }
    }

    /// One-line status readout for transport layers.
    pub fn status_summary(&self) -> String {
        format!(
            "HP {}/{} | ATK {} | Gold {} | Status: {}",
            self.player.hp,
            self.player.starting_hp,
            self.player.attack,
            self.player.gold,
            self.player.statuses.summary(),
        )
    }
}
