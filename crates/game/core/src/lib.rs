//! Deterministic core of the door-crawl game.
//!
//! The crate is split along a strict state/logic/content seam:
//!
//! - [`state`] holds the pure data a run consists of: the player, the scene
//!   machine, inventories, and live status effects.
//! - [`engine`] mutates that state in response to choice inputs.
//! - [`env`] declares oracle traits for everything the engine must look up
//!   but does not own: door generation, item tables, shop stock, event
//!   decks, and randomness.
//!
//! Content crates implement the oracles; transport crates own a
//! [`GameState`] and feed inputs through a [`GameEngine`]. Given the same
//! session seed and input sequence, a run replays exactly.

pub mod config;
pub mod engine;
pub mod env;
pub mod item;
pub mod log;
pub mod state;
pub mod status;

pub use config::GameConfig;
pub use engine::{EngineError, GameEngine};
pub use env::GameEnv;
pub use item::{ItemDefinition, ItemEffect, ItemKind, ItemTarget};
pub use log::MessageLog;
pub use state::{ActorState, GameState, Scene, SceneKind};
pub use status::{StatusInstance, StatusKind, StatusSet};
