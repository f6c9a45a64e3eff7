//! Transport-facing view of a run.
//!
//! [`DisplayState`] is the JSON payload a frontend renders after every
//! input: stats, the current scene's choices, and the drained message log.

use serde::Serialize;

use game_core::state::{GameState, Scene, SceneKind};

#[derive(Clone, Debug, Serialize)]
pub struct PlayerView {
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub gold: u32,
    pub statuses: String,
    pub inventory: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct MonsterView {
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub tier: u8,
    pub statuses: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct DisplayState {
    pub scene: SceneKind,
    pub round: u32,
    pub player: PlayerView,
    /// Present only during battle.
    pub monster: Option<MonsterView>,
    /// Narrative prompt, for event cards.
    pub prompt: Option<String>,
    /// Button labels, in input-index order.
    pub choices: Vec<String>,
    /// Log lines produced since the previous capture.
    pub messages: Vec<String>,
    /// True once the player has quit.
    pub ended: bool,
}

impl DisplayState {
    /// Snapshots the state for transport, draining the message log.
    pub fn capture(state: &mut GameState) -> Self {
        let monster = match &state.scenes.current {
            Scene::Battle(battle) => Some(MonsterView {
                name: battle.monster.name.clone(),
                hp: battle.monster.hp.max(0),
                max_hp: battle.monster.starting_hp,
                attack: battle.monster.attack,
                tier: battle.monster.tier.unwrap_or(1),
                statuses: battle.monster.statuses.summary(),
            }),
            _ => None,
        };
        let prompt = match &state.scenes.current {
            Scene::Event(event) => Some(event.card.prompt.clone()),
            _ => None,
        };

        Self {
            scene: state.scenes.current.kind(),
            round: state.round,
            player: PlayerView {
                name: state.player.name.clone(),
                hp: state.player.hp.max(0),
                max_hp: state.player.starting_hp,
                attack: state.player.attack,
                gold: state.player.gold,
                statuses: state.player.statuses.summary(),
                inventory: state
                    .player
                    .inventory
                    .items()
                    .iter()
                    .map(|item| item.name.clone())
                    .collect(),
            },
            monster,
            prompt,
            choices: state.choice_labels(),
            messages: state.log.drain(),
            ended: state.quit_requested,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
