//! Session lifecycle.
//!
//! A [`Session`] owns one run: its [`GameState`] plus the content bundle
//! backing the oracles. The [`SessionManager`] keys live sessions by id so
//! a stateless transport can route requests.

use std::collections::HashMap;

use game_content::ContentBundle;
use game_core::config::GameConfig;
use game_core::engine::{GameEngine, issue_starter_kit};
use game_core::state::GameState;

use crate::display::DisplayState;
use crate::error::SessionError;

pub struct Session {
    state: GameState,
    content: ContentBundle,
}

impl Session {
    /// Starts a run: fresh player with the starter kit, first door set
    /// rolled.
    pub fn new(player_name: &str, seed: u64) -> Result<Self, SessionError> {
        let content = ContentBundle::new();
        let mut state = GameState::new(player_name, seed, GameConfig::new());

        let env = content.env();
        issue_starter_kit(&mut state.player, &env)?;
        GameEngine::new(&mut state).ensure_populated(&env)?;

        Ok(Self { state, content })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_ended(&self) -> bool {
        self.state.quit_requested
    }

    /// Applies one choice input and returns the refreshed view.
    pub fn handle_choice(&mut self, index: usize) -> Result<DisplayState, SessionError> {
        let env = self.content.env();
        GameEngine::new(&mut self.state).handle_choice(&env, index)?;
        Ok(DisplayState::capture(&mut self.state))
    }

    /// Current view without applying an input.
    pub fn display(&mut self) -> DisplayState {
        DisplayState::capture(&mut self.state)
    }
}

/// Routes per-id inputs to live sessions.
#[derive(Default)]
pub struct SessionManager {
    sessions: HashMap<String, Session>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates (or replaces) the session for `id` and returns its opening
    /// view. The seed is drawn fresh; use [`Self::create_seeded`] to pin it.
    pub fn create(&mut self, id: &str, player_name: &str) -> Result<DisplayState, SessionError> {
        self.create_seeded(id, player_name, rand::random())
    }

    pub fn create_seeded(
        &mut self,
        id: &str,
        player_name: &str,
        seed: u64,
    ) -> Result<DisplayState, SessionError> {
        let mut session = Session::new(player_name, seed)?;
        let view = session.display();
        if self.sessions.insert(id.to_string(), session).is_some() {
            tracing::info!(session = %id, "replaced existing session");
        } else {
            tracing::info!(session = %id, seed, "created session");
        }
        Ok(view)
    }

    /// Applies one input to the session for `id`. A session that quits is
    /// dropped from the table.
    pub fn handle_choice(
        &mut self,
        id: &str,
        index: usize,
    ) -> Result<DisplayState, SessionError> {
        let session = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::UnknownSession { id: id.to_string() })?;
        if session.is_ended() {
            return Err(SessionError::SessionEnded { id: id.to_string() });
        }

        tracing::debug!(session = %id, index, "handling choice");
        let view = session.handle_choice(index)?;
        if view.ended {
            tracing::info!(session = %id, "session quit");
            self.sessions.remove(id);
        }
        Ok(view)
    }

    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.get(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
