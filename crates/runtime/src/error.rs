use game_core::engine::EngineError;

/// Errors surfaced to the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no session with id {id:?}")]
    UnknownSession { id: String },

    #[error("session {id:?} has already ended")]
    SessionEnded { id: String },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("failed to encode display state: {0}")]
    Encode(#[from] serde_json::Error),
}
