use crate::config::GameConfig;
use crate::env::OracleError;
use crate::status::StatusError;

/// Errors surfaced while handling a player input.
///
/// Recoverable gameplay outcomes (not enough gold, full inventory, an
/// out-of-range choice index) are log lines, not errors; these variants
/// mean the caller or the wired content is broken.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Status(#[from] StatusError),

    #[error(
        "door oracle produced {count} doors, expected {}",
        GameConfig::DOORS_PER_SET
    )]
    MalformedDoorSet { count: usize },

    #[error(
        "shop oracle produced {count} offers, expected {}",
        GameConfig::SHOP_OFFER_COUNT
    )]
    MalformedShop { count: usize },

    #[error("event card {title:?} has no choices")]
    EmptyEventCard { title: String },
}
