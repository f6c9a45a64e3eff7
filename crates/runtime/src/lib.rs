//! Session runtime: owns live runs and produces transport-ready views.

mod display;
mod error;
mod session;

pub use display::{DisplayState, MonsterView, PlayerView};
pub use error::SessionError;
pub use session::{Session, SessionManager};

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber, filtered by `RUST_LOG`
/// (default `info`). Call once at process start; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
