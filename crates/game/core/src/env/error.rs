/// Errors raised when the environment lacks a required oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("rng oracle not available")]
    RngNotAvailable,

    #[error("door oracle not available")]
    DoorsNotAvailable,

    #[error("item oracle not available")]
    ItemsNotAvailable,

    #[error("shop oracle not available")]
    ShopNotAvailable,

    #[error("event oracle not available")]
    EventsNotAvailable,
}
