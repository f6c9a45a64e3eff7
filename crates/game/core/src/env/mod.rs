//! Traits describing the content the engine draws on.
//!
//! Oracles expose door generation, item tables, shop stock, event decks,
//! and randomness. The [`GameEnv`] aggregate bundles them so the engine can
//! access everything it needs without hard coupling to concrete content.

mod doors;
mod error;
mod events;
mod items;
mod rng;
mod shop;

pub use doors::DoorOracle;
pub use error::OracleError;
pub use events::EventOracle;
pub use items::ItemOracle;
pub use rng::{PcgRng, RngOracle, RngStream, compute_seed};
pub use shop::ShopOracle;

/// Aggregates the oracles required by the engine.
///
/// Fields are optional so tests can wire only what a path under test needs;
/// touching a missing oracle surfaces as an [`OracleError`].
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    rng: Option<&'a dyn RngOracle>,
    doors: Option<&'a dyn DoorOracle>,
    items: Option<&'a dyn ItemOracle>,
    shop: Option<&'a dyn ShopOracle>,
    events: Option<&'a dyn EventOracle>,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        rng: Option<&'a dyn RngOracle>,
        doors: Option<&'a dyn DoorOracle>,
        items: Option<&'a dyn ItemOracle>,
        shop: Option<&'a dyn ShopOracle>,
        events: Option<&'a dyn EventOracle>,
    ) -> Self {
        Self {
            rng,
            doors,
            items,
            shop,
            events,
        }
    }

    pub fn with_all(
        rng: &'a dyn RngOracle,
        doors: &'a dyn DoorOracle,
        items: &'a dyn ItemOracle,
        shop: &'a dyn ShopOracle,
        events: &'a dyn EventOracle,
    ) -> Self {
        Self::new(
            Some(rng),
            Some(doors),
            Some(items),
            Some(shop),
            Some(events),
        )
    }

    pub fn empty() -> Self {
        Self::new(None, None, None, None, None)
    }

    /// Returns the RngOracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a dyn RngOracle, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Returns the DoorOracle, or an error if not available.
    pub fn doors(&self) -> Result<&'a dyn DoorOracle, OracleError> {
        self.doors.ok_or(OracleError::DoorsNotAvailable)
    }

    /// Returns the ItemOracle, or an error if not available.
    pub fn items(&self) -> Result<&'a dyn ItemOracle, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the ShopOracle, or an error if not available.
    pub fn shop(&self) -> Result<&'a dyn ShopOracle, OracleError> {
        self.shop.ok_or(OracleError::ShopNotAvailable)
    }

    /// Returns the EventOracle, or an error if not available.
    pub fn events(&self) -> Result<&'a dyn EventOracle, OracleError> {
        self.events.ok_or(OracleError::EventsNotAvailable)
    }
}
