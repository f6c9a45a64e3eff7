//! Static content for the door-crawl: monster rosters, item tables, shop
//! stock, and the narrative event deck, each implementing the matching
//! `game-core` oracle trait.

pub mod doors;
pub mod events;
pub mod items;
pub mod monsters;
pub mod shop;

pub use doors::DoorGenerator;
pub use events::EventDeck;
pub use items::ItemCatalog;
pub use shop::ShopTable;

use game_core::env::{GameEnv, PcgRng};

/// Owns one instance of every oracle so callers can borrow a fully wired
/// [`GameEnv`] without assembling the pieces themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContentBundle {
    rng: PcgRng,
    doors: DoorGenerator,
    items: ItemCatalog,
    shop: ShopTable,
    events: EventDeck,
}

impl ContentBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn env(&self) -> GameEnv<'_> {
        GameEnv::with_all(&self.rng, &self.doors, &self.items, &self.shop, &self.events)
    }

    pub fn items(&self) -> &ItemCatalog {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_wires_every_oracle() {
        let bundle = ContentBundle::new();
        let env = bundle.env();
        assert!(env.rng().is_ok());
        assert!(env.doors().is_ok());
        assert!(env.items().is_ok());
        assert!(env.shop().is_ok());
        assert!(env.events().is_ok());
    }
}
