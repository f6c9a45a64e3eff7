//! Shop stock tables.

use arrayvec::ArrayVec;

use game_core::config::GameConfig;
use game_core::env::{RngStream, ShopOracle};
use game_core::item::ItemDefinition;
use game_core::state::ShopOffer;

use crate::items::ItemCatalog;

/// Threshold below which the merchant stocks only the cheap shelf.
const BUDGET_GOLD: u32 = 10;

/// Static shop stock with per-visit price jitter.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShopTable;

impl ShopTable {
    pub fn new() -> Self {
        Self
    }

    /// Base-priced stock a broke player can still shop from.
    fn budget_shelf() -> Vec<(ItemDefinition, u32)> {
        vec![
            (ItemCatalog::potion(), 4),
            (ItemCatalog::flying_hammer(), 5),
            (ItemCatalog::barrier_scroll(), 5),
            (ItemCatalog::whetstone(), 6),
        ]
    }

    fn full_shelf() -> Vec<(ItemDefinition, u32)> {
        vec![
            (ItemCatalog::potion(), 4),
            (ItemCatalog::flying_hammer(), 5),
            (ItemCatalog::barrier_scroll(), 5),
            (ItemCatalog::whetstone(), 6),
            (ItemCatalog::giant_scroll(), 7),
            (ItemCatalog::strength_elixir(), 8),
            (ItemCatalog::greater_potion(), 9),
            (ItemCatalog::healing_scroll(), 10),
            (ItemCatalog::aegis_scroll(), 10),
            (ItemCatalog::immunity_charm(), 12),
            (ItemCatalog::revive_scroll(), 15),
        ]
    }

    /// Haggling noise: 80%..=120% of base, never free.
    fn jitter(stream: &mut RngStream<'_>, base: u32) -> u32 {
        (base * stream.range(80, 120) / 100).max(1)
    }
}

impl ShopOracle for ShopTable {
    fn offers(
        &self,
        stream: &mut RngStream<'_>,
        gold: u32,
    ) -> ArrayVec<ShopOffer, { GameConfig::SHOP_OFFER_COUNT }> {
        let shelf = if gold < BUDGET_GOLD {
            Self::budget_shelf()
        } else {
            Self::full_shelf()
        };

        // Fisher-Yates over shelf indices, then take the front.
        let mut order: Vec<usize> = (0..shelf.len()).collect();
        for i in (1..order.len()).rev() {
            order.swap(i, stream.pick_index(i + 1));
        }

        order
            .into_iter()
            .take(GameConfig::SHOP_OFFER_COUNT)
            .map(|i| {
                let (item, base) = shelf[i].clone();
                ShopOffer {
                    price: Self::jitter(stream, base),
                    item,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::env::PcgRng;

    #[test]
    fn always_stocks_a_full_set_of_offers() {
        let rng = PcgRng;
        for seed in 0..30 {
            let mut stream = RngStream::new(&rng, seed);
            let offers = ShopTable.offers(&mut stream, 50);
            assert_eq!(offers.len(), GameConfig::SHOP_OFFER_COUNT);
            assert!(offers.iter().all(|offer| offer.price >= 1));
        }
    }

    #[test]
    fn broke_players_see_affordable_stock() {
        let rng = PcgRng;
        for seed in 0..30 {
            let mut stream = RngStream::new(&rng, seed);
            let offers = ShopTable.offers(&mut stream, 3);
            // Budget shelf tops out at 6g base, 120% jitter keeps it ≤ 7.
            assert!(offers.iter().all(|offer| offer.price <= 7));
        }
    }
}
