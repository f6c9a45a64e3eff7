use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::rng::RngStream;
use crate::state::ShopOffer;

/// Stocks the shop scene.
pub trait ShopOracle: Send + Sync {
    /// Produces the offers shown on entry. `gold` is the player's purse,
    /// letting implementations stock a cheaper shelf for broke players.
    fn offers(
        &self,
        stream: &mut RngStream<'_>,
        gold: u32,
    ) -> ArrayVec<ShopOffer, { GameConfig::SHOP_OFFER_COUNT }>;
}
