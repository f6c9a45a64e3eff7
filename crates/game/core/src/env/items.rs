use crate::env::rng::RngStream;
use crate::item::ItemDefinition;

/// Provides item templates: the starting loadout, reward-door pulls, and
/// monster drops.
pub trait ItemOracle: Send + Sync {
    /// Items a fresh player begins the run with.
    fn starter_kit(&self) -> Vec<ItemDefinition>;

    /// A random item, for reward doors and event payouts.
    fn random_item(&self, stream: &mut RngStream<'_>) -> ItemDefinition;

    /// Loot dropped by a defeated monster of the given tier, if any.
    fn monster_loot(&self, stream: &mut RngStream<'_>, tier: u8) -> Option<ItemDefinition>;
}
