use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::rng::RngStream;
use crate::state::DoorDescriptor;

/// Generates the door sets the player picks from each round.
///
/// Implementations roll all randomness (monster choice, trap damage, reward
/// contents) through the given stream so the set is fixed once generated.
pub trait DoorOracle: Send + Sync {
    /// Produces a full set of doors for the given round.
    fn door_set(
        &self,
        stream: &mut RngStream<'_>,
        round: u32,
    ) -> ArrayVec<DoorDescriptor, { GameConfig::DOORS_PER_SET }>;
}
