use crate::env::rng::RngStream;
use crate::state::EventCard;

/// Draws narrative event cards for event doors.
///
/// Choice outcomes must be fully rolled at draw time; resolving a choice
/// later applies the stored outcome without further randomness.
pub trait EventOracle: Send + Sync {
    fn draw(&self, stream: &mut RngStream<'_>, round: u32) -> EventCard;
}
