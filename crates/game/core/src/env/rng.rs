//! RNG oracle for deterministic random number generation.
//!
//! Every random decision in the engine flows through an [`RngOracle`],
//! seeded from the session seed, the input nonce, and a per-roll counter.
//! Given the same seed and the same input sequence, a run replays exactly.

/// Stateless source of deterministic randomness.
///
/// Implementations must produce the same value for the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output permuted from 64-bit LCG state. Small, fast,
/// and statistically solid for game mechanics.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the LCG state by one step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation: xorshift high bits, then a random rotate
    /// driven by the top state bits.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Mixes the session seed, input nonce, and a context tag into a roll seed.
///
/// Constants are the SplitMix64/FxHash multipliers; the final avalanche
/// keeps nearby nonces from producing correlated seeds.
pub fn compute_seed(session_seed: u64, nonce: u64, context: u32) -> u64 {
    let mut hash = session_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x517cc1b727220a95);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Draws a sequence of independent rolls from a stateless oracle.
///
/// Each draw bumps an internal counter mixed into the seed, so one input
/// can make any number of rolls without reuse.
pub struct RngStream<'a> {
    rng: &'a dyn RngOracle,
    seed: u64,
    counter: u32,
}

impl<'a> RngStream<'a> {
    pub fn new(rng: &'a dyn RngOracle, seed: u64) -> Self {
        Self {
            rng,
            seed,
            counter: 0,
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let roll_seed = compute_seed(self.seed, self.counter as u64, self.counter);
        self.counter += 1;
        self.rng.next_u32(roll_seed)
    }

    /// Random value in `[min, max]` inclusive.
    pub fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min + 1;
        min + (self.next_u32() % span)
    }

    /// Roll a d100 (1-100 inclusive).
    pub fn roll_d100(&mut self) -> u32 {
        (self.next_u32() % 100) + 1
    }

    /// True with the given percent probability (clamped to 0..=100).
    pub fn chance(&mut self, percent: i32) -> bool {
        if percent <= 0 {
            return false;
        }
        if percent >= 100 {
            return true;
        }
        self.roll_d100() <= percent as u32
    }

    /// Uniformly chosen index below `len`. `len` must be nonzero.
    pub fn pick_index(&mut self, len: usize) -> usize {
        (self.next_u32() as usize) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_ne!(rng.next_u32(42), rng.next_u32(43));
    }

    #[test]
    fn streams_with_same_seed_replay() {
        let rng = PcgRng;
        let mut a = RngStream::new(&rng, 99);
        let mut b = RngStream::new(&rng, 99);
        for _ in 0..16 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn stream_draws_are_independent() {
        let rng = PcgRng;
        let mut stream = RngStream::new(&rng, 7);
        let first = stream.next_u32();
        let second = stream.next_u32();
        assert_ne!(first, second);
    }

    #[test]
    fn range_is_inclusive_and_bounded() {
        let rng = PcgRng;
        let mut stream = RngStream::new(&rng, 1234);
        for _ in 0..100 {
            let value = stream.range(2, 5);
            assert!((2..=5).contains(&value));
        }
        assert_eq!(stream.range(3, 3), 3);
    }

    #[test]
    fn chance_extremes() {
        let rng = PcgRng;
        let mut stream = RngStream::new(&rng, 0);
        assert!(!stream.chance(0));
        assert!(stream.chance(100));
        assert!(!stream.chance(-10));
    }
}
