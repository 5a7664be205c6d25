use rand::Rng;
use std::sync::Mutex;

/// Seeds are drawn from `[0, SEED_SPACE)` — the ten-digit decimal range.
pub const SEED_SPACE: u64 = 10_000_000_000;

/// A source of numeric seeds for short-code generation.
///
/// Kept behind a trait so tests can supply deterministic seeds and verify
/// the encoding independent of randomness.
pub trait SeedSource: Send + Sync + 'static {
    /// Returns the next seed, in `[0, SEED_SPACE)`.
    fn next_seed(&self) -> u64;
}

/// Production seed source drawing uniformly from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSeeds;

impl SeedSource for ThreadRngSeeds {
    fn next_seed(&self) -> u64 {
        rand::rng().random_range(0..SEED_SPACE)
    }
}

/// Deterministic seed source replaying a scripted sequence.
///
/// Cycles back to the start when the sequence is exhausted.
#[derive(Debug)]
pub struct FixedSeeds {
    seeds: Vec<u64>,
    next: Mutex<usize>,
}

impl FixedSeeds {
    pub fn new(seeds: impl Into<Vec<u64>>) -> Self {
        let seeds = seeds.into();
        assert!(!seeds.is_empty(), "FixedSeeds needs at least one seed");
        Self {
            seeds,
            next: Mutex::new(0),
        }
    }
}

impl SeedSource for FixedSeeds {
    fn next_seed(&self) -> u64 {
        let mut next = self.next.lock().expect("seed cursor lock poisoned");
        let seed = self.seeds[*next % self.seeds.len()];
        *next += 1;
        seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_rng_seeds_stay_in_range() {
        let source = ThreadRngSeeds;
        for _ in 0..1_000 {
            assert!(source.next_seed() < SEED_SPACE);
        }
    }

    #[test]
    fn fixed_seeds_replay_in_order() {
        let source = FixedSeeds::new([7, 42, 0]);
        assert_eq!(source.next_seed(), 7);
        assert_eq!(source.next_seed(), 42);
        assert_eq!(source.next_seed(), 0);
        // Wraps around once exhausted.
        assert_eq!(source.next_seed(), 7);
    }

    #[test]
    fn seed_sources_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ThreadRngSeeds>();
        assert_send_sync::<FixedSeeds>();
    }
}
