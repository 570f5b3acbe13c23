//! The simulation's single shared random source.
//!
//! Every random choice in a run (which neighbour a walker moves to) draws from
//! one `SimRng` owned by the engine.  Agents are stepped in a fixed order, so
//! a seeded `SimRng` makes the whole run reproducible; an unseeded one is
//! drawn from OS entropy.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Used only from the single-threaded tick loop.
#[derive(Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    /// Deterministic RNG from `seed`.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Non-reproducible RNG seeded from OS entropy.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Seeded when `seed` is `Some`, entropy-seeded otherwise.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None    => Self::from_entropy(),
        }
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose an element uniformly at random from `slice`.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
