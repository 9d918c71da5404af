//! Sources of edge weights for maze construction.

use rand::{rngs::StdRng, Rng as _, SeedableRng as _};

/// Exclusive upper bound of randomly drawn edge weights.
pub const WEIGHT_LIMIT: u32 = 50;

/// Supplies one weight per candidate edge, in edge-list order.
///
/// Any `FnMut() -> u32` closure is a weight source, which lets tests force exact weights.
pub trait WeightSource {
    /// Produces the weight of the next edge.
    fn next_weight(&mut self) -> u32;
}

impl<F> WeightSource for F
where
    F: FnMut() -> u32,
{
    fn next_weight(&mut self) -> u32 {
        self()
    }
}

/// Uniform weights in `[0, WEIGHT_LIMIT)` drawn from a seeded generator.
///
/// Two sources built from the same seed yield the same weights, and therefore the same maze.
#[derive(Debug, Clone)]
pub struct SeededWeights {
    /// Seed the generator was created from.
    seed: u64,
    /// Underlying generator.
    rng: StdRng,
}

impl SeededWeights {
    /// Creates a reproducible source from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed this source was created from.
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl WeightSource for SeededWeights {
    fn next_weight(&mut self) -> u32 {
        self.rng.random_range(0..WEIGHT_LIMIT)
    }
}
