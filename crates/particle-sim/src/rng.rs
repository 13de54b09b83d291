//! Random draws for particle variance

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random number source for emitters
///
/// Every variance term in the emitter is `base + variance * r` with `r`
/// drawn uniformly from `[-1, 1]`.
#[derive(Debug, Clone)]
pub struct ParticleRng {
    inner: StdRng,
}

impl ParticleRng {
    /// Create a deterministic generator from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }

    /// Generate a random f32 in range [-1, 1]
    #[inline]
    pub fn minus_one_to_one(&mut self) -> f32 {
        self.inner.random_range(-1.0..=1.0)
    }

    /// Apply a symmetric variance to a base value
    ///
    /// Always consumes one draw, even for a zero variance, so the draw
    /// sequence does not depend on the parameter values.
    #[inline]
    pub fn vary(&mut self, base: f32, variance: f32) -> f32 {
        base + variance * self.minus_one_to_one()
    }
}

impl Default for ParticleRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
