//! Deterministic RNG wrappers.
//!
//! # Determinism strategy
//!
//! The simulator holds one master [`SimRng`] seeded from the run
//! configuration.  Each stochastic consumer (one [`BooleanSource`] per
//! flight-generation stream) gets its own independent `SmallRng` derived
//! via [`SimRng::child`]:
//!
//!   child_seed = next_u64() XOR (offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive offsets uniformly across the seed space.  This
//! means:
//!
//! - The landing and take-off streams never share RNG state, so the number
//!   of draws on one stream cannot perturb the other.
//! - The same seed always produces the identical arrival sequence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{SaError, SaResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seeded master RNG for a simulation run.
///
/// Used only in single-threaded contexts.  Derive one child per stochastic
/// stream with [`child`][Self::child]; do not share a `SimRng` between
/// consumers.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — used to seed
    /// each `BooleanSource` deterministically from the root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }
}

// ── BooleanSource ─────────────────────────────────────────────────────────────

/// An i.i.d. Bernoulli(p) sampler: each call to [`sample`][Self::sample] is
/// an independent draw with success probability `probability`, with no
/// memory of prior draws.
///
/// Constructed from a probability and a [`SimRng`]; a probability outside
/// `[0, 1]` (NaN included) is rejected at construction time, never at
/// sample time.
pub struct BooleanSource {
    probability: f64,
    rng:         SimRng,
}

impl BooleanSource {
    pub fn new(probability: f64, rng: SimRng) -> SaResult<Self> {
        // `contains` is false for NaN, so NaN is rejected here too.
        if !(0.0..=1.0).contains(&probability) {
            return Err(SaError::InvalidProbability { value: probability });
        }
        Ok(Self { probability, rng })
    }

    /// `true` with probability `probability`.
    ///
    /// The uniform draw is over `[0, 1)`, so `p = 0` never fires and
    /// `p = 1` always fires — exactly, not just almost surely.
    #[inline]
    pub fn sample(&mut self) -> bool {
        self.rng.random::<f64>() < self.probability
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}
