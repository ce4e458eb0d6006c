//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! One [`SimRng`] is created per trajectory from an explicit `u64` seed and
//! threaded by `&mut` through every stochastic component.  The number and
//! order of draws per timestep is fixed by the branch taken, so an
//! identical (seed, configuration, step count) triple reproduces the
//! trajectory bit-for-bit.  Independent trajectories must each own an
//! independent `SimRng`; there is no shared or global source.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seedable uniform-draw generator for one simulation run.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// One uniform draw in `[0, 1)`.
    ///
    /// All stochastic decisions in the kinetic engine are inclusive
    /// threshold tests (`p <= P`) against this draw.  The raw draw is
    /// exposed — rather than a clamped `gen_bool` — because computed
    /// probabilities may legitimately exceed 1 and the comparison must see
    /// them unclamped.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}
