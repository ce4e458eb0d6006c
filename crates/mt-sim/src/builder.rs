//! Construction and validation for [`Sim`].

use mt_core::SimRng;
use mt_kinetics::KineticModel;

use crate::{Sim, SimError, SimResult};

/// Builder for [`Sim<M>`]: validates the configuration before any stepping
/// runs, so a mis-parameterized model never reaches the loop.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(KinesinModel::reference(), 20_000, 42).build()?;
/// let trajectory = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<M: KineticModel> {
    model:   M,
    n_steps: usize,
    seed:    u64,
}

impl<M: KineticModel> SimBuilder<M> {
    /// Create a builder for an `n_steps`-point trajectory seeded with
    /// `seed`.
    pub fn new(model: M, n_steps: usize, seed: u64) -> Self {
        Self { model, n_steps, seed }
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<M>> {
        self.model.params().validate()?;
        if self.n_steps < 2 {
            return Err(SimError::Config(format!(
                "a trajectory needs at least 2 timepoints, got {}",
                self.n_steps
            )));
        }
        Ok(Sim {
            rng:     SimRng::new(self.seed),
            model:   self.model,
            n_steps: self.n_steps,
            seed:    self.seed,
        })
    }
}
