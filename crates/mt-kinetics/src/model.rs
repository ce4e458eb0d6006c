//! The `KineticModel` trait — the seam between motor chemistry and the
//! integration loop.

use mt_core::{MotorResult, MotorState, Parameters, SimRng};

use crate::StepHistogram;

/// What one timestep of chemistry did to the motor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickOutcome {
    /// Occupancy value the loop records at the *current* trajectory slot.
    ///
    /// The multi-site motor's chemical transition rewrites the current
    /// slot before hydrolysis runs; the two-state motor leaves it alone
    /// (`recorded ==` the input state).
    pub recorded: MotorState,

    /// Occupancy carried into the next slot.
    pub next: MotorState,

    /// Forward displacement produced this timestep (m).  Never negative.
    pub dx: f64,

    /// Whether a completed hydrolysis event emptied the binding site this
    /// timestep.
    pub adp_released: bool,
}

/// Pluggable motor chemistry.
///
/// Implementations define how the occupancy state evolves over one
/// timestep under an instantaneous load.  All stochastic decisions draw
/// from the `&mut SimRng` the loop threads through, so a model is
/// deterministic for a given seed.
///
/// The invariant every implementation upholds: within one timestep the
/// recorded occupancy changes by at most one unit in each slot
/// (`|next − recorded| <= 1`), and `dx >= 0`.
pub trait KineticModel {
    /// The physical constants this model runs under.
    fn params(&self) -> &Parameters;

    /// Largest valid occupancy state.
    fn terminal_state(&self) -> MotorState;

    /// Advance the chemistry by one timestep under load `force`.
    ///
    /// `adp_released` is the flag produced by the previous timestep;
    /// whether it participates is the model's choice.  Completed
    /// mechanical steps are counted into `histogram`.
    fn advance(
        &self,
        state:        MotorState,
        adp_released: bool,
        force:        f64,
        rng:          &mut SimRng,
        histogram:    &mut StepHistogram,
    ) -> MotorResult<TickOutcome>;
}
