//! The catalysis / reverse-synthesis decision.

use mt_core::{MotorResult, MotorState, SimRng};

use crate::{RateModel, StepHistogram, StepTable};

/// Result of one hydrolysis attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HydrolysisOutcome {
    /// Occupancy after the attempt (decremented iff the event completed).
    pub state: MotorState,
    /// Forward displacement produced (m); zero unless the event completed.
    pub dx: f64,
    /// True only after a completed, non-reversed event — the condition
    /// that arms the emptied-site kinetic branch.
    pub adp_released: bool,
}

impl HydrolysisOutcome {
    fn unchanged(state: MotorState) -> Self {
        Self { state, dx: 0.0, adp_released: false }
    }
}

/// Catalysis-rate asymmetry: the singly-bound state hydrolyzes at a reduced
/// base rate; every state above it runs at the full `k_cat0`.
#[inline]
pub fn catalysis_scale(state: MotorState, slow_cat_scale: f64) -> f64 {
    if state.0 > 1 { 1.0 } else { slow_cat_scale }
}

/// Attempt hydrolysis from a bound state under load `force`.
///
/// Draws `p₁`: if `p₁ > Pcat` nothing happens.  Otherwise catalysis fires
/// and a second draw `p₂` decides its fate against `Psyn`: reversed
/// (`p₂ <= Psyn`, no displacement) or completed — state decrements,
/// position advances by the *pre*-decrement state's step length, the ADP
/// flag arms, and the histogram counts the step.
///
/// `InvalidState` if `state` is unbound or beyond the step table's domain.
pub fn attempt_hydrolysis(
    state:     MotorState,
    force:     f64,
    steps:     &StepTable,
    rates:     &RateModel<'_>,
    rng:       &mut SimRng,
    histogram: &mut StepHistogram,
) -> MotorResult<HydrolysisOutcome> {
    let step = steps.step_for(state)?;
    let scale = catalysis_scale(state, rates.params().slow_cat_scale);
    let p_cat = rates.p_catalysis(scale, force, step)?;

    let p1 = rng.uniform();
    if p1 > p_cat {
        return Ok(HydrolysisOutcome::unchanged(state));
    }

    let p_syn = rates.p_synthesis(force, step)?;
    let p2 = rng.uniform();
    if p2 <= p_syn {
        // Reversed: the chemical event is undone without displacement.
        return Ok(HydrolysisOutcome::unchanged(state));
    }

    histogram.record(step);
    Ok(HydrolysisOutcome {
        state:        MotorState(state.0 - 1),
        dx:           step,
        adp_released: true,
    })
}
