//! The two-state motor: unbound ⇄ ATP-bound, single hydrolysis step.

use mt_core::{MotorError, MotorResult, MotorState, Parameters, SimRng};

use crate::{KineticModel, RateModel, StepHistogram, TickOutcome};

/// Two-state kinesin chemistry.
///
/// Binding and hydrolysis collapse into one combined per-timestep decision
/// because the state space has only two occupancy levels:
///
/// - from state 0, bind with the fixed force-independent
///   `Pon = k_on · [ATP] · Δt`;
/// - from state 1, catalysis fires with the force-hindered `Pcat`; a fired
///   event attempts a lattice step that succeeds with `ε = 1 − (F/F₀)²`
///   (second independent draw) and returns the motor to state 0 regardless
///   of step success.
///
/// `ε` is deliberately unclamped: at loads beyond the stall force it goes
/// negative and the inclusive `p <= ε` test deterministically forbids
/// stepping — a defined outcome, not an error.
pub struct KinesinModel {
    params: Parameters,
    k_on:   f64,
    step:   f64,
}

impl KinesinModel {
    /// Build a validated two-state model.
    ///
    /// `k_on` is the ATP binding rate constant (1/(M·s)); `step` the
    /// lattice step length (m).
    pub fn new(params: Parameters, k_on: f64, step: f64) -> MotorResult<Self> {
        params.validate()?;
        if !k_on.is_finite() || k_on < 0.0 {
            return Err(MotorError::Config(format!(
                "binding rate k_on must be non-negative and finite, got {k_on}"
            )));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(MotorError::Config(format!(
                "step length must be positive and finite, got {step}"
            )));
        }
        Ok(Self { params, k_on, step })
    }

    /// The reference parameterization: 8-nm steps, `k_on` = 2×10⁶ 1/(M·s),
    /// 1 mM ATP.
    pub fn reference() -> Self {
        Self {
            params: Parameters::kinesin_reference(),
            k_on:   2e6,
            step:   8e-9,
        }
    }

    /// The lattice step length (m).
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl KineticModel for KinesinModel {
    fn params(&self) -> &Parameters {
        &self.params
    }

    fn terminal_state(&self) -> MotorState {
        MotorState(1)
    }

    fn advance(
        &self,
        state:         MotorState,
        _adp_released: bool,
        force:         f64,
        rng:           &mut SimRng,
        histogram:     &mut StepHistogram,
    ) -> MotorResult<TickOutcome> {
        state.check_domain(self.terminal_state())?;
        let rates = RateModel::new(&self.params);
        let p = rng.uniform();

        if state == MotorState::UNBOUND {
            let p_on = rates.p_bind_first(self.k_on)?;
            let next = if p <= p_on { MotorState(1) } else { MotorState::UNBOUND };
            return Ok(TickOutcome { recorded: state, next, dx: 0.0, adp_released: false });
        }

        let p_cat = rates.p_catalysis(1.0, force, self.step)?;
        if p > p_cat {
            // No catalysis: the motor keeps its ATP and stays put.
            return Ok(TickOutcome { recorded: state, next: state, dx: 0.0, adp_released: false });
        }

        let epsilon = 1.0 - (force / self.params.f_stall).powi(2);
        let dx = if rng.uniform() <= epsilon {
            histogram.record(self.step);
            self.step
        } else {
            0.0
        };

        // Hydrolysis consumed the ATP whether or not the step succeeded.
        Ok(TickOutcome {
            recorded:     state,
            next:         MotorState::UNBOUND,
            dx,
            adp_released: false,
        })
    }
}
