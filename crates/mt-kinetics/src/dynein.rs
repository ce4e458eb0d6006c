//! The multi-site motor: occupancy ladder 0..=K with per-state step sizes
//! and an emptied-site kinetic branch.

use mt_core::{MotorError, MotorResult, MotorState, Parameters, SimRng};

use crate::{
    KineticModel, RateModel, StepHistogram, StepTable, TickOutcome, advance_occupancy,
    attempt_hydrolysis,
};

/// Multi-site dynein chemistry.
///
/// Per timestep: one chemical Markov transition over the occupancy ladder
/// (the result rewrites the current trajectory slot), then — if the head is
/// bound — one hydrolysis attempt producing the next slot's occupancy and
/// any displacement.
///
/// The state-space size is declared by the rate vectors and step table,
/// which must agree in length.
pub struct DyneinModel {
    params:         Parameters,
    k_on:           Vec<f64>,
    k_off:          Vec<f64>,
    steps:          StepTable,
    carry_adp_flag: bool,
}

impl DyneinModel {
    /// Build a validated multi-site model.
    ///
    /// `k_on`/`k_off` hold the per-site rate constants for states `1..=K`
    /// (entry `k − 1` belongs to state `k`); `steps` supplies the matching
    /// compliance ladder.
    pub fn new(
        params: Parameters,
        k_on:   Vec<f64>,
        k_off:  Vec<f64>,
        steps:  StepTable,
    ) -> MotorResult<Self> {
        params.validate()?;
        if k_on.len() != steps.site_count() || k_off.len() != steps.site_count() {
            return Err(MotorError::Config(format!(
                "rate tables and step table disagree on the state-space size: \
                 {} on-rates, {} off-rates, {} steps",
                k_on.len(),
                k_off.len(),
                steps.site_count()
            )));
        }
        for (name, table) in [("k_on", &k_on), ("k_off", &k_off)] {
            for (i, &rate) in table.iter().enumerate() {
                if !rate.is_finite() || rate < 0.0 {
                    return Err(MotorError::Config(format!(
                        "{name}[{i}] must be non-negative and finite, got {rate}"
                    )));
                }
            }
        }
        Ok(Self { params, k_on, k_off, steps, carry_adp_flag: false })
    }

    /// The reference parameterization: four sites at nanomolar ATP, with
    /// secondary-site on-rates tapering as the ladder fills and a slow
    /// first-site off-rate.
    pub fn reference() -> Self {
        let k_on2 = 4e5;
        let k_off2 = 250e-1;
        Self {
            params:         Parameters::dynein_reference(),
            k_on:           vec![4e5, k_on2, k_on2 / 4.0, k_on2 / 6.0],
            k_off:          vec![1e-1, k_off2, k_off2, k_off2],
            steps:          StepTable::dynein_reference(),
            carry_adp_flag: false,
        }
    }

    /// Whether the flag a completed hydrolysis produces is honored by the
    /// next chemical transition.
    ///
    /// Off by default, reproducing the reference integration, which
    /// re-enters the transition with the flag cleared every timestep — so
    /// the emptied-site branch never governs there even though it is fully
    /// specified.  Turning this on threads the produced flag through and
    /// materially changes the steady-state kinetics.
    pub fn carry_adp_flag(mut self, carry: bool) -> Self {
        self.carry_adp_flag = carry;
        self
    }

    /// The compliance ladder in use.
    #[inline]
    pub fn steps(&self) -> &StepTable {
        &self.steps
    }
}

impl KineticModel for DyneinModel {
    fn params(&self) -> &Parameters {
        &self.params
    }

    fn terminal_state(&self) -> MotorState {
        self.steps.terminal()
    }

    fn advance(
        &self,
        state:        MotorState,
        adp_released: bool,
        force:        f64,
        rng:          &mut SimRng,
        histogram:    &mut StepHistogram,
    ) -> MotorResult<TickOutcome> {
        let flag_in = if self.carry_adp_flag { adp_released } else { false };
        let rates = RateModel::new(&self.params);

        let after = advance_occupancy(
            state, flag_in, force, &self.k_on, &self.k_off, &rates, rng,
        )?;

        if !after.is_bound() {
            return Ok(TickOutcome {
                recorded:     after,
                next:         after,
                dx:           0.0,
                adp_released: false,
            });
        }

        let out = attempt_hydrolysis(after, force, &self.steps, &rates, rng, histogram)?;
        Ok(TickOutcome {
            recorded:     after,
            next:         out.state,
            dx:           out.dx,
            adp_released: out.adp_released,
        })
    }
}
