//! Force-dependent per-timestep probabilities.
//!
//! Every probability is `rate_constant × force_correction × Δt` (reverse
//! synthesis excepted — it is a bare probability with no Δt factor).  The
//! force corrections are Arrhenius-style exponentials in the instantaneous
//! load:
//!
//! - binding at secondary sites is force-*assisted*: `exp(F·d₀/kBT)`
//! - catalysis is force-*hindered*: `exp(−α·F·step/kBT)`
//! - reverse synthesis is force-*assisted*: `exp(β·F·step/kBT)`
//!
//! No clamping is applied anywhere: for large enough F or Δt a computed
//! value can exceed 1, and the downstream inclusive comparisons consume the
//! raw value.  [`Parameters::strict_probabilities`] turns that situation
//! into a hard [`MotorError::ProbabilityOverflow`] for testing.

use mt_core::{MotorError, MotorResult, Parameters};

/// Pure probability calculator over one [`Parameters`] record.
///
/// Holds no state beyond the borrowed constants; cheap to construct per
/// timestep.
pub struct RateModel<'a> {
    params: &'a Parameters,
}

impl<'a> RateModel<'a> {
    pub fn new(params: &'a Parameters) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &Parameters {
        self.params
    }

    /// Pass `p` through, or reject it in strict-validation mode.
    fn admit(&self, name: &'static str, p: f64) -> MotorResult<f64> {
        if self.params.strict_probabilities && p > 1.0 {
            return Err(MotorError::ProbabilityOverflow { name, value: p });
        }
        Ok(p)
    }

    /// First-site ATP binding: `Pon₁ = k_on · [ATP] · Δt`.
    ///
    /// Force-independent — the only binding probability that is.  Also the
    /// rate all binding folds back onto in the emptied-site branch.
    pub fn p_bind_first(&self, k_on: f64) -> MotorResult<f64> {
        self.admit("Pon1", k_on * self.params.atp * self.params.dt)
    }

    /// Secondary-site ATP binding, force-assisted:
    /// `Pon = k_on · exp(F·d₀/kBT) · [ATP] · Δt`.
    pub fn p_bind_assisted(&self, k_on: f64, force: f64) -> MotorResult<f64> {
        let correction = (force * self.params.d0 / self.params.kbt).exp();
        self.admit("Pon", k_on * correction * self.params.atp * self.params.dt)
    }

    /// Unbinding: `Poff = k_off · Δt`.  Force-independent.
    pub fn p_unbind(&self, k_off: f64) -> MotorResult<f64> {
        self.admit("Poff", k_off * self.params.dt)
    }

    /// Catalysis: `Pcat = scale · k_cat0 · exp(−α·F·step/kBT) · Δt`.
    ///
    /// `scale` is the state-dependent asymmetry multiplier — 1 for
    /// multiply-bound states, [`Parameters::slow_cat_scale`] for the
    /// singly-bound state (the hydrolysis engine selects it).
    pub fn p_catalysis(&self, scale: f64, force: f64, step: f64) -> MotorResult<f64> {
        let correction = (-self.params.alpha * force * step / self.params.kbt).exp();
        self.admit("Pcat", scale * self.params.k_cat0 * correction * self.params.dt)
    }

    /// Reverse synthesis: `Psyn = Psyn₀ · exp(β·F·step/kBT)`.
    ///
    /// A bare probability conditioned on catalysis having fired — no Δt
    /// factor.
    pub fn p_synthesis(&self, force: f64, step: f64) -> MotorResult<f64> {
        let correction = (self.params.beta * force * step / self.params.kbt).exp();
        self.admit("Psyn", self.params.p_syn0 * correction)
    }
}
