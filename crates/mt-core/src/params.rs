//! Physical and chemical constants for a simulation run.
//!
//! # Design
//!
//! All constants live in one immutable [`Parameters`] record constructed
//! before a run and passed by reference into every component — never
//! mutated mid-run.  The variant-specific rate tables (per-site on/off
//! constants, step lengths) live in the model structs; `Parameters` holds
//! the physics both variants share.
//!
//! Units are SI throughout: seconds, metres, newtons, joules, molar.

use crate::{MotorError, MotorResult};

/// Boltzmann constant (J/K).
pub const BOLTZMANN: f64 = 1.380_648_52e-23;

/// Reference temperature of the assay (K).
pub const ROOM_TEMP_K: f64 = 300.0;

/// Immutable record of the physical constants governing a run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    /// Timestep Δt (s).
    pub dt: f64,

    /// Optical-trap stiffness (N/m).  The restoring load is `k_trap · x`.
    pub k_trap: f64,

    /// Stall force F₀ (N) — the load at which the two-state motor's
    /// stepping success probability reaches zero.
    pub f_stall: f64,

    /// Base catalysis rate constant (1/s).
    pub k_cat0: f64,

    /// Thermal energy kBT (J).
    pub kbt: f64,

    /// Load-sensitivity exponent for catalysis.
    pub alpha: f64,

    /// Load-sensitivity exponent for reverse synthesis.
    pub beta: f64,

    /// ATP concentration (M).  Zero is valid: binding simply never fires.
    pub atp: f64,

    /// Characteristic head displacement d₀ (m) in the force-assisted
    /// binding correction `exp(F·d₀/kBT)`.
    pub d0: f64,

    /// Base reverse-synthesis probability (dimensionless — not a rate).
    pub p_syn0: f64,

    /// Catalysis-rate multiplier for the singly-bound state.  States with
    /// more than one occupied site catalyze at the full `k_cat0`.
    pub slow_cat_scale: f64,

    /// Opt-in validation hook: when set, any computed probability > 1 is
    /// surfaced as [`MotorError::ProbabilityOverflow`] instead of being
    /// passed raw into the inclusive comparison.  Off by default.
    pub strict_probabilities: bool,
}

impl Parameters {
    /// Reference constants for the two-state kinesin run: 8-nm stepper in
    /// a 7 µN/m trap at 1 mM ATP, Δt = 0.2 ms.
    pub fn kinesin_reference() -> Self {
        Self {
            dt:                   2e-4,
            k_trap:               7e-6,
            f_stall:              0.7e-11,
            k_cat0:               55.0,
            kbt:                  BOLTZMANN * ROOM_TEMP_K,
            alpha:                0.3,
            beta:                 0.7,
            atp:                  1e-3,
            d0:                   6e-9,
            p_syn0:               0.23,
            slow_cat_scale:       1.0 / 100.0,
            strict_probabilities: false,
        }
    }

    /// Reference constants for the multi-site dynein run: nanomolar ATP,
    /// force-assisted secondary-site binding, reversible catalysis.
    pub fn dynein_reference() -> Self {
        Self {
            atp: 1e-9,
            ..Self::kinesin_reference()
        }
    }

    /// Instantaneous restoring force from the harmonic trap potential:
    /// `F = k_trap · x`.  Pure function of position; no history dependence.
    #[inline]
    pub fn load(&self, position: f64) -> f64 {
        self.k_trap * position
    }

    /// Reject nonsensical physics before any simulation step runs.
    ///
    /// Called by every model constructor and again by the sim builder, so
    /// a hand-rolled `Parameters` literal cannot reach the stepping loop
    /// unchecked.
    pub fn validate(&self) -> MotorResult<()> {
        fn finite(name: &str, v: f64) -> MotorResult<()> {
            if v.is_finite() {
                Ok(())
            } else {
                Err(MotorError::Config(format!("{name} must be finite, got {v}")))
            }
        }

        finite("dt", self.dt)?;
        finite("k_trap", self.k_trap)?;
        finite("f_stall", self.f_stall)?;
        finite("k_cat0", self.k_cat0)?;
        finite("kbt", self.kbt)?;
        finite("alpha", self.alpha)?;
        finite("beta", self.beta)?;
        finite("atp", self.atp)?;
        finite("d0", self.d0)?;
        finite("p_syn0", self.p_syn0)?;
        finite("slow_cat_scale", self.slow_cat_scale)?;

        if self.dt <= 0.0 {
            return Err(MotorError::Config(format!(
                "timestep dt must be positive, got {}",
                self.dt
            )));
        }
        if self.k_trap < 0.0 {
            return Err(MotorError::Config(format!(
                "trap stiffness k_trap must be non-negative, got {}",
                self.k_trap
            )));
        }
        if self.f_stall <= 0.0 {
            return Err(MotorError::Config(format!(
                "stall force f_stall must be positive, got {}",
                self.f_stall
            )));
        }
        if self.k_cat0 < 0.0 {
            return Err(MotorError::Config(format!(
                "catalysis rate k_cat0 must be non-negative, got {}",
                self.k_cat0
            )));
        }
        if self.kbt <= 0.0 {
            return Err(MotorError::Config(format!(
                "thermal energy kbt must be positive, got {}",
                self.kbt
            )));
        }
        if self.atp < 0.0 {
            return Err(MotorError::Config(format!(
                "ATP concentration must be non-negative, got {}",
                self.atp
            )));
        }
        if self.d0 < 0.0 {
            return Err(MotorError::Config(format!(
                "head displacement d0 must be non-negative, got {}",
                self.d0
            )));
        }
        if self.p_syn0 < 0.0 {
            return Err(MotorError::Config(format!(
                "base synthesis probability p_syn0 must be non-negative, got {}",
                self.p_syn0
            )));
        }
        if self.slow_cat_scale <= 0.0 {
            return Err(MotorError::Config(format!(
                "slow_cat_scale must be positive, got {}",
                self.slow_cat_scale
            )));
        }
        Ok(())
    }
}
