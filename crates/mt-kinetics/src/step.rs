//! Mechanical step sizes and the completed-step histogram.

use std::collections::BTreeMap;

use mt_core::{MotorError, MotorResult, MotorState};

// ── StepTable ─────────────────────────────────────────────────────────────────

/// Step length (m) per bound occupancy state.
///
/// Entry `k − 1` is the displacement a completed hydrolysis event produces
/// from state `k`, for `k` in `1..=K`.  The unbound state has no mechanical
/// step, so it has no entry; the table's length *is* the model's declared
/// number of bound states.
///
/// Invariant (checked at construction): lengths are positive, finite, and
/// strictly decreasing as the state index increases toward the terminal
/// state.
#[derive(Clone, Debug, PartialEq)]
pub struct StepTable {
    lengths: Vec<f64>,
}

impl StepTable {
    /// Build a table from per-state lengths for states `1..=K`.
    pub fn new(lengths: Vec<f64>) -> MotorResult<Self> {
        if lengths.is_empty() {
            return Err(MotorError::Config(
                "step table needs at least one bound state".into(),
            ));
        }
        for (i, &len) in lengths.iter().enumerate() {
            if !len.is_finite() || len <= 0.0 {
                return Err(MotorError::Config(format!(
                    "step length for state {} must be positive and finite, got {len}",
                    i + 1
                )));
            }
        }
        for pair in lengths.windows(2) {
            if pair[1] >= pair[0] {
                return Err(MotorError::Config(format!(
                    "step lengths must strictly decrease toward the terminal state, \
                     got {} then {}",
                    pair[0], pair[1]
                )));
            }
        }
        Ok(Self { lengths })
    }

    /// The reference dynein compliance ladder: 32, 24, 16, 8 nm for states
    /// 1 through 4.
    pub fn dynein_reference() -> Self {
        StepTable {
            lengths: vec![32e-9, 24e-9, 16e-9, 8e-9],
        }
    }

    /// Largest valid occupancy state for this table.
    #[inline]
    pub fn terminal(&self) -> MotorState {
        MotorState(self.lengths.len() as u8)
    }

    /// Number of bound states covered.
    #[inline]
    pub fn site_count(&self) -> usize {
        self.lengths.len()
    }

    /// Step length for a bound state; `InvalidState` outside `1..=K`.
    pub fn step_for(&self, state: MotorState) -> MotorResult<f64> {
        if !state.is_bound() || state > self.terminal() {
            return Err(MotorError::InvalidState {
                state:    state.0,
                terminal: self.terminal().0,
            });
        }
        Ok(self.lengths[state.index() - 1])
    }
}

// ── StepHistogram ─────────────────────────────────────────────────────────────

/// Occurrence counts of completed mechanical steps, keyed by step length.
///
/// Keys are picometre-rounded so lengths that are equal physically compare
/// equal exactly.  Incremented once per completed (non-reversed) hydrolysis
/// event and per successful two-state step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepHistogram {
    counts: BTreeMap<u64, u64>,
}

impl StepHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(step_m: f64) -> u64 {
        (step_m * 1e12).round() as u64
    }

    /// Count one completed step of the given length (m).
    pub fn record(&mut self, step_m: f64) {
        *self.counts.entry(Self::key(step_m)).or_insert(0) += 1;
    }

    /// Occurrences of a specific step length (m).
    pub fn count(&self, step_m: f64) -> u64 {
        self.counts.get(&Self::key(step_m)).copied().unwrap_or(0)
    }

    /// Total completed steps across all lengths.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate `(step_length_m, count)` in ascending length order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.counts.iter().map(|(&pm, &n)| (pm as f64 * 1e-12, n))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
