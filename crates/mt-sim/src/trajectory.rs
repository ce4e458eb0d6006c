//! The recorded output of one simulation run.

use mt_core::MotorState;
use mt_kinetics::StepHistogram;

/// Three parallel, same-length series — time (s), position (m), occupancy —
/// indexed by timestep, plus the completed-step histogram.
///
/// Buffers are pre-sized to the trajectory length and filled left to right;
/// no entry is revisited.  The caller owns the record outright once the run
/// completes.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    pub time:     Vec<f64>,
    pub position: Vec<f64>,
    pub state:    Vec<MotorState>,
    pub steps:    StepHistogram,
}

impl Trajectory {
    /// Pre-sized, zero-filled buffers for an `n`-point run.
    pub(crate) fn zeroed(n: usize) -> Self {
        Self {
            time:     vec![0.0; n],
            position: vec![0.0; n],
            state:    vec![MotorState::UNBOUND; n],
            steps:    StepHistogram::new(),
        }
    }

    /// Number of recorded timepoints.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Final motor position (m).
    pub fn final_position(&self) -> f64 {
        self.position.last().copied().unwrap_or(0.0)
    }

    /// Total simulated time (s).
    pub fn final_time(&self) -> f64 {
        self.time.last().copied().unwrap_or(0.0)
    }

    /// Net velocity over the whole run (m/s); zero for an instantaneous
    /// record.
    pub fn mean_velocity(&self) -> f64 {
        let t = self.final_time();
        if t > 0.0 { self.final_position() / t } else { 0.0 }
    }
}
