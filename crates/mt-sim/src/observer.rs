//! Simulation observer trait for progress reporting and data collection.

use mt_core::MotorState;

use crate::Trajectory;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// integration loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — step printer
///
/// ```rust,ignore
/// struct StepPrinter;
///
/// impl SimObserver for StepPrinter {
///     fn on_mechanical_step(&mut self, index: usize, length: f64) {
///         println!("step of {:.0} nm at timestep {index}", length * 1e9);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after each timestep with the values just recorded for the
    /// *next* trajectory slot.
    fn on_step_end(&mut self, _index: usize, _time: f64, _position: f64, _state: MotorState) {}

    /// Called whenever a timestep produced forward displacement, with the
    /// step length (m).
    fn on_mechanical_step(&mut self, _index: usize, _length: f64) {}

    /// Called once after the final timestep completes, with the finished
    /// record.
    fn on_run_end(&mut self, _trajectory: &Trajectory) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
