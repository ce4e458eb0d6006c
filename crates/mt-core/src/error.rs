//! Base error type.
//!
//! Sub-crates may define their own error enums and convert `MotorError`
//! into them via `From` impls, or wrap it as one variant.  Both patterns
//! are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `mt-core` and a common base for sub-crates.
#[derive(Debug, Error, PartialEq)]
pub enum MotorError {
    /// A chemical occupancy state outside the model's declared domain was
    /// observed or requested.  Fatal: this is a logic/configuration error,
    /// never a recoverable runtime condition.
    #[error("invalid motor state {state}: this model declares states 0..={terminal}")]
    InvalidState { state: u8, terminal: u8 },

    #[error("configuration error: {0}")]
    Config(String),

    /// A computed per-timestep probability exceeded 1.  Only raised in
    /// strict-validation mode; default behavior passes the raw value
    /// through to the comparison unchanged.
    #[error("probability {name} = {value} exceeds 1 (dt too coarse for these rates)")]
    ProbabilityOverflow { name: &'static str, value: f64 },
}

/// Shorthand result type for all `mt-*` crates.
pub type MotorResult<T> = Result<T, MotorError>;
