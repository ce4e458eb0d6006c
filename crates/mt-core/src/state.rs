//! Chemical occupancy state of the motor head.

use std::fmt;

use crate::{MotorError, MotorResult};

/// Discrete chemical configuration of the ATP-hydrolysis site(s).
///
/// The inner integer counts occupied sites: `0` is the unbound (apo) motor,
/// and each model declares its own largest valid value — `1` for the
/// two-state kinesin model, `K` for the multi-site dynein ladder.  The
/// inner value is `pub` for direct indexing, but callers should prefer
/// [`MotorState::index`] for clarity.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotorState(pub u8);

impl MotorState {
    /// The apo motor: no ATP bound.
    pub const UNBOUND: MotorState = MotorState(0);

    /// Whether at least one site holds ATP — the precondition for a
    /// hydrolysis attempt.
    #[inline]
    pub fn is_bound(self) -> bool {
        self.0 > 0
    }

    /// Cast to `usize` for direct use as a table index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Check membership in a model's declared domain `0..=terminal`.
    #[inline]
    pub fn check_domain(self, terminal: MotorState) -> MotorResult<()> {
        if self.0 > terminal.0 {
            return Err(MotorError::InvalidState {
                state:    self.0,
                terminal: terminal.0,
            });
        }
        Ok(())
    }
}

impl fmt::Display for MotorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}
