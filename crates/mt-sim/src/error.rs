use mt_core::MotorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    /// The kinetic engine failed mid-run.  The loop aborts here — carrying
    /// the failing timestep index and the occupancy observed going in.
    #[error("timestep {index} aborted in state S{state}: {source}")]
    Step {
        index:  usize,
        state:  u8,
        source: MotorError,
    },

    #[error(transparent)]
    Motor(#[from] MotorError),
}

pub type SimResult<T> = Result<T, SimError>;
