//! `mt-core` — foundational types for the `mt_walk` motor-protein
//! stepping simulator.
//!
//! This crate is a dependency of every other `mt-*` crate.  It
//! intentionally has no `mt-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                        |
//! |-------------|-------------------------------------------------|
//! | [`state`]   | `MotorState` — chemical occupancy tag           |
//! | [`params`]  | `Parameters` — validated physical constants     |
//! | [`rng`]     | `SimRng` — seedable per-run generator           |
//! | [`error`]   | `MotorError`, `MotorResult`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod params;
pub mod rng;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{MotorError, MotorResult};
pub use params::{BOLTZMANN, Parameters, ROOM_TEMP_K};
pub use rng::SimRng;
pub use state::MotorState;
