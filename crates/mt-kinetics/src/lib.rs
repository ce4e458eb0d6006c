//! `mt-kinetics` — the stochastic chemistry of the `mt_walk` motor
//! simulator.
//!
//! # One timestep of chemistry
//!
//! ```text
//! load F ──▶ RateModel ──▶ occupancy transition (one uniform draw,
//!                          unbind → bind → remain, inclusive p <= P)
//!                  │
//!                  └─────▶ hydrolysis attempt (bound states only:
//!                          draw vs Pcat, then draw vs Psyn; a completed
//!                          event decrements the state, advances position
//!                          by the pre-decrement step length, and arms
//!                          the ADP-released flag)
//! ```
//!
//! Two motors implement the [`KineticModel`] seam with the same component
//! shapes and different parameter sets: [`KinesinModel`] (two states,
//! combined bind/hydrolyze decision, stall-force stepping cutoff) and
//! [`DyneinModel`] (occupancy ladder with per-state step sizes and an
//! emptied-site rate branch).
//!
//! | Module         | Contents                                         |
//! |----------------|--------------------------------------------------|
//! | [`rates`]      | `RateModel` — force-dependent probabilities      |
//! | [`step`]       | `StepTable`, `StepHistogram`                     |
//! | [`transition`] | `advance_occupancy` — the chemical Markov step   |
//! | [`hydrolysis`] | `attempt_hydrolysis`, `HydrolysisOutcome`        |
//! | [`model`]      | `KineticModel` trait, `TickOutcome`              |
//! | [`kinesin`]    | `KinesinModel` — two-state variant               |
//! | [`dynein`]     | `DyneinModel` — multi-site variant               |

pub mod dynein;
pub mod hydrolysis;
pub mod kinesin;
pub mod model;
pub mod rates;
pub mod step;
pub mod transition;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dynein::DyneinModel;
pub use hydrolysis::{HydrolysisOutcome, attempt_hydrolysis, catalysis_scale};
pub use kinesin::KinesinModel;
pub use model::{KineticModel, TickOutcome};
pub use rates::RateModel;
pub use step::{StepHistogram, StepTable};
pub use transition::advance_occupancy;
