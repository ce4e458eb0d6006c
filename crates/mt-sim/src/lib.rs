//! `mt-sim` — integration loop for the `mt_walk` motor simulator.
//!
//! # The feedback cycle
//!
//! ```text
//! for i in 0..n_steps - 1:
//!   ① Load      — F = k_trap · x[i] from the current position.
//!   ② Time      — t[i+1] = t[i] + Δt.
//!   ③ Chemistry — the KineticModel advances one timestep under F:
//!                   the transition result rewrites s[i],
//!                   the hydrolysis result fills s[i+1],
//!                   displacement advances x[i+1].
//!   ④ Feedback  — x[i+1] sets the load for the next iteration; the
//!                   produced ADP flag is threaded forward.
//! ```
//!
//! Single-threaded and fully sequential: each timestep depends on the
//! previous one.  Reproducibility comes from the explicit per-run
//! generator — see [`run_simulation`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mt_kinetics::KinesinModel;
//! use mt_sim::run_simulation;
//!
//! let trajectory = run_simulation(KinesinModel::reference(), 20_000, 42)?;
//! println!("walked {:.1} nm", trajectory.final_position() * 1e9);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod trajectory;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, run_simulation};
pub use trajectory::Trajectory;
