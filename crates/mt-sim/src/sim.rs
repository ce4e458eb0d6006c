//! The `Sim` struct and its integration loop.

use mt_core::SimRng;
use mt_kinetics::KineticModel;

use crate::{NoopObserver, SimBuilder, SimError, SimObserver, SimResult, Trajectory};

/// The simulation runner: one motor, one trap, one seeded generator.
///
/// `Sim<M>` drives the load → rates → chemistry → position feedback cycle
/// for a fixed number of timesteps:
///
/// 1. **Load**: `F = k_trap · x[i]` from the *current* position.
/// 2. **Time**: `t[i+1] = t[i] + Δt`.
/// 3. **Chemistry**: the model advances one timestep under `F`; its
///    transition result rewrites slot `i`, its hydrolysis result fills
///    slot `i + 1`, and any displacement moves `x[i+1]` forward.
/// 4. The produced ADP flag is threaded into the next iteration (whether
///    it participates is the model's choice).
///
/// Exactly `n_steps − 1` iterations, producing three length-`n_steps`
/// series.  Create via [`SimBuilder`].
pub struct Sim<M: KineticModel> {
    /// The motor chemistry.
    pub model: M,

    /// Trajectory length (timepoints).
    pub n_steps: usize,

    /// The seed this run's generator was created from.
    pub seed: u64,

    /// Per-run generator.  Draw count and order per timestep are fixed by
    /// the branch taken, so identical (seed, model, n_steps) reproduce the
    /// trajectory bit-for-bit.
    pub(crate) rng: SimRng,
}

impl<M: KineticModel> Sim<M> {
    /// Run the full trajectory.
    ///
    /// Calls observer hooks after every timestep, on every mechanical
    /// step, and once at run end.  Use [`NoopObserver`] if you don't need
    /// callbacks.
    ///
    /// The generator is not re-seeded between calls: a second `run` on the
    /// same `Sim` continues the draw stream and produces an independent
    /// trajectory.  Build a fresh `Sim` for a reproducible replay.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Trajectory> {
        let params = *self.model.params();
        let mut traj = Trajectory::zeroed(self.n_steps);
        let mut adp_released = false;

        for i in 0..self.n_steps - 1 {
            let force = params.load(traj.position[i]);
            traj.time[i + 1] = traj.time[i] + params.dt;

            let state_in = traj.state[i];
            let out = self
                .model
                .advance(state_in, adp_released, force, &mut self.rng, &mut traj.steps)
                .map_err(|source| SimError::Step {
                    index: i,
                    state: state_in.0,
                    source,
                })?;

            traj.state[i] = out.recorded;
            traj.state[i + 1] = out.next;
            traj.position[i + 1] = traj.position[i] + out.dx;
            adp_released = out.adp_released;

            if out.dx > 0.0 {
                observer.on_mechanical_step(i, out.dx);
            }
            observer.on_step_end(i, traj.time[i + 1], traj.position[i + 1], out.next);
        }

        observer.on_run_end(&traj);
        Ok(traj)
    }
}

/// Run a complete trajectory with a fresh seeded generator — the one-call
/// entry point.
///
/// Deterministic: identical model configuration, step count, and seed
/// produce byte-identical trajectories across repeated invocations.
pub fn run_simulation<M: KineticModel>(
    model:   M,
    n_steps: usize,
    seed:    u64,
) -> SimResult<Trajectory> {
    SimBuilder::new(model, n_steps, seed)
        .build()?
        .run(&mut NoopObserver)
}
