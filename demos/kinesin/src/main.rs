//! kinesin — two-state reference run of the mt_walk motor simulator.
//!
//! Walks the 8-nm stepper for 20,000 timesteps (4 s of simulated time at
//! Δt = 0.2 ms) against the optical trap and prints where it got to.

use std::time::Instant;

use anyhow::Result;

use mt_kinetics::{KineticModel, KinesinModel};
use mt_sim::{NoopObserver, SimBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const N_STEPS: usize = 20_000;
const SEED:    u64   = 42;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== kinesin — mt_walk two-state motor ===");
    println!("Timepoints: {N_STEPS}  |  Seed: {SEED}");
    println!();

    // 1. Reference model: 8-nm steps, 2e6 1/(M·s) binding, 1 mM ATP.
    let model = KinesinModel::reference();
    let params = *model.params();
    println!(
        "Trap: {:.1} µN/m  |  Stall force: {:.1} pN  |  Δt: {:.2} ms",
        params.k_trap * 1e6,
        params.f_stall * 1e12,
        params.dt * 1e3,
    );

    // 2. Build and run.
    let mut sim = SimBuilder::new(model, N_STEPS, SEED).build()?;
    let t0 = Instant::now();
    let traj = sim.run(&mut NoopObserver)?;
    let elapsed = t0.elapsed();

    // 3. Summary.
    let final_nm = traj.final_position() * 1e9;
    let stall_nm = params.f_stall / params.k_trap * 1e9;
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  simulated time   : {:.3} s", traj.final_time());
    println!("  final position   : {final_nm:.1} nm");
    println!("  stall position   : {stall_nm:.1} nm (F = F0)");
    println!("  lattice steps    : {}", traj.steps.total());
    println!("  mean velocity    : {:.1} nm/s", traj.mean_velocity() * 1e9);
    println!(
        "  final trap load  : {:.2} pN",
        params.load(traj.final_position()) * 1e12
    );

    Ok(())
}
