//! dynein — multi-site reference run of the mt_walk motor simulator.
//!
//! The reference dynein chemistry at nanomolar ATP barely binds on
//! demo-sized trajectories, so this run raises the concentration to 1 mM
//! (a standard motility-assay level) and reports the resulting step-size
//! distribution across the compliance ladder.

use std::time::Instant;

use anyhow::Result;

use mt_core::{MotorState, Parameters};
use mt_kinetics::{DyneinModel, StepTable};
use mt_sim::{SimBuilder, SimObserver, Trajectory};

// ── Constants ─────────────────────────────────────────────────────────────────

const N_STEPS: usize = 500_000;
const SEED:    u64   = 42;
const ATP_M:   f64   = 1e-3;

// ── Observer: remember where the first few steps happened ─────────────────────

#[derive(Default)]
struct FirstSteps {
    indices: Vec<usize>,
}

impl SimObserver for FirstSteps {
    fn on_mechanical_step(&mut self, index: usize, _length: f64) {
        if self.indices.len() < 5 {
            self.indices.push(index);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== dynein — mt_walk multi-site motor ===");
    println!("Timepoints: {N_STEPS}  |  Seed: {SEED}  |  ATP: {:.0} µM", ATP_M * 1e6);
    println!();

    // 1. Reference chemistry at assay-level ATP.
    let params = Parameters { atp: ATP_M, ..Parameters::dynein_reference() };
    let k_on2 = 4e5;
    let k_off2 = 250e-1;
    let model = DyneinModel::new(
        params,
        vec![4e5, k_on2, k_on2 / 4.0, k_on2 / 6.0],
        vec![1e-1, k_off2, k_off2, k_off2],
        StepTable::dynein_reference(),
    )?;

    // 2. Build and run.
    let mut sim = SimBuilder::new(model, N_STEPS, SEED).build()?;
    let mut obs = FirstSteps::default();
    let t0 = Instant::now();
    let traj = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    // 3. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  simulated time : {:.3} s", traj.final_time());
    println!("  final position : {:.1} nm", traj.final_position() * 1e9);
    println!("  mean velocity  : {:.1} nm/s", traj.mean_velocity() * 1e9);
    if !obs.indices.is_empty() {
        println!("  first steps at : {:?}", obs.indices);
    }
    println!();

    // 4. Step-size distribution across the compliance ladder.
    println!("{:<12} {:<10}", "Step (nm)", "Count");
    println!("{}", "-".repeat(22));
    for (length, count) in traj.steps.iter() {
        println!("{:<12.0} {:<10}", length * 1e9, count);
    }
    println!("{:<12} {:<10}", "total", traj.steps.total());

    // 5. Occupancy residence summary.
    let terminal = MotorState(4);
    print_residence(&traj, terminal);

    Ok(())
}

/// Fraction of the trajectory spent in each occupancy state.
fn print_residence(traj: &Trajectory, terminal: MotorState) {
    println!();
    println!("{:<8} {:<10}", "State", "Residence");
    println!("{}", "-".repeat(18));
    for s in 0..=terminal.0 {
        let hits = traj.state.iter().filter(|&&st| st == MotorState(s)).count();
        let share = hits as f64 / traj.len() as f64;
        println!("{:<8} {:<10.4}", format!("S{s}"), share);
    }
}
