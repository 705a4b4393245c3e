#![allow(dead_code)]

use std::fs;
use std::path::Path;

use boris_core::{Position, RunConfig};
use boris_traj::{ParticleId, TrajectoryRecord};

pub fn row(step: usize, iteration: usize, particle: i64, pos: [f64; 3]) -> TrajectoryRecord {
    TrajectoryRecord {
        step,
        iteration,
        particle: ParticleId::from_raw(particle).expect("valid id"),
        position: Position::new(pos[0], pos[1], pos[2]),
        velocity: Position::zeros(),
        energy: 10.0 + step as f64,
        drift: 0.5 * step as f64,
        residual: 1e-3 / (1.0 + step as f64),
    }
}

pub fn write_rows(path: &Path, rows: &[TrajectoryRecord]) {
    let body: Vec<String> = rows.iter().map(TrajectoryRecord::to_csv_row).collect();
    fs::write(path, body.join("\n") + "\n").expect("write rows");
}

pub fn write_raw(path: &Path, lines: &[&str]) {
    fs::write(path, lines.join("\n") + "\n").expect("write raw rows");
}

/// Reference run holding a seed row and one converged row per step.
pub fn reference_rows(config: &RunConfig) -> Vec<TrajectoryRecord> {
    let mut rows = vec![row(1, 0, 0, [0.0, 0.0, 0.0])];
    for step in 1..=config.nsteps {
        rows.push(row(step, config.niter - 1, 0, [step as f64, 0.0, 0.0]));
    }
    rows
}

/// Main run writing every sweep of every step, as the simulation does. The
/// iteration-0 rows of step 1 double as the seed for step 0.
pub fn complete_main_rows(config: &RunConfig) -> Vec<TrajectoryRecord> {
    let mut rows = Vec::new();
    for step in 1..=config.nsteps {
        for iteration in 0..config.niter {
            for p in 0..config.nparticles as i64 {
                rows.push(row(step, iteration, p, [p as f64, step as f64, iteration as f64]));
            }
            rows.push(row(step, iteration, -1, [0.0, step as f64, iteration as f64]));
        }
    }
    rows
}
