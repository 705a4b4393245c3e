#![allow(dead_code)]

use std::fs;
use std::path::Path;

use boris_core::{Position, RunConfig};
use boris_traj::{ParticleId, ReferenceTrajectory, TrajectoryDataset, TrajectoryRecord};

/// Row with unit energy, zero drift and a small residual.
pub fn row(step: usize, iteration: usize, particle: i64, pos: [f64; 3]) -> String {
    TrajectoryRecord {
        step,
        iteration,
        particle: ParticleId::from_raw(particle).expect("valid id"),
        position: Position::new(pos[0], pos[1], pos[2]),
        velocity: Position::zeros(),
        energy: 1.0,
        drift: 0.0,
        residual: 1e-10,
    }
    .to_csv_row()
}

pub fn write_run(config: &RunConfig, main: &[String], reference: &[String]) {
    let paths = config.paths();
    fs::write(&paths.main, main.join("\n") + "\n").expect("write main");
    fs::write(&paths.reference, reference.join("\n") + "\n").expect("write reference");
}

pub fn write_lines(path: &Path, lines: &[String]) {
    fs::write(path, lines.join("\n") + "\n").expect("write lines");
}

/// Dataset with the center of mass at the origin and particle `p` at
/// `tracks[p][s]` on the x axis.
pub fn dataset_on_x_axis(tracks: &[Vec<f64>]) -> TrajectoryDataset {
    let nsteps = tracks.first().map_or(0, |t| t.len() - 1);
    let positions = tracks
        .iter()
        .map(|track| track.iter().map(|x| Position::new(*x, 0.0, 0.0)).collect())
        .collect();
    let len = nsteps + 1;
    TrajectoryDataset::from_series(
        nsteps,
        positions,
        vec![Position::zeros(); len],
        vec![2.0; len],
        vec![0.5; len],
        vec![1e-8; len],
        ReferenceTrajectory::new(vec![Position::zeros(); len]),
    )
}
