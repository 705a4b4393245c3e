use boris_core::{BorisError, ErrorInfo};
use boris_traj::TrajectoryDataset;
use serde::{Deserialize, Serialize};

use crate::distance::distances_to_center;
use crate::stats::Reductions;

/// Derived distance series of one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticSeries {
    distances: Vec<Vec<f64>>,
    reductions: Reductions,
}

impl DiagnosticSeries {
    /// Computes distances to the center of mass and their per-step reductions.
    ///
    /// Pure in `dataset`: calling it twice yields identical series.
    pub fn compute(dataset: &TrajectoryDataset) -> Result<Self, BorisError> {
        dataset.validate_shape()?;
        if dataset.nparticles() == 0 {
            return Err(BorisError::invalid_dataset(
                "dataset-empty-cloud",
                "distance statistics need at least one particle",
            ));
        }
        let distances = distances_to_center(dataset);
        let reductions = Reductions::across_particles(&distances, dataset.nsteps() + 1);
        Ok(Self {
            distances,
            reductions,
        })
    }

    /// `[particle][step]` distances to the center of mass.
    pub fn distances(&self) -> &[Vec<f64>] {
        &self.distances
    }

    pub fn distance(&self, particle: usize, step: usize) -> Option<f64> {
        self.distances.get(particle)?.get(step).copied()
    }

    pub fn dist_min(&self) -> &[f64] {
        &self.reductions.min
    }

    pub fn dist_max(&self) -> &[f64] {
        &self.reductions.max
    }

    pub fn dist_mean(&self) -> &[f64] {
        &self.reductions.mean
    }

    /// Spread between farthest and nearest particle at each step.
    pub fn spread(&self) -> Vec<f64> {
        self.reductions.spread()
    }

    /// Step of tightest dispersion at or after `after`.
    pub fn meetup_step(&self, after: usize) -> Result<usize, BorisError> {
        let step = meetup_after(&self.spread(), after)?;
        log::debug!("meetup after step {after} found at step {step}");
        Ok(step)
    }
}

/// Index of the smallest finite entry of `spread[after..]`, as an absolute
/// step. Ties resolve to the earliest step.
pub fn meetup_after(spread: &[f64], after: usize) -> Result<usize, BorisError> {
    if after >= spread.len() {
        return Err(BorisError::InvalidDataset(
            ErrorInfo::new("meetup-offset", "meetup offset lies beyond the last step")
                .with_context("after", after)
                .with_context("steps", spread.len()),
        ));
    }
    let mut best: Option<(usize, f64)> = None;
    for (step, &value) in spread.iter().enumerate().skip(after) {
        if value.is_nan() {
            continue;
        }
        match best {
            Some((_, lowest)) if value >= lowest => {}
            _ => best = Some((step, value)),
        }
    }
    best.map(|(step, _)| step).ok_or_else(|| {
        BorisError::InvalidDataset(
            ErrorInfo::new("meetup-undefined", "no step with a finite spread")
                .with_context("after", after),
        )
    })
}
