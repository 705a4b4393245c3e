//! Diagnostics engine: distance of each particle to the center of mass, the
//! per-step min/max/mean of those distances, and detection of the step at
//! which the cloud is tightest (the "meetup").
//!
//! Everything here is a pure batch transform over a loaded
//! [`boris_traj::TrajectoryDataset`]. The [`summary`] and [`export`] modules
//! format results for an external plotting tool and compute nothing new.

pub mod analysis;
pub mod distance;
pub mod export;
pub mod series;
pub mod stats;
pub mod summary;
pub mod window;

pub use analysis::Analysis;
pub use export::{write_analytics_csv, write_summary_json, write_trajectories_csv};
pub use series::{meetup_after, DiagnosticSeries};
pub use stats::Reductions;
pub use summary::RunSummary;
pub use window::StepWindow;

use boris_core::BorisError;
use boris_traj::TrajectoryDataset;

/// Computes the diagnostic series of `dataset`.
pub fn compute(dataset: &TrajectoryDataset) -> Result<DiagnosticSeries, BorisError> {
    DiagnosticSeries::compute(dataset)
}
