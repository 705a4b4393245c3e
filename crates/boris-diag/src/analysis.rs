use boris_core::{BorisError, RunConfig};
use boris_traj::{load_config, TrajectoryDataset};

use crate::series::DiagnosticSeries;

/// A loaded dataset together with its eagerly computed diagnostics.
#[derive(Debug, Clone)]
pub struct Analysis {
    dataset: TrajectoryDataset,
    diagnostics: DiagnosticSeries,
}

impl Analysis {
    /// Loads both run files and computes the diagnostics once.
    pub fn load(config: &RunConfig) -> Result<Self, BorisError> {
        Self::from_dataset(load_config(config)?)
    }

    pub fn from_dataset(dataset: TrajectoryDataset) -> Result<Self, BorisError> {
        let diagnostics = DiagnosticSeries::compute(&dataset)?;
        Ok(Self {
            dataset,
            diagnostics,
        })
    }

    pub fn dataset(&self) -> &TrajectoryDataset {
        &self.dataset
    }

    pub fn diagnostics(&self) -> &DiagnosticSeries {
        &self.diagnostics
    }

    pub fn meetup_step(&self, after: usize) -> Result<usize, BorisError> {
        self.diagnostics.meetup_step(after)
    }
}
