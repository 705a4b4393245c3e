//! File naming template shared with the simulation writers.
//!
//! A run writes `s{nsteps}_i{niter}_dt{dt}_m{nodes}_p{nparticles}.csv`, with the
//! step size printed at six decimals. Multi-level runs add `_level{n}` before
//! the extension.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Constants formatted into trajectory file names. They are never computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileNaming {
    /// Time step size of the integrator.
    #[serde(default = "default_dt")]
    pub dt: f64,
    /// Number of collocation nodes per step.
    #[serde(default = "default_nodes")]
    pub nodes: usize,
    /// Level suffix written by multi-level controllers.
    #[serde(default)]
    pub level: Option<u32>,
}

fn default_dt() -> f64 {
    0.015625
}

fn default_nodes() -> usize {
    5
}

impl Default for FileNaming {
    fn default() -> Self {
        Self {
            dt: default_dt(),
            nodes: default_nodes(),
            level: None,
        }
    }
}

impl FileNaming {
    /// Formats the file name for a run with the given dimensions.
    pub fn file_name(&self, nsteps: usize, niter: usize, nparticles: usize) -> String {
        let level = match self.level {
            Some(level) => format!("_level{level}"),
            None => String::new(),
        };
        format!(
            "s{nsteps}_i{niter}_dt{:.6}_m{}_p{nparticles}{level}.csv",
            self.dt, self.nodes
        )
    }
}

/// Locations of the two correlated record streams of one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetPaths {
    /// Multi-particle run.
    pub main: PathBuf,
    /// Single-particle reference run.
    pub reference: PathBuf,
}

impl DatasetPaths {
    pub fn resolve(
        build_dir: &Path,
        nsteps: usize,
        niter: usize,
        nparticles: usize,
        naming: &FileNaming,
    ) -> Self {
        Self {
            main: build_dir.join(naming.file_name(nsteps, niter, nparticles)),
            reference: build_dir.join(naming.file_name(nsteps, niter, 1)),
        }
    }
}
