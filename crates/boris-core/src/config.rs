use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{BorisError, ErrorInfo};
use crate::naming::{DatasetPaths, FileNaming};

/// Immutable description of one simulation run to analyse.
///
/// Together with [`FileNaming`], the build directory and the three counts
/// determine both trajectory file paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Directory holding the CSV output of the simulation.
    pub build_dir: PathBuf,
    /// Number of time steps; series have `nsteps + 1` entries.
    pub nsteps: usize,
    /// Sweeps per step; the converged sub-iterate is `niter - 1`.
    pub niter: usize,
    /// Particles in the main run (the reference run always has one).
    pub nparticles: usize,
    /// Step size and substep constants baked into the file names.
    #[serde(default)]
    pub naming: FileNaming,
    /// Reject datasets in which some `(particle, step)` slot is never written.
    #[serde(default)]
    pub require_complete: bool,
}

impl RunConfig {
    /// Creates a configuration with the default naming constants.
    pub fn new(build_dir: impl Into<PathBuf>, nsteps: usize, niter: usize, nparticles: usize) -> Self {
        Self {
            build_dir: build_dir.into(),
            nsteps,
            niter,
            nparticles,
            naming: FileNaming::default(),
            require_complete: false,
        }
    }

    pub fn with_naming(mut self, naming: FileNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_require_complete(mut self, require_complete: bool) -> Self {
        self.require_complete = require_complete;
        self
    }

    /// Reads and validates a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, BorisError> {
        let raw = fs::read(path).map_err(|err| {
            BorisError::Config(ErrorInfo::new("config-read", err.to_string()).with_path(path))
        })?;
        let config: RunConfig = serde_yaml::from_slice(&raw).map_err(|err| {
            BorisError::Config(ErrorInfo::new("config-parse", err.to_string()).with_path(path))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the counts the loader relies on.
    pub fn validate(&self) -> Result<(), BorisError> {
        if self.niter == 0 {
            return Err(BorisError::Config(
                ErrorInfo::new("config-niter", "niter must be at least 1")
                    .with_hint("the converged sub-iterate is niter - 1"),
            ));
        }
        if self.nparticles == 0 {
            return Err(BorisError::Config(ErrorInfo::new(
                "config-nparticles",
                "nparticles must be at least 1",
            )));
        }
        if !self.naming.dt.is_finite() || self.naming.dt <= 0.0 {
            return Err(BorisError::Config(
                ErrorInfo::new("config-dt", "step size must be positive and finite")
                    .with_context("dt", self.naming.dt),
            ));
        }
        Ok(())
    }

    /// Number of entries in every per-step series.
    pub fn series_len(&self) -> usize {
        self.nsteps + 1
    }

    /// Resolves the main and reference trajectory file paths.
    pub fn paths(&self) -> DatasetPaths {
        DatasetPaths::resolve(
            &self.build_dir,
            self.nsteps,
            self.niter,
            self.nparticles,
            &self.naming,
        )
    }
}
