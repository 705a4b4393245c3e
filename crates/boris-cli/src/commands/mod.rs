use std::error::Error;
use std::path::PathBuf;

use boris_core::{FileNaming, RunConfig};
use clap::Args;

pub mod export;
pub mod meetup;
pub mod show_config;
pub mod summary;

/// Identifies the run to analyse, either through a YAML file or explicit counts.
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// YAML run configuration (build_dir, nsteps, niter, nparticles, naming).
    #[arg(long, conflicts_with_all = ["build_dir", "nsteps", "niter", "nparticles", "dt", "nodes", "level"])]
    pub config: Option<PathBuf>,
    /// Directory holding the simulation CSV output.
    #[arg(long)]
    pub build_dir: Option<PathBuf>,
    #[arg(long)]
    pub nsteps: Option<usize>,
    #[arg(long)]
    pub niter: Option<usize>,
    #[arg(long)]
    pub nparticles: Option<usize>,
    /// Step size formatted into the file names.
    #[arg(long)]
    pub dt: Option<f64>,
    /// Collocation nodes formatted into the file names.
    #[arg(long)]
    pub nodes: Option<usize>,
    /// Level suffix of multi-level runs.
    #[arg(long)]
    pub level: Option<u32>,
    /// Fail when some particle or step was never written.
    #[arg(long)]
    pub require_complete: bool,
}

impl DatasetArgs {
    pub fn run_config(&self) -> Result<RunConfig, Box<dyn Error>> {
        if let Some(path) = &self.config {
            let config = RunConfig::load(path)?;
            return Ok(if self.require_complete {
                config.with_require_complete(true)
            } else {
                config
            });
        }
        let (Some(build_dir), Some(nsteps), Some(niter), Some(nparticles)) = (
            self.build_dir.as_ref(),
            self.nsteps,
            self.niter,
            self.nparticles,
        ) else {
            return Err(
                "either --config or all of --build-dir, --nsteps, --niter, --nparticles are required"
                    .into(),
            );
        };
        let defaults = FileNaming::default();
        let naming = FileNaming {
            dt: self.dt.unwrap_or(defaults.dt),
            nodes: self.nodes.unwrap_or(defaults.nodes),
            level: self.level,
        };
        let config = RunConfig::new(build_dir, nsteps, niter, nparticles)
            .with_naming(naming)
            .with_require_complete(self.require_complete);
        config.validate()?;
        Ok(config)
    }
}
