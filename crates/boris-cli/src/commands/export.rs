use std::error::Error;
use std::fs;
use std::path::PathBuf;

use boris_diag::{
    write_analytics_csv, write_summary_json, write_trajectories_csv, Analysis, RunSummary,
    StepWindow,
};
use clap::Args;

use super::DatasetArgs;

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,
    /// Output directory for the CSV and JSON artefacts.
    #[arg(long)]
    pub out: PathBuf,
    #[arg(long, default_value_t = 0)]
    pub start: usize,
    /// Last exported step (defaults to the final step).
    #[arg(long)]
    pub until: Option<usize>,
    /// Also export `step ± width` around the meetup step.
    #[arg(long)]
    pub meetup_width: Option<usize>,
    /// Offset passed to meetup detection.
    #[arg(long, default_value_t = 0)]
    pub after: usize,
}

pub fn run(args: &ExportArgs) -> Result<(), Box<dyn Error>> {
    let config = args.dataset.run_config()?;
    let analysis = Analysis::load(&config)?;
    let nsteps = analysis.dataset().nsteps();
    let window = StepWindow::new(args.start, args.until.unwrap_or(nsteps), nsteps)?;

    fs::create_dir_all(&args.out)?;
    write_analytics_csv(&analysis, &window, &args.out.join("analytics.csv"))?;
    write_trajectories_csv(&analysis, &window, &args.out.join("trajectories.csv"))?;
    let summary = RunSummary::from_analysis(&analysis, Some(window.until()))?;
    write_summary_json(&summary, &args.out.join("summary.json"))?;

    if let Some(width) = args.meetup_width {
        let step = analysis.meetup_step(args.after)?;
        let around = StepWindow::around(step, width, nsteps);
        log::info!(
            "meetup at step {step}, exporting steps {}..={}",
            around.start(),
            around.until()
        );
        write_analytics_csv(&analysis, &around, &args.out.join("meetup_analytics.csv"))?;
        write_trajectories_csv(&analysis, &around, &args.out.join("meetup_trajectories.csv"))?;
    }
    log::info!("artefacts written to {}", args.out.display());
    Ok(())
}
