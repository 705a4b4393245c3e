use std::error::Error;
use std::path::PathBuf;

use boris_diag::{write_summary_json, Analysis, RunSummary};
use clap::Args;

use super::DatasetArgs;

#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,
    /// Step the last center of mass is read at (defaults to the final step).
    #[arg(long)]
    pub until: Option<usize>,
    /// Also write the summary as canonical JSON.
    #[arg(long)]
    pub json: Option<PathBuf>,
}

pub fn run(args: &SummaryArgs) -> Result<(), Box<dyn Error>> {
    let config = args.dataset.run_config()?;
    let analysis = Analysis::load(&config)?;
    let summary = RunSummary::from_analysis(&analysis, args.until)?;
    println!("{summary}");
    if let Some(path) = &args.json {
        write_summary_json(&summary, path)?;
        log::info!("summary written to {}", path.display());
    }
    Ok(())
}
