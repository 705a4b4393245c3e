use std::error::Error;

use boris_diag::Analysis;
use clap::Args;

use super::DatasetArgs;

#[derive(Args, Debug)]
pub struct MeetupArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,
    /// Only consider steps at or after this one.
    #[arg(long, default_value_t = 0)]
    pub after: usize,
}

pub fn run(args: &MeetupArgs) -> Result<(), Box<dyn Error>> {
    let analysis = Analysis::load(&args.dataset.run_config()?)?;
    println!("{}", analysis.meetup_step(args.after)?);
    Ok(())
}
