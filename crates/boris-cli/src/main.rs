use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    export::{self, ExportArgs},
    meetup::{self, MeetupArgs},
    show_config::{self, ShowConfigArgs},
    summary::{self, SummaryArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "boris-analyse",
    about = "Center-of-mass and dispersion diagnostics for Boris particle runs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print initial/final center of mass, energy, drift and residual.
    Summary(SummaryArgs),
    /// Print the step at which the particle cloud is tightest.
    Meetup(MeetupArgs),
    /// Write analytics, trajectory and summary files for plotting.
    Export(ExportArgs),
    /// Print the resolved run configuration and file paths.
    ShowConfig(ShowConfigArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Summary(args) => summary::run(&args),
        Command::Meetup(args) => meetup::run(&args),
        Command::Export(args) => export::run(&args),
        Command::ShowConfig(args) => show_config::run(&args),
    }
}
