use std::error::Error;

use boris_core::serde::to_yaml_string;
use clap::Args;

use super::DatasetArgs;

#[derive(Args, Debug)]
pub struct ShowConfigArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,
}

/// Prints the resolved configuration and the two file paths it points at.
pub fn run(args: &ShowConfigArgs) -> Result<(), Box<dyn Error>> {
    let config = args.dataset.run_config()?;
    print!("{}", to_yaml_string(&config)?);
    let paths = config.paths();
    println!("# main:      {}", paths.main.display());
    println!("# reference: {}", paths.reference.display());
    Ok(())
}
