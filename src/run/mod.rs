use anyhow::Result;
use std::process::ExitStatus;

use crate::cli::Cli;
use crate::dotenv;

mod launch;

pub use launch::LaunchError;

/// Load the nearest env file into our environment, then run the requested command.
pub fn execute(cli: &Cli) -> Result<ExitStatus> {
    let file = dotenv::locate_from_cwd(&cli.file)?;
    dotenv::load_file(&file)?;

    let status = launch::command(cli.program(), cli.args())?;
    Ok(status)
}
