use std::process;

use envrun::cli::Cli;
use envrun::common::{Error, IntoResult, DEFAULT_ERROR_EXIT_STATUS};
use envrun::{logging, run, signal};

fn main() {
    logging::init();
    signal::setup_signal_handler();

    let cli = Cli::parse_or_exit();
    let result = run::execute(&cli).into_result();
    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(Error::Code(code)) => {
            process::exit(code);
        }
        Err(Error::Message(msg)) => {
            eprintln!("{}: {}", env!("CARGO_PKG_NAME"), msg);
            process::exit(DEFAULT_ERROR_EXIT_STATUS);
        }
    }
}
