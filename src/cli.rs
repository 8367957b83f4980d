use std::ffi::OsString;
use std::path::Path;
use std::process;

use clap::Parser;

use crate::common::{DEFAULT_ERROR_EXIT_STATUS, ENV_FILE};

#[derive(Debug, Parser)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = "Run a command with the variables of the nearest .env file",
    long_about = None
)]
#[command(help_template = "\
{before-help}{name} ({version})
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
")]
pub struct Cli {
    /// Name of the env file, searched for in the current directory and its parents
    #[arg(short, long, value_name = "NAME", default_value = ENV_FILE, value_parser = parse_file_name)]
    pub file: String,

    /// The command to run, followed by its arguments
    #[arg(
        value_name = "COMMAND",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    command: Vec<OsString>,
}

impl Cli {
    /// Parse `std::env::args_os`, exiting with status 1 on usage errors.
    pub fn parse_or_exit() -> Self {
        match Cli::try_parse() {
            Ok(cli) => cli,
            Err(err) => {
                let code = if err.use_stderr() {
                    DEFAULT_ERROR_EXIT_STATUS
                } else {
                    0
                };
                err.print().ok();
                process::exit(code);
            }
        }
    }

    pub fn program(&self) -> &OsString {
        &self.command[0]
    }

    pub fn args(&self) -> &[OsString] {
        &self.command[1..]
    }
}

fn parse_file_name(name: &str) -> Result<String, String> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(std::path::Component::Normal(_)), None) => Ok(name.to_string()),
        _ => Err(format!("expected a bare file name, got \"{}\"", name)),
    }
}
