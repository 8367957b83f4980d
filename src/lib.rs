//! Run a command with environment variables loaded from the nearest `.env` file.
//!
//! The file is searched for in the current directory and then in each parent
//! directory. Its bindings are written to this process' environment, which the
//! child inherits together with stdin, stdout and stderr.

pub mod cli;
pub mod command;
pub mod common;
pub mod dotenv;
pub mod logging;
pub mod run;
pub mod signal;
