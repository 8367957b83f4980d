//! Everything needed to turn a `.env` file into process environment variables.
//!
//! The pipeline is [`locate`] → [`load_file`], which runs every line through
//! [`parse_line`] and [`normalize_value`] before writing it to the process
//! environment. Nothing else in the crate calls `std::env::set_var`.

use std::path::PathBuf;

mod loader;
mod locate;
mod normalize;
mod parser;

pub use loader::{load_file, load_reader};
pub use locate::{locate, locate_from_cwd, EnvFile};
pub use normalize::{clean_path, expand_env, normalize_value};
pub use parser::{parse_line, Binding};

#[derive(Debug, thiserror::Error)]
pub enum DotenvError {
    #[error("failed to parse line: {0}")]
    Parse(String),
    #[error("cannot find {0} file")]
    NotFound(String),
    #[error("failed to read \"{}\"", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
