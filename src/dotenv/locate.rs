use std::path::{Path, PathBuf};

use super::DotenvError;

/// An env file found by [`locate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFile {
    /// path of the file itself
    pub path: PathBuf,
    /// one `../` per directory climbed from the starting directory
    pub prefix: String,
}

/// Search `start` and then each of its ancestors for `file_name`.
pub fn locate(start: &Path, file_name: &str) -> Result<EnvFile, DotenvError> {
    start
        .ancestors()
        .enumerate()
        .map(|(level, dir)| (level, dir.join(file_name)))
        .find(|(_, path)| path.is_file())
        .map(|(level, path)| EnvFile {
            path,
            prefix: "../".repeat(level),
        })
        .ok_or_else(|| DotenvError::NotFound(file_name.to_string()))
}

pub fn locate_from_cwd(file_name: &str) -> Result<EnvFile, DotenvError> {
    let cwd = std::env::current_dir().map_err(|source| DotenvError::Io {
        path: PathBuf::from("."),
        source,
    })?;

    let found = locate(&cwd, file_name)?;
    tracing::debug!(
        path = %found.path.display(),
        prefix = %found.prefix,
        "located env file"
    );
    Ok(found)
}
