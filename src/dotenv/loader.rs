use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{normalize_value, parse_line, DotenvError, EnvFile};

/// Apply every binding of `file` to the process environment.
///
/// Returns the number of bindings applied. On a parse error the bindings of
/// earlier lines stay applied.
pub fn load_file(file: &EnvFile) -> Result<usize, DotenvError> {
    let handle = File::open(&file.path).map_err(|source| io_error(&file.path, source))?;
    let reader = BufReader::new(handle);

    load_reader(reader, &file.prefix).map_err(|err| match err {
        DotenvError::Io { source, .. } => io_error(&file.path, source),
        other => other,
    })
}

/// Same as [`load_file`] over any buffered reader.
///
/// Each binding is visible to the expansions of the lines after it.
pub fn load_reader<R: BufRead>(reader: R, prefix: &str) -> Result<usize, DotenvError> {
    let mut applied = 0;

    for line in reader.lines() {
        let line = line.map_err(|source| io_error(Path::new("<reader>"), source))?;
        let Some(binding) = parse_line(&line)? else {
            continue;
        };

        let value = normalize_value(&binding.value, prefix);
        if binding.key.is_empty() || binding.key.contains('\0') || value.contains('\0') {
            tracing::warn!(key = ?binding.key, "skipping binding the environment can't hold");
            continue;
        }

        tracing::trace!(key = %binding.key, "setting environment variable");
        std::env::set_var(&binding.key, value);
        applied += 1;
    }

    tracing::debug!(applied, "loaded env file");
    Ok(applied)
}

fn io_error(path: &Path, source: std::io::Error) -> DotenvError {
    DotenvError::Io {
        path: path.to_path_buf(),
        source,
    }
}
