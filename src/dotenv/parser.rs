use super::DotenvError;

/// A single `KEY=VALUE` line, value still raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub key: String,
    pub value: String,
}

/// Parse one line of an env file.
///
/// Blank lines and lines starting with `#` produce `None`. Everything else must
/// contain a `=`; the line is split at the first one, so the value may contain
/// further `=` characters. Empty keys and values are accepted as-is.
pub fn parse_line(line: &str) -> Result<Option<Binding>, DotenvError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (key, value) = line
        .split_once('=')
        .ok_or_else(|| DotenvError::Parse(line.to_string()))?;

    Ok(Some(Binding {
        key: key.to_string(),
        value: value.to_string(),
    }))
}
