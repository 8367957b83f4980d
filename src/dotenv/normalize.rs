use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref VAR_REFERENCE: Regex =
        Regex::new(r"\$(?:\{([^}]*)\}|([*#$@!?0-9-])|([A-Za-z_][A-Za-z0-9_]*))")
            .expect("variable reference pattern is valid");
}

/// Produce the value that ends up in the environment.
///
/// Values starting with `./` or `../` are paths relative to the env file, so
/// they get `prefix` prepended and are cleaned. Variable references are then
/// expanded over the whole value.
///
/// Single quotes do not suppress expansion: `'$HOME'` expands like `$HOME`.
pub fn normalize_value(raw: &str, prefix: &str) -> String {
    let value: Cow<str> = if raw.starts_with("./") || raw.starts_with("../") {
        Cow::Owned(clean_path(&format!("{}{}", prefix, raw)))
    } else {
        Cow::Borrowed(raw)
    };

    expand_env(&value)
}

/// Replace `$NAME` and `${NAME}` with the current value of `NAME`.
///
/// `NAME` is an identifier, a single special character (`$1`, `$$`, `$?`,
/// ...), or anything between braces. Unset variables expand to the empty
/// string. A `$` that isn't followed by a name is kept literally.
pub fn expand_env(value: &str) -> String {
    VAR_REFERENCE
        .replace_all(value, |caps: &Captures| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map_or("", |m| m.as_str());
            std::env::var(name).unwrap_or_default()
        })
        .into_owned()
}

/// Lexically clean a slash separated relative path.
///
/// Empty and `.` segments are dropped and `..` eats the segment before it when
/// there is one. The result keeps a leading `./` unless it climbs out with
/// `..`, so `./bin/tool` stays `./bin/tool` instead of becoming a bare name.
pub fn clean_path(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(last) if *last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    if absolute {
        return format!("/{}", joined);
    }

    match segments.first() {
        None => ".".to_string(),
        Some(&"..") => joined,
        Some(_) => format!("./{}", joined),
    }
}
