//! Shared helpers for envrun integration tests.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// An `envrun` command running inside `dir`, with logging kept quiet.
pub fn envrun_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envrun");
    cmd.current_dir(dir).env_remove("ENVRUN_LOG");
    cmd
}

/// A scratch project whose root holds an env file with `contents`.
pub fn project_with_env(contents: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join(".env"), contents).expect("write .env");
    dir
}
