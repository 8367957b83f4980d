//! End-to-end tests for `envrun <command> [args...]`.
#![cfg(unix)]

mod common;

use std::fs;

use common::{envrun_cmd, project_with_env};
use predicates::prelude::*;

#[test]
fn test_loaded_variable_reaches_child() {
    let project = project_with_env("GREETING=hello\n");

    envrun_cmd(project.path())
        .args(["printenv", "GREETING"])
        .assert()
        .code(0)
        .stdout("hello\n");
}

#[test]
fn test_malformed_line_aborts_before_launch() {
    let project = project_with_env("GREETING=hello\nthis line is broken\n");
    let marker = project.path().join("child-ran");

    envrun_cmd(project.path())
        .args(["touch", "child-ran"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "failed to parse line: this line is broken",
        ));

    assert!(!marker.exists(), "child must not run after a parse error");
}

#[test]
fn test_child_exit_code_is_propagated() {
    let project = project_with_env("A=1\n");

    envrun_cmd(project.path())
        .args(["sh", "-c", "exit 7"])
        .assert()
        .code(7);
}

#[test]
fn test_missing_command_prints_usage() {
    let project = project_with_env("A=1\n");

    envrun_cmd(project.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_binary_is_a_launch_error() {
    let project = project_with_env("A=1\n");

    envrun_cmd(project.path())
        .arg("envrun-no-such-binary")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "command not found: envrun-no-such-binary",
        ));
}

#[test]
fn test_missing_env_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("child-ran");

    envrun_cmd(dir.path())
        .args(["--file", "envrun-surely-missing.env", "touch", "child-ran"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "cannot find envrun-surely-missing.env file",
        ));

    assert!(!marker.exists());
}

#[test]
fn test_env_file_found_in_parent_directory() {
    let project = project_with_env("TOOL=./bin/tool\nGREETING=hi from $USER_NAME\n");
    let nested = project.path().join("src").join("deep");
    fs::create_dir_all(&nested).unwrap();

    envrun_cmd(&nested)
        .env("USER_NAME", "tester")
        .args(["sh", "-c", "echo \"$TOOL|$GREETING\""])
        .assert()
        .success()
        .stdout("../../bin/tool|hi from tester\n");
}

#[test]
fn test_arguments_are_forwarded_verbatim() {
    let project = project_with_env("A=1\n");

    envrun_cmd(project.path())
        .args(["printf", "%s|", "--file", "-n", "$A"])
        .assert()
        .success()
        .stdout("--file|-n|$A|");
}

#[test]
fn test_file_flag_selects_other_name() {
    let project = project_with_env("MODE=default\n");
    fs::write(project.path().join(".env.test"), "MODE=test\n").unwrap();

    envrun_cmd(project.path())
        .args(["-f", ".env.test", "printenv", "MODE"])
        .assert()
        .success()
        .stdout("test\n");
}

#[test]
fn test_stdin_is_passed_to_child() {
    let project = project_with_env("A=1\n");

    envrun_cmd(project.path())
        .arg("cat")
        .write_stdin("piped input\n")
        .assert()
        .success()
        .stdout("piped input\n");
}

#[test]
fn test_empty_key_is_skipped_with_warning() {
    let project = project_with_env("=value\nGREETING=hello\n");

    envrun_cmd(project.path())
        .args(["printenv", "GREETING"])
        .assert()
        .code(0)
        .stdout("hello\n")
        .stderr(predicate::str::contains("skipping binding"));
}

#[test]
fn test_unreadable_env_file_names_path_once() {
    let project = tempfile::tempdir().unwrap();
    fs::write(project.path().join(".env"), b"A=\xff\xfe\n").unwrap();

    let output = envrun_cmd(project.path())
        .arg("true")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"))
        .get_output()
        .stderr
        .clone();

    let stderr = String::from_utf8_lossy(&output);
    assert_eq!(stderr.matches(".env\"").count(), 1, "stderr: {stderr}");
}
