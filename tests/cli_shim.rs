//! End-to-end contracts for the dispatcher surfaces that never spawn the
//! target tool: version, help, empty invocation, unknown commands, and the
//! debug echo. Translator behavior against a live repository is covered by
//! the unit tests on the planning functions.

use std::process::{Command, Output};

fn run_gitsl(args: &[&str], debug: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gitsl"));
    cmd.args(args);
    match debug {
        Some(value) => cmd.env("GITSL_DEBUG", value),
        None => cmd.env_remove("GITSL_DEBUG"),
    };
    cmd.output().expect("failed to execute gitsl")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn version_prints_and_exits_zero() {
    let output = run_gitsl(&["--version"], None);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("gitsl version"));
}

#[test]
fn help_mentions_debug_toggle() {
    let output = run_gitsl(&["--help"], None);
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("usage: git <command> [<args>]"));
    assert!(text.contains("GITSL_DEBUG"));
}

#[test]
fn empty_invocation_is_usage_error() {
    let output = run_gitsl(&[], None);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("usage: git <command> [<args>]"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn unknown_command_reports_but_exits_zero() {
    let output = run_gitsl(&["notarealcommand", "foo"], None);
    assert_eq!(output.status.code(), Some(0));
    let err = stderr(&output);
    assert!(err.contains("unsupported command"));
    assert!(err.contains("notarealcommand foo"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn debug_mode_echoes_instead_of_executing() {
    let output = run_gitsl(&["status", "--short"], Some("1"));
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("[DEBUG] Would execute: sl status --short"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn debug_mode_quotes_spaced_arguments() {
    let output = run_gitsl(&["commit", "-m", "two words"], Some("true"));
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("sl commit -m 'two words'"));
}

#[test]
fn falsy_debug_value_does_not_trigger_echo() {
    let output = run_gitsl(&["notarealcommand"], Some("0"));
    assert_eq!(output.status.code(), Some(0));
    let err = stderr(&output);
    assert!(err.contains("unsupported command"));
    assert!(!err.contains("[DEBUG]"));
}
