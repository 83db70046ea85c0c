//! Target-tool invoker: every `sl` subprocess goes through here.
//!
//! Two modes only. Passthrough inherits stdio so editors, pagers and
//! progress bars behave exactly as if the user had typed `sl` themselves
//! (and the child shares the process group, so Ctrl-C reaches it).
//! Captured buffers stdout/stderr for translators that need to inspect or
//! recode the output before anything is shown.
//!
//! The read-only probe queries translators use for disambiguation also live
//! here. Their failures are boolean/None signals, never user-visible errors;
//! only the final translator decision produces output.

use crate::core::error::GitslError;
use std::ffi::OsStr;
use std::process::{Command, ExitStatus};

/// The target tool binary.
pub const SL_BIN: &str = "sl";

/// Result of a captured invocation.
#[derive(Debug)]
pub struct Captured {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl Captured {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

fn exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    status.code().unwrap_or(1)
}

/// Run `sl` with inherited stdio and return its exit code.
pub fn passthrough<S: AsRef<OsStr>>(args: &[S]) -> Result<i32, GitslError> {
    let status = Command::new(SL_BIN).args(args).status()?;
    Ok(exit_code(status))
}

/// Run `sl` with buffered stdout/stderr.
pub fn captured<S: AsRef<OsStr>>(args: &[S]) -> Result<Captured, GitslError> {
    let output = Command::new(SL_BIN).args(args).output()?;
    Ok(Captured {
        code: exit_code(output.status),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Run captured but discard all output; used for `-q` modes.
pub fn quiet<S: AsRef<OsStr>>(args: &[S]) -> Result<i32, GitslError> {
    Ok(captured(args)?.code)
}

// ---- probes ------------------------------------------------------------

/// Does `rev` name a commit, bookmark or revset the target tool accepts?
pub fn is_valid_revision(rev: &str) -> bool {
    captured(&["log", "-r", rev, "-T", "{node}", "-l", "1"])
        .map(|c| c.success())
        .unwrap_or(false)
}

/// Name of the active bookmark, if any.
pub fn active_bookmark() -> Option<String> {
    let out = captured(&["log", "-r", ".", "-T", "{activebookmark}"]).ok()?;
    if !out.success() {
        return None;
    }
    let name = out.stdout.trim().to_string();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Configured identity for Signed-off-by trailers.
pub fn user_identity() -> String {
    let configured = captured(&["config", "ui.username"])
        .ok()
        .map(|c| c.stdout.trim().to_string())
        .unwrap_or_default();
    if configured.is_empty() {
        "Unknown User <unknown@example.com>".to_string()
    } else {
        configured
    }
}

/// Shelve names, most recent first. Empty on any failure.
pub fn shelve_names() -> Vec<String> {
    let out = match captured(&["shelve", "--list"]) {
        Ok(c) if c.success() => c,
        _ => return Vec::new(),
    };
    out.stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(|name| name.to_string())
        .collect()
}

/// Tracked files that are missing from disk, optionally path-filtered.
pub fn deleted_files(pathspec: &[String]) -> Vec<String> {
    let mut args = vec!["status".to_string(), "-d".to_string(), "-n".to_string()];
    args.extend(pathspec.iter().cloned());
    let out = match captured(&args) {
        Ok(c) if c.success() => c,
        _ => return Vec::new(),
    };
    out.stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.to_string())
        .collect()
}

/// `sl root`, captured; callers decide how to surface failure.
pub fn repo_root() -> Result<Captured, GitslError> {
    captured(&["root"])
}
