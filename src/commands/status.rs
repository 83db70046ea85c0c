//! `git status` → `sl status`, with porcelain recoding.
//!
//! `--porcelain/--short/-s` captures sl's one-char-per-line output and
//! re-emits it in git's two-char porcelain format via the fixed code table
//! in [`crate::core::porcelain`]. `-b/--branch` prepends a synthesized
//! `## <bookmark>` header computed from a separate read-only query.

use crate::core::error::GitslError;
use crate::core::output;
use crate::core::porcelain;
use crate::core::scan::{scan, Effect, Rule};
use crate::core::sl;
use std::io::Write;

const RULES: &[Rule] = &[
    Rule::flag(&["--porcelain", "--short", "-s"], Effect::Set("porcelain")),
    Rule::flag(&["--ignored"], Effect::Set("ignored")),
    Rule::flag(&["-b", "--branch"], Effect::Set("branch")),
    Rule::flag(&["-v", "--verbose"], Effect::Set("verbose")),
];

/// Pull the `-u`/`--untracked-files` mode out of the argument list before
/// the rule scan. `-u` only consumes a following token when it is one of
/// the three defined modes, so `-u path` keeps its path.
fn extract_untracked_mode(args: &[String]) -> (Vec<String>, Option<String>) {
    let mut remaining = Vec::new();
    let mut mode = None;
    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "--untracked-files" {
            mode = Some("all".to_string());
        } else if let Some(value) = arg.strip_prefix("--untracked-files=") {
            mode = Some(value.to_string());
        } else if arg == "-u" {
            if let Some(next) = args.get(i + 1) {
                if matches!(next.as_str(), "no" | "normal" | "all") {
                    mode = Some(next.clone());
                    i += 2;
                    continue;
                }
            }
            mode = Some("all".to_string());
        } else if let Some(value) = arg.strip_prefix("-u") {
            if !arg.starts_with("--") && !value.is_empty() {
                mode = Some(value.to_string());
            } else {
                remaining.push(arg.clone());
            }
        } else {
            remaining.push(arg.clone());
        }
        i += 1;
    }
    (remaining, mode)
}

pub fn run(args: &[String]) -> Result<i32, GitslError> {
    let (args, untracked_mode) = extract_untracked_mode(args);
    let scanned = scan(&args, RULES);

    let mut sl_extra = scanned.rest.clone();
    if scanned.set("ignored") {
        sl_extra.push("-i".to_string());
    }
    if untracked_mode.as_deref() == Some("no") {
        // Only tracked-file changes: modified, added, removed, deleted.
        sl_extra.push("-mard".to_string());
    }
    if scanned.set("verbose") {
        output::note(
            "Sapling -v shows repo state info, not staged diffs. \
             Use 'sl diff' to see all uncommitted changes.",
        );
    }

    let mut sl_args = vec!["status".to_string()];
    sl_args.extend(sl_extra);

    if scanned.set("porcelain") {
        let captured = sl::captured(&sl_args)?;
        if captured.success() {
            let mut out = String::new();
            if scanned.set("branch") {
                out.push_str(&porcelain::branch_header(sl::active_bookmark().as_deref()));
            }
            out.push_str(&porcelain::to_porcelain(&captured.stdout));
            print!("{}", out);
            let _ = std::io::stdout().flush();
        } else {
            eprint!("{}", captured.stderr);
        }
        return Ok(captured.code);
    }

    if scanned.set("branch") {
        print!("{}", porcelain::branch_header(sl::active_bookmark().as_deref()));
        let _ = std::io::stdout().flush();
    }
    sl::passthrough(&sl_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_porcelain_aliases() {
        for alias in ["--porcelain", "--short", "-s"] {
            let scanned = scan(&args(&[alias]), RULES);
            assert!(scanned.set("porcelain"), "alias: {}", alias);
        }
    }

    #[test]
    fn test_untracked_mode_forms() {
        let (rest, mode) = extract_untracked_mode(&args(&["-uno"]));
        assert_eq!(mode.as_deref(), Some("no"));
        assert!(rest.is_empty());

        let (rest, mode) = extract_untracked_mode(&args(&["-u", "no", "path"]));
        assert_eq!(mode.as_deref(), Some("no"));
        assert_eq!(rest, vec!["path"]);

        let (rest, mode) = extract_untracked_mode(&args(&["--untracked-files=all"]));
        assert_eq!(mode.as_deref(), Some("all"));
        assert!(rest.is_empty());

        // -u with a non-mode follower defaults to "all" and keeps the path.
        let (rest, mode) = extract_untracked_mode(&args(&["-u", "src/"]));
        assert_eq!(mode.as_deref(), Some("all"));
        assert_eq!(rest, vec!["src/"]);
    }

    #[test]
    fn test_branch_and_ignored_are_toggles() {
        let scanned = scan(&args(&["-b", "--ignored", "path"]), RULES);
        assert!(scanned.set("branch"));
        assert!(scanned.set("ignored"));
        assert_eq!(scanned.rest, vec!["path"]);
    }
}
