//! `git checkout` → `sl goto` / `sl revert` / bookmark creation.
//!
//! The hard part is a bare `git checkout <name>`: is `<name>` a revision or
//! a file? Both are checked (a revision probe plus a filesystem check). If
//! both match the shim refuses and tells the user to disambiguate with
//! `--`; if neither matches, the switch is attempted anyway so sl's own
//! error message — which says *why* the ref is bad — reaches the user.
//! The two checks are inherently racy against a changing filesystem; this
//! is best-effort, as in git itself.

use crate::core::error::GitslError;
use crate::core::sl;
use std::path::Path;

/// Outcome of the bare-argument disambiguation.
#[derive(Debug, PartialEq, Eq)]
enum BareAction {
    /// Both interpretations valid: refuse.
    Conflict,
    /// Revision only: switch to it.
    Switch,
    /// File only: restore it from the working parent.
    Restore,
    /// Neither: attempt the switch so sl's error surfaces.
    SwitchFallback,
}

fn decide(is_revision: bool, is_file: bool) -> BareAction {
    match (is_revision, is_file) {
        (true, true) => BareAction::Conflict,
        (true, false) => BareAction::Switch,
        (false, true) => BareAction::Restore,
        (false, false) => BareAction::SwitchFallback,
    }
}

/// git checkout flag spellings that differ on the goto side.
fn translate_goto_flags(args: &[String]) -> Vec<String> {
    args.iter()
        .map(|arg| match arg.as_str() {
            // -f discards local changes; sl spells that -C (clean).
            "-f" | "--force" => "-C".to_string(),
            "-m" | "--merge" => "-m".to_string(),
            _ => arg.clone(),
        })
        .collect()
}

fn split_at_separator(args: &[String]) -> (Vec<String>, Vec<String>) {
    match args.iter().position(|a| a == "--") {
        Some(idx) => (args[..idx].to_vec(), args[idx + 1..].to_vec()),
        None => (args.to_vec(), Vec::new()),
    }
}

/// `checkout -b/-B <name> [<start-point>]`: optional goto to the start
/// point, create the bookmark, then goto to activate it.
fn create_branch(args: &[String]) -> Result<i32, GitslError> {
    let mut branch_name = None;
    let mut start_point = None;
    for (i, arg) in args.iter().enumerate() {
        if arg == "-b" || arg == "-B" {
            branch_name = args.get(i + 1);
            start_point = args.get(i + 2).filter(|a| !a.starts_with('-'));
            break;
        }
    }

    let branch_name = match branch_name {
        Some(name) => name,
        None => {
            eprintln!("error: switch `-b' requires a value");
            return Ok(128);
        }
    };

    if let Some(start) = start_point {
        let code = sl::passthrough(&["goto", start.as_str()])?;
        if code != 0 {
            return Ok(code);
        }
    }
    let code = sl::passthrough(&["bookmark", branch_name.as_str()])?;
    if code != 0 {
        return Ok(code);
    }
    sl::passthrough(&["goto", branch_name.as_str()])
}

pub fn run(args: &[String]) -> Result<i32, GitslError> {
    if args.is_empty() {
        eprintln!("error: you must specify a branch, commit, or file to checkout");
        return Ok(1);
    }

    if args.iter().any(|a| a == "-b" || a == "-B") {
        return create_branch(args);
    }

    let (before_sep, after_sep) = split_at_separator(args);
    if !after_sep.is_empty() {
        if let Some(rev) = before_sep.first().filter(|r| sl::is_valid_revision(r)) {
            let mut sl_args = vec!["revert".to_string(), "-r".to_string(), rev.clone()];
            sl_args.extend(after_sep);
            return sl::passthrough(&sl_args);
        }
        let mut sl_args = vec!["revert".to_string()];
        sl_args.extend(after_sep);
        return sl::passthrough(&sl_args);
    }

    let target = &args[0];
    let action = decide(sl::is_valid_revision(target), Path::new(target).exists());

    match action {
        BareAction::Conflict => {
            eprintln!("error: '{}' could be both a ref and a file.", target);
            eprintln!("Use -- to separate paths from revisions:");
            eprintln!("  git checkout -- {}", target);
            Ok(1)
        }
        BareAction::Switch | BareAction::SwitchFallback => {
            let mut sl_args = vec!["goto".to_string()];
            sl_args.extend(translate_goto_flags(args));
            sl::passthrough(&sl_args)
        }
        BareAction::Restore => {
            let mut sl_args = vec!["revert".to_string()];
            sl_args.extend(args.iter().cloned());
            sl::passthrough(&sl_args)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_disambiguation_outcomes() {
        assert_eq!(decide(true, true), BareAction::Conflict);
        assert_eq!(decide(true, false), BareAction::Switch);
        assert_eq!(decide(false, true), BareAction::Restore);
        assert_eq!(decide(false, false), BareAction::SwitchFallback);
    }

    #[test]
    fn test_force_becomes_clean() {
        let translated = translate_goto_flags(&args(&["-f", "main"]));
        assert_eq!(translated, vec!["-C", "main"]);
    }

    #[test]
    fn test_separator_split() {
        let (before, after) = split_at_separator(&args(&["main", "--", "a.txt", "b.txt"]));
        assert_eq!(before, vec!["main"]);
        assert_eq!(after, vec!["a.txt", "b.txt"]);

        let (before, after) = split_at_separator(&args(&["main"]));
        assert_eq!(before, vec!["main"]);
        assert!(after.is_empty());
    }
}
