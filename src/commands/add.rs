//! `git add` → `sl add` / `sl addremove` / deletion marking.
//!
//! The dangerous pair: `-A/--all` reconciles everything (`addremove`), but
//! `-u/--update` may only touch files git already tracks. sl auto-tracks
//! modifications, so update mode reduces to finding tracked-but-deleted
//! files and marking exactly those for removal; it must never stage a
//! purely untracked file.

use crate::core::error::GitslError;
use crate::core::output;
use crate::core::scan::{scan, Effect, Rule, Scan};
use crate::core::sl;

const RULES: &[Rule] = &[
    Rule::flag(&["-n", "--dry-run"], Effect::Set("dry_run")),
    Rule::flag(&["-f", "--force"], Effect::Set("force")),
    Rule::flag(&["-v", "--verbose"], Effect::Set("verbose")),
    Rule::flag(&["-u", "--update"], Effect::Set("update")),
    Rule::flag(&["-A", "--all"], Effect::Set("all")),
];

/// Mark tracked-but-deleted files for removal; dry-run previews instead.
fn run_update(pathspec: &[String], dry_run: bool, verbose: bool) -> Result<i32, GitslError> {
    let deleted = sl::deleted_files(pathspec);
    if deleted.is_empty() {
        if verbose {
            println!("No deleted files to mark for removal.");
        }
        return Ok(0);
    }

    if dry_run {
        for file in &deleted {
            println!("remove '{}'", file);
        }
        return Ok(0);
    }

    let mut sl_args = vec!["remove".to_string(), "--mark".to_string()];
    sl_args.extend(deleted.iter().cloned());
    if verbose {
        let captured = sl::captured(&sl_args)?;
        if captured.success() {
            for file in &deleted {
                println!("remove '{}'", file);
            }
        }
        return Ok(captured.code);
    }
    sl::passthrough(&sl_args)
}

/// Run an `add`/`addremove` invocation, echoing per-file lines when the
/// user asked for a preview or verbose output.
fn run_tracking(
    subcommand: &str,
    files: &[String],
    dry_run: bool,
    verbose: bool,
    quote_lines: bool,
) -> Result<i32, GitslError> {
    let mut sl_args = vec![subcommand.to_string()];
    sl_args.extend(files.iter().cloned());
    if dry_run {
        sl_args.push("-n".to_string());
    }

    if verbose || dry_run {
        let captured = sl::captured(&sl_args)?;
        for line in captured.stdout.lines() {
            if line.is_empty() {
                continue;
            }
            if quote_lines {
                println!("add '{}'", line);
            } else {
                println!("{}", line);
            }
        }
        return Ok(captured.code);
    }
    sl::passthrough(&sl_args)
}

fn mode(scanned: &Scan) -> &'static str {
    if scanned.set("update") {
        "update"
    } else if scanned.set("all") {
        "all"
    } else {
        "add"
    }
}

pub fn run(args: &[String]) -> Result<i32, GitslError> {
    let scanned = scan(args, RULES);
    let dry_run = scanned.set("dry_run");
    let verbose = scanned.set("verbose");

    if scanned.set("force") {
        output::warn(
            "-f/--force not directly supported. Sapling cannot force-add ignored files. \
             Consider updating your .gitignore instead.",
        );
    }

    match mode(&scanned) {
        "update" => run_update(&scanned.rest, dry_run, verbose),
        "all" => run_tracking("addremove", &scanned.rest, dry_run, verbose, false),
        _ => run_tracking("add", &scanned.rest, dry_run, verbose, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_update_mode_wins_over_all() {
        let scanned = scan(&args(&["-u", "-A"]), RULES);
        assert_eq!(mode(&scanned), "update");
    }

    #[test]
    fn test_all_mode() {
        let scanned = scan(&args(&["--all", "src/"]), RULES);
        assert_eq!(mode(&scanned), "all");
        assert_eq!(scanned.rest, vec!["src/"]);
    }

    #[test]
    fn test_plain_add_keeps_paths() {
        let scanned = scan(&args(&["a.txt", "-n", "b.txt"]), RULES);
        assert_eq!(mode(&scanned), "add");
        assert!(scanned.set("dry_run"));
        assert_eq!(scanned.rest, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_force_is_toggle_not_passthrough() {
        let scanned = scan(&args(&["-f", "ignored.log"]), RULES);
        assert!(scanned.set("force"));
        assert_eq!(scanned.rest, vec!["ignored.log"]);
    }
}
