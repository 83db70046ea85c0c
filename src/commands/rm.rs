//! `git rm` → `sl remove`.
//!
//! - `-f/--force`, `-q/--quiet` pass through.
//! - `-r/--recursive` is dropped silently: sl remove recurses by default.
//! - `--cached` and `-n/--dry-run` have no equivalents: warn and drop.

use crate::core::error::GitslError;
use crate::core::scan::{scan, Effect, Rule};
use crate::core::sl;

const RULES: &[Rule] = &[
    Rule::flag(&["-f", "--force"], Effect::Emit(&["-f"])),
    Rule::flag(&["-q", "--quiet"], Effect::Emit(&["-q"])),
    Rule::flag(&["-r", "--recursive"], Effect::Ignore),
    Rule::flag(
        &["--cached"],
        Effect::Warn(
            "--cached not supported. Sapling has no staging area. Use 'sl forget' to untrack files.",
        ),
    ),
    Rule::flag(
        &["-n", "--dry-run"],
        Effect::Warn(
            "-n/--dry-run not supported by Sapling remove. Use 'sl status' to see tracked files.",
        ),
    ),
];

pub fn run(args: &[String]) -> Result<i32, GitslError> {
    let scanned = scan(args, RULES);
    scanned.report_warnings();
    let mut sl_args = vec!["remove".to_string()];
    sl_args.extend(scanned.emitted);
    sl_args.extend(scanned.rest);
    sl::passthrough(&sl_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_recursive_dropped_silently() {
        let scanned = scan(&args(&["-r", "dir/"]), RULES);
        assert!(scanned.emitted.is_empty());
        assert_eq!(scanned.rest, vec!["dir/"]);
        assert!(scanned.warnings.is_empty());
    }

    #[test]
    fn test_cached_warns() {
        let scanned = scan(&args(&["--cached", "file.txt"]), RULES);
        assert_eq!(scanned.warnings.len(), 1);
        assert!(scanned.warnings[0].contains("sl forget"));
        assert_eq!(scanned.rest, vec!["file.txt"]);
    }
}
