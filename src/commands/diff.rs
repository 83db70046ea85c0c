//! `git diff` → `sl diff`.
//!
//! `--name-only`/`--name-status` branch on whether a commit-looking argument
//! is present. The working-tree case is emulated through `sl status -mard`
//! because sl diff has no filename-only mode there; the historical case
//! passes through with a note, since no reliable emulation exists.

use crate::core::error::GitslError;
use crate::core::output;
use crate::core::scan::{scan, Effect, Rule};
use crate::core::sl;

const RULES: &[Rule] = &[
    Rule::flag(&["--stat"], Effect::Emit(&["--stat"])),
    Rule::flag(&["-w", "--ignore-all-space"], Effect::Emit(&["-w"])),
    Rule::flag(&["-b", "--ignore-space-change"], Effect::Emit(&["-b"])),
    Rule::valued(&["-U", "--unified"], Effect::EmitValue("-U")),
    Rule::flag(&["--name-only"], Effect::Set("name_only")),
    Rule::flag(&["--name-status"], Effect::Set("name_status")),
    Rule::flag(
        &["--staged", "--cached"],
        Effect::Warn("Sapling has no staging area. Use 'sl diff' to see all uncommitted changes."),
    ),
    Rule::flag(
        &["--raw"],
        Effect::Warn("--raw format not supported. Use 'sl status' for file status information."),
    ),
    Rule::flag(
        &["-M", "--find-renames"],
        Effect::Warn(
            "Sapling doesn't support automatic rename detection (-M). Use 'sl mv' to track renames before committing.",
        ),
    ),
    Rule::flag(
        &["-C", "--find-copies"],
        Effect::Warn(
            "Sapling doesn't support automatic copy detection (-C). Use 'sl copy' to track copies before committing.",
        ),
    ),
    Rule::flag(
        &["--word-diff"],
        Effect::Warn(
            "Sapling doesn't support word-level diff (--word-diff). Consider using external tools like 'diff-so-fancy' or 'delta'.",
        ),
    ),
    Rule::flag(
        &["--color-moved"],
        Effect::Warn("Sapling doesn't support --color-moved highlighting."),
    ),
];

/// Fold similarity/value-carrying variants onto their base flag so the rule
/// table can stay exact-match: `-M90` → `-M`, `--word-diff=color` →
/// `--word-diff`.
fn normalize(arg: &str) -> String {
    for base in ["-M", "-C"] {
        if let Some(rest) = arg.strip_prefix(base) {
            if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) {
                return base.to_string();
            }
        }
    }
    for base in ["--word-diff", "--color-moved"] {
        if arg.strip_prefix(base).is_some_and(|r| r.starts_with('=')) {
            return base.to_string();
        }
    }
    arg.to_string()
}

/// Heuristic: a passthrough token that is neither a flag nor a relative
/// path is probably a commit reference.
fn looks_like_commit(arg: &str) -> bool {
    !arg.starts_with('-') && !arg.starts_with('.')
}

pub fn run(args: &[String]) -> Result<i32, GitslError> {
    let normalized: Vec<String> = args.iter().map(|a| normalize(a)).collect();
    let scanned = scan(&normalized, RULES);
    scanned.report_warnings();

    let name_only = scanned.set("name_only");
    let name_status = scanned.set("name_status");
    let has_commits = scanned.rest.iter().any(|a| looks_like_commit(a));

    if name_only || name_status {
        if has_commits {
            output::note("--name-only/--name-status for commit diff may differ from git.");
        } else {
            let mut status_args = vec!["status".to_string(), "-mard".to_string()];
            if name_only {
                status_args.push("--no-status".to_string());
            }
            return sl::passthrough(&status_args);
        }
    }

    let mut sl_args = vec!["diff".to_string()];
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
    fn test_unified_context_forms() {
        for form in [vec!["-U5"], vec!["-U", "5"], vec!["--unified=5"]] {
            let scanned = scan(&args(&form), RULES);
            assert_eq!(scanned.emitted, vec!["-U", "5"], "form: {:?}", form);
        }
    }

    #[test]
    fn test_rename_detection_normalized_and_warned() {
        assert_eq!(normalize("-M90"), "-M");
        assert_eq!(normalize("-C75"), "-C");
        assert_eq!(normalize("-U5"), "-U5");
        assert_eq!(normalize("--word-diff=color"), "--word-diff");
        let scanned = scan(&args(&["-M"]), RULES);
        assert_eq!(scanned.warnings.len(), 1);
        assert!(scanned.emitted.is_empty());
    }

    #[test]
    fn test_commit_heuristic() {
        assert!(looks_like_commit("abc123"));
        assert!(looks_like_commit("main"));
        assert!(!looks_like_commit("-p"));
        assert!(!looks_like_commit("./src"));
        assert!(!looks_like_commit("."));
    }

    #[test]
    fn test_staged_dropped_with_warning() {
        let scanned = scan(&args(&["--cached"]), RULES);
        assert!(scanned.emitted.is_empty());
        assert_eq!(scanned.warnings.len(), 1);
    }
}
