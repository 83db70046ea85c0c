//! `git blame` → `sl annotate`.
//!
//! Two same-letter collisions make naive forwarding dangerous:
//! - git `-b` means "ignore space change"; sl `-b` means "blank SHA for
//!   boundary commits". Translated to `--ignore-space-change`, never
//!   forwarded.
//! - git `-l` means "long hashes"; sl `-l` means "line numbers". Dropped
//!   with a warning, never forwarded.

use crate::core::error::GitslError;
use crate::core::scan::{scan, Effect, Rule};
use crate::core::sl;

const RULES: &[Rule] = &[
    Rule::flag(&["-w", "--ignore-all-space"], Effect::Emit(&["-w"])),
    Rule::flag(&["-b"], Effect::Emit(&["--ignore-space-change"])),
    Rule::valued(
        &["-L"],
        Effect::WarnValue(
            "-L {} line range not supported by Sapling annotate. Consider: sl annotate <file> | sed -n '{}p'",
        ),
    ),
    Rule::flag(
        &["-e", "--show-email"],
        Effect::Warn(
            "-e/--show-email not supported by Sapling annotate. Author names are shown by default.",
        ),
    ),
    Rule::flag(
        &["-p", "--porcelain"],
        Effect::Warn(
            "-p/--porcelain output not supported by Sapling annotate. Use -T template for custom output format.",
        ),
    ),
    Rule::flag(
        &["-l"],
        Effect::Warn(
            "-l (long revision hash) not supported by Sapling annotate. Sapling shows short hashes by default.",
        ),
    ),
    Rule::flag(&["-n", "--show-number"], Effect::Emit(&["-n"])),
];

pub fn run(args: &[String]) -> Result<i32, GitslError> {
    let scanned = scan(args, RULES);
    scanned.report_warnings();
    let mut sl_args = vec!["annotate".to_string()];
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
    fn test_space_change_flag_is_respelled() {
        let scanned = scan(&args(&["-b", "file.rs"]), RULES);
        assert_eq!(scanned.emitted, vec!["--ignore-space-change"]);
        assert!(!scanned.emitted.contains(&"-b".to_string()));
    }

    #[test]
    fn test_long_hash_flag_never_forwarded() {
        let scanned = scan(&args(&["-l", "file.rs"]), RULES);
        assert!(scanned.emitted.is_empty());
        assert_eq!(scanned.rest, vec!["file.rs"]);
        assert_eq!(scanned.warnings.len(), 1);
    }

    #[test]
    fn test_line_range_warning_carries_range() {
        let scanned = scan(&args(&["-L", "10,20", "file.rs"]), RULES);
        assert_eq!(scanned.warnings.len(), 1);
        assert!(scanned.warnings[0].contains("10,20"));
        let scanned = scan(&args(&["-L10,20", "file.rs"]), RULES);
        assert!(scanned.warnings[0].contains("10,20"));
    }

    #[test]
    fn test_show_number_passes() {
        let scanned = scan(&args(&["-n", "-w", "file.rs"]), RULES);
        assert_eq!(scanned.emitted, vec!["-n", "-w"]);
    }
}
