//! `git grep` → `sl grep`.
//!
//! Same-letter collisions are the trap here: git's `-v` (invert) is sl's
//! `-V`, git's `-h` (suppress filename) is sl's help flag, so neither may be
//! forwarded as-is.

use crate::core::error::GitslError;
use crate::core::scan::{scan, Effect, Rule};
use crate::core::sl;

const RULES: &[Rule] = &[
    Rule::flag(&["-n", "--line-number"], Effect::Emit(&["-n"])),
    Rule::flag(&["-i", "--ignore-case"], Effect::Emit(&["-i"])),
    Rule::flag(&["-l", "--files-with-matches"], Effect::Emit(&["-l"])),
    Rule::flag(&["-w", "--word-regexp"], Effect::Emit(&["-w"])),
    Rule::flag(&["-F", "--fixed-strings"], Effect::Emit(&["-F"])),
    // sl spells inverted match with an uppercase V.
    Rule::flag(&["-v", "--invert-match"], Effect::Emit(&["-V"])),
    Rule::valued(&["-A"], Effect::EmitValue("-A")),
    Rule::valued(&["-B"], Effect::EmitValue("-B")),
    Rule::valued(&["-C"], Effect::EmitValue("-C")),
    Rule::flag(
        &["-c", "--count"],
        Effect::Warn("-c/--count not supported by Sapling grep. Consider: sl grep <pattern> | wc -l"),
    ),
    // sl grep -h shows help, not "suppress filename".
    Rule::flag(
        &["-h"],
        Effect::Warn("-h (suppress filename) not supported by Sapling grep. Filenames will be shown."),
    ),
    // Filenames are already shown by default.
    Rule::flag(&["-H"], Effect::Ignore),
    Rule::flag(
        &["-o", "--only-matching"],
        Effect::Warn(
            "-o/--only-matching not supported by Sapling grep. Consider: sl grep <pattern> | grep -o <pattern>",
        ),
    ),
    Rule::flag(
        &["-q", "--quiet"],
        Effect::Warn(
            "-q/--quiet not supported by Sapling grep. Use exit code from: sl grep <pattern> | wc -l",
        ),
    ),
];

pub fn run(args: &[String]) -> Result<i32, GitslError> {
    let scanned = scan(args, RULES);
    scanned.report_warnings();
    let mut sl_args = vec!["grep".to_string()];
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
    fn test_invert_match_becomes_uppercase_v() {
        let scanned = scan(&args(&["-v", "pattern"]), RULES);
        assert_eq!(scanned.emitted, vec!["-V"]);
        assert_eq!(scanned.rest, vec!["pattern"]);
    }

    #[test]
    fn test_context_flags_both_forms() {
        let scanned = scan(&args(&["-A5", "-B", "3", "-C2", "pat"]), RULES);
        assert_eq!(scanned.emitted, vec!["-A", "5", "-B", "3", "-C", "2"]);
        assert_eq!(scanned.rest, vec!["pat"]);
    }

    #[test]
    fn test_suppress_filename_never_forwarded() {
        let scanned = scan(&args(&["-h", "pat"]), RULES);
        assert!(scanned.emitted.is_empty());
        assert_eq!(scanned.warnings.len(), 1);
    }

    #[test]
    fn test_force_filename_is_silent_noop() {
        let scanned = scan(&args(&["-H", "pat"]), RULES);
        assert!(scanned.emitted.is_empty());
        assert!(scanned.warnings.is_empty());
        assert_eq!(scanned.rest, vec!["pat"]);
    }
}
