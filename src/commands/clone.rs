//! `git clone` → `sl clone`.
//!
//! - `-b/--branch <name>` → `-u <name>` (update to bookmark after clone).
//! - `-n/--no-checkout` → `-U`.
//! - `-q`, `-v` pass through.
//! - depth/single-branch/origin/submodule/tag options have no sl meaning:
//!   warn and drop (values consumed where the flag takes one).

use crate::core::error::GitslError;
use crate::core::scan::{scan, Effect, Rule};
use crate::core::sl;

const RULES: &[Rule] = &[
    Rule::valued(&["-b", "--branch"], Effect::EmitValue("-u")),
    Rule::flag(&["-n", "--no-checkout"], Effect::Emit(&["-U"])),
    Rule::flag(&["-q", "--quiet"], Effect::Emit(&["-q"])),
    Rule::flag(&["-v", "--verbose"], Effect::Emit(&["-v"])),
    Rule::valued(
        &["--depth"],
        Effect::Warn("--depth has no effect in Sapling (uses lazy fetching by default)"),
    ),
    Rule::flag(
        &["--single-branch"],
        Effect::Warn("--single-branch not applicable to Sapling"),
    ),
    Rule::valued(
        &["-o", "--origin"],
        Effect::Warn("custom remote name not supported. Sapling uses 'default' remote."),
    ),
    Rule::flag(
        &["--recursive", "--recurse-submodules"],
        Effect::Warn("submodules not supported by Sapling"),
    ),
    Rule::flag(&["--no-tags"], Effect::Warn("--no-tags not applicable to Sapling")),
];

pub fn run(args: &[String]) -> Result<i32, GitslError> {
    let scanned = scan(args, RULES);
    scanned.report_warnings();
    let mut sl_args = vec!["clone".to_string()];
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
    fn test_branch_becomes_update_bookmark() {
        for form in [vec!["-b", "main", "url"], vec!["--branch=main", "url"]] {
            let scanned = scan(&args(&form), RULES);
            assert_eq!(scanned.emitted, vec!["-u", "main"], "form: {:?}", form);
            assert_eq!(scanned.rest, vec!["url"]);
        }
    }

    #[test]
    fn test_depth_consumes_value_and_warns() {
        let scanned = scan(&args(&["--depth", "1", "url"]), RULES);
        assert!(scanned.emitted.is_empty());
        assert_eq!(scanned.rest, vec!["url"]);
        assert_eq!(scanned.warnings.len(), 1);
    }

    #[test]
    fn test_no_checkout() {
        let scanned = scan(&args(&["--no-checkout", "url", "dest"]), RULES);
        assert_eq!(scanned.emitted, vec!["-U"]);
        assert_eq!(scanned.rest, vec!["url", "dest"]);
    }
}
