//! `git mv` → `sl rename`.
//!
//! - `-f/--force`, `-n/--dry-run`, `-v/--verbose` pass through.
//! - `-k` (skip move errors) has no sl equivalent: warn and drop.

use crate::core::error::GitslError;
use crate::core::scan::{scan, Effect, Rule};
use crate::core::sl;

const RULES: &[Rule] = &[
    Rule::flag(&["-f", "--force"], Effect::Emit(&["-f"])),
    Rule::flag(&["-n", "--dry-run"], Effect::Emit(&["-n"])),
    Rule::flag(&["-v", "--verbose"], Effect::Emit(&["-v"])),
    Rule::flag(
        &["-k"],
        Effect::Warn("-k (skip errors) not supported by Sapling rename"),
    ),
];

pub fn run(args: &[String]) -> Result<i32, GitslError> {
    let scanned = scan(args, RULES);
    scanned.report_warnings();
    let mut sl_args = vec!["rename".to_string()];
    sl_args.extend(scanned.emitted);
    sl_args.extend(scanned.rest);
    sl::passthrough(&sl_args)
}
