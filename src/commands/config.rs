//! `git config` → `sl config`.
//!
//! - `--list/-l` → bare `sl config` (shows everything).
//! - `--get` is dropped: `sl config <key>` already prints the value.
//! - `--unset` → `--delete`, `--global` → `--user`, `--show-origin` →
//!   `--debug`; `--local`/`--system` pass through.
//! - Setting a key with no explicit scope defaults to `--local`, matching
//!   git's repository-level default.

use crate::core::error::GitslError;
use crate::core::scan::{scan, Effect, Rule};
use crate::core::sl;

const RULES: &[Rule] = &[
    Rule::flag(&["--list", "-l"], Effect::Set("list")),
    Rule::flag(&["--get"], Effect::Ignore),
    Rule::flag(&["--unset"], Effect::Emit(&["--delete"])),
    Rule::flag(&["--global"], Effect::Emit(&["--user"])),
    Rule::flag(&["--local"], Effect::Emit(&["--local"])),
    Rule::flag(&["--system"], Effect::Emit(&["--system"])),
    Rule::flag(&["--show-origin"], Effect::Emit(&["--debug"])),
    Rule::flag(
        &["--all"],
        Effect::Warn("--all (multi-valued key retrieval) not supported by Sapling config"),
    ),
];

fn has_scope(emitted: &[String]) -> bool {
    emitted
        .iter()
        .any(|a| a == "--user" || a == "--local" || a == "--system")
}

pub fn run(args: &[String]) -> Result<i32, GitslError> {
    let scanned = scan(args, RULES);
    scanned.report_warnings();

    if scanned.set("list") {
        let mut sl_args = vec!["config".to_string()];
        sl_args.extend(scanned.emitted);
        return sl::passthrough(&sl_args);
    }

    let mut sl_args = vec!["config".to_string()];
    let mut emitted = scanned.emitted;
    let positional = scanned.rest.iter().filter(|a| !a.starts_with('-')).count();
    if positional >= 2 && !has_scope(&emitted) {
        emitted.push("--local".to_string());
    }
    sl_args.extend(emitted);
    sl_args.extend(scanned.rest);
    sl::passthrough(&sl_args)
}
