//! `git show` → `sl show`.
//!
//! Shares the template machinery with `log`: every format-shaping flag
//! resolves to at most one `-T`, chosen by fixed priority (custom pretty,
//! then name-status, name-only, no-patch, oneline).

use crate::core::error::GitslError;
use crate::core::scan::{scan, Effect, Rule};
use crate::core::sl;
use crate::core::templates;

const RULES: &[Rule] = &[
    Rule::flag(&["--stat"], Effect::Emit(&["--stat"])),
    Rule::valued(&["-U", "--unified"], Effect::EmitValue("-U")),
    Rule::flag(&["-w", "--ignore-all-space"], Effect::Emit(&["-w"])),
    Rule::flag(&["--name-only"], Effect::Set("name_only")),
    Rule::flag(&["--name-status"], Effect::Set("name_status")),
    Rule::valued(&["--pretty", "--format"], Effect::Capture("pretty")),
    Rule::flag(&["-s", "--no-patch"], Effect::Set("no_patch")),
    Rule::flag(&["--oneline"], Effect::Set("oneline")),
];

pub fn run(args: &[String]) -> Result<i32, GitslError> {
    let scanned = scan(args, RULES);
    scanned.report_warnings();

    let mut sl_args = vec!["show".to_string()];
    sl_args.extend(scanned.emitted.iter().cloned());

    let custom = scanned.value("pretty").map(templates::resolve_pretty);
    let template = templates::select_show_template(
        custom,
        scanned.set("name_status"),
        scanned.set("name_only"),
        scanned.set("no_patch"),
        scanned.set("oneline"),
    );
    if let Some(template) = template {
        sl_args.push("-T".to_string());
        sl_args.push(template);
    }

    sl_args.extend(scanned.rest);
    sl::passthrough(&sl_args)
}
