//! `git log` → `sl log`.
//!
//! Four surface syntaxes (`-5`, `-n 5`, `-n5`, `--max-count=5`) feed one
//! limit value, last one wins. All template-shaping flags collapse into at
//! most one `-T`, and the since/until pair builds a single `-d` range
//! expression instead of two conflicting filters.

use crate::core::error::GitslError;
use crate::core::scan::{scan, Effect, Rule, NUMERIC};
use crate::core::sl;
use crate::core::templates;

const RULES: &[Rule] = &[
    Rule::flag(&["--oneline"], Effect::Set("oneline")),
    Rule::valued(&[NUMERIC], Effect::Capture("limit")),
    Rule::valued(&["-n", "--max-count"], Effect::Capture("limit")),
    Rule::flag(&["--graph"], Effect::Emit(&["-G"])),
    Rule::flag(&["--stat"], Effect::Emit(&["--stat"])),
    Rule::flag(&["--patch", "-p"], Effect::Emit(&["-p"])),
    Rule::flag(&["--no-merges"], Effect::Emit(&["--no-merges"])),
    Rule::flag(&["--all"], Effect::Emit(&["--all"])),
    Rule::flag(&["--follow"], Effect::Emit(&["-f"])),
    Rule::valued(&["--author"], Effect::EmitValue("-u")),
    Rule::valued(&["--grep"], Effect::EmitValue("-k")),
    Rule::valued(&["--since", "--after"], Effect::Capture("since")),
    Rule::valued(&["--until", "--before"], Effect::Capture("until")),
    Rule::flag(&["--name-only"], Effect::Set("name_only")),
    Rule::flag(&["--name-status"], Effect::Set("name_status")),
    Rule::flag(&["--decorate"], Effect::Set("decorate")),
    Rule::valued(&["--pretty", "--format"], Effect::Capture("pretty")),
    Rule::valued(
        &["-S"],
        Effect::WarnValue("-S '{}' (pickaxe search) not supported by Sapling log."),
    ),
    Rule::valued(
        &["-G"],
        Effect::WarnValue("-G '{}' (pickaxe search) not supported by Sapling log."),
    ),
    Rule::flag(
        &["--first-parent"],
        Effect::Warn("--first-parent not supported by Sapling log."),
    ),
    Rule::flag(&["--reverse"], Effect::Set("reverse")),
];

/// `--decorate=short` and friends carry a style sl cannot honor; fold them
/// onto the bare flag.
fn normalize(arg: &str) -> String {
    if arg.strip_prefix("--decorate").is_some_and(|r| r.starts_with('=')) {
        "--decorate".to_string()
    } else {
        arg.to_string()
    }
}

pub fn run(args: &[String]) -> Result<i32, GitslError> {
    let normalized: Vec<String> = args.iter().map(|a| normalize(a)).collect();
    let scanned = scan(&normalized, RULES);
    scanned.report_warnings();

    let mut sl_args = vec!["log".to_string()];
    sl_args.extend(scanned.emitted.iter().cloned());

    let custom = scanned.value("pretty").map(templates::resolve_pretty);
    let template = templates::select_log_template(
        custom,
        scanned.set("name_status"),
        scanned.set("name_only"),
        scanned.set("decorate"),
        scanned.set("oneline"),
    );
    if let Some(template) = template {
        sl_args.push("-T".to_string());
        sl_args.push(template);
    }

    if let Some(date) = templates::date_filter(scanned.value("since"), scanned.value("until")) {
        sl_args.push("-d".to_string());
        sl_args.push(date);
    }

    if let Some(limit) = scanned.value("limit") {
        sl_args.push("-l".to_string());
        sl_args.push(limit.to_string());
    }

    if scanned.set("reverse") {
        if scanned.rest.iter().any(|a| a == "-r") {
            crate::core::output::warn("--reverse ignored: an explicit revset was given.");
        } else {
            sl_args.push("-r".to_string());
            sl_args.push("reverse(all())".to_string());
        }
    }

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
    fn test_limit_forms_agree() {
        for form in [
            vec!["-5"],
            vec!["-n", "5"],
            vec!["-n5"],
            vec!["--max-count=5"],
        ] {
            let scanned = scan(&args(&form), RULES);
            assert_eq!(scanned.value("limit"), Some("5"), "form: {:?}", form);
        }
    }

    #[test]
    fn test_last_limit_wins() {
        let scanned = scan(&args(&["-3", "--max-count=9"]), RULES);
        assert_eq!(scanned.value("limit"), Some("9"));
    }

    #[test]
    fn test_graph_is_not_pickaxe() {
        let scanned = scan(&args(&["--graph"]), RULES);
        assert_eq!(scanned.emitted, vec!["-G"]);
        assert!(scanned.warnings.is_empty());

        let scanned = scan(&args(&["-Gfoo"]), RULES);
        assert!(scanned.emitted.is_empty());
        assert_eq!(scanned.warnings.len(), 1);
        assert!(scanned.warnings[0].contains("foo"));
    }

    #[test]
    fn test_author_and_grep_renames() {
        let scanned = scan(&args(&["--author=jo", "--grep", "fix"]), RULES);
        assert_eq!(scanned.emitted, vec!["-u", "jo", "-k", "fix"]);
    }

    #[test]
    fn test_since_until_captured() {
        let scanned = scan(&args(&["--since", "2024-01-01", "--before=2024-06-01"]), RULES);
        assert_eq!(scanned.value("since"), Some("2024-01-01"));
        assert_eq!(scanned.value("until"), Some("2024-06-01"));
    }

    #[test]
    fn test_decorate_style_normalized() {
        assert_eq!(normalize("--decorate=short"), "--decorate");
        assert_eq!(normalize("--decorate"), "--decorate");
        assert_eq!(normalize("--decorated"), "--decorated");
    }

    #[test]
    fn test_pickaxe_warned_not_forwarded() {
        let scanned = scan(&args(&["-Sneedle", "file.rs"]), RULES);
        assert!(scanned.emitted.is_empty());
        assert_eq!(scanned.rest, vec!["file.rs"]);
        assert!(scanned.warnings[0].contains("needle"));
    }
}
