//! Generic left-to-right flag scanner shared by the command translators.
//!
//! Every translator follows the same shape: walk the argument list once,
//! classify each token against the command's rule table, and bucket the
//! results. The walk is implemented once here so twenty flag grammars cannot
//! drift apart in how they recognize `--flag value`, `--flag=value` and
//! attached short forms like `-U5`.
//!
//! Tokens no rule claims land in `rest` and pass through to the target tool
//! unchanged. A value-taking flag with no value left to consume is dropped.

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Pseudo flag name matching bare numeric tokens like `-5` (git's shorthand
/// for a result limit). The digits become the rule's value.
pub const NUMERIC: &str = "-<N>";

/// What to do with a recognized source flag.
#[derive(Debug, Clone, Copy)]
pub enum Effect {
    /// Replace the flag with fixed target-tool tokens (pass through or
    /// rename).
    Emit(&'static [&'static str]),
    /// Emit the target flag followed by the source flag's value.
    EmitValue(&'static str),
    /// Record a toggle for the translator's assembly phase.
    Set(&'static str),
    /// Record the flag's value under a key; last occurrence wins.
    Capture(&'static str),
    /// Drop the flag and queue a warning.
    Warn(&'static str),
    /// Drop a value-taking flag and queue a warning; `{}` in the message is
    /// replaced with the flag's value.
    WarnValue(&'static str),
    /// Drop the flag silently (the target tool already defaults to this).
    Ignore,
}

/// One entry in a command's flag table. For any single source flag exactly
/// one rule may apply; overlapping rules are a defect in the table.
#[derive(Debug)]
pub struct Rule {
    /// Aliases for this flag, e.g. `&["-n", "--dry-run"]`.
    pub names: &'static [&'static str],
    /// Whether the flag consumes a value (separate token, `--flag=value`,
    /// or attached short form).
    pub takes_value: bool,
    pub effect: Effect,
}

impl Rule {
    pub const fn flag(names: &'static [&'static str], effect: Effect) -> Self {
        Rule {
            names,
            takes_value: false,
            effect,
        }
    }

    pub const fn valued(names: &'static [&'static str], effect: Effect) -> Self {
        Rule {
            names,
            takes_value: true,
            effect,
        }
    }
}

/// Scan outcome: target-tool tokens, untouched passthrough tokens, named
/// toggles/values for the assembly phase, and queued warnings.
#[derive(Debug, Default)]
pub struct Scan {
    pub emitted: Vec<String>,
    pub rest: Vec<String>,
    pub warnings: Vec<String>,
    toggles: HashSet<&'static str>,
    values: HashMap<&'static str, String>,
}

impl Scan {
    pub fn set(&self, key: &str) -> bool {
        self.toggles.contains(key)
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.as_str())
    }

    /// Print all queued warnings to stderr.
    pub fn report_warnings(&self) {
        for warning in &self.warnings {
            crate::core::output::warn(warning);
        }
    }
}

fn numeric_token(token: &str) -> Option<&str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^-(\d+)$").unwrap());
    re.captures(token).map(|_| &token[1..])
}

/// How a token matched a rule name.
enum Hit {
    Exact,
    Attached(String),
    LongEquals(String),
    Numeric(String),
}

fn match_name(token: &str, name: &str, takes_value: bool) -> Option<Hit> {
    if name == NUMERIC {
        return numeric_token(token).map(|digits| Hit::Numeric(digits.to_string()));
    }
    if token == name {
        return Some(Hit::Exact);
    }
    if !takes_value {
        return None;
    }
    if let Some(long) = name.strip_prefix("--") {
        if let Some(value) = token
            .strip_prefix("--")
            .and_then(|t| t.strip_prefix(long))
            .and_then(|t| t.strip_prefix('='))
        {
            return Some(Hit::LongEquals(value.to_string()));
        }
        return None;
    }
    // Attached short form: -U5, -m"msg". Two-character short names only.
    if name.len() == 2 && !token.starts_with("--") && token.len() > 2 {
        if let Some(value) = token.strip_prefix(name) {
            return Some(Hit::Attached(value.to_string()));
        }
    }
    None
}

fn apply(effect: &Effect, value: Option<String>, scan: &mut Scan) {
    match effect {
        Effect::Emit(tokens) => scan.emitted.extend(tokens.iter().map(|t| t.to_string())),
        Effect::EmitValue(flag) => {
            if let Some(v) = value {
                scan.emitted.push(flag.to_string());
                scan.emitted.push(v);
            }
        }
        Effect::Set(key) => {
            scan.toggles.insert(key);
        }
        Effect::Capture(key) => {
            if let Some(v) = value {
                scan.values.insert(key, v);
            }
        }
        Effect::Warn(msg) => scan.warnings.push(msg.to_string()),
        Effect::WarnValue(msg) => {
            scan.warnings
                .push(msg.replace("{}", value.as_deref().unwrap_or("?")));
        }
        Effect::Ignore => {}
    }
}

/// Walk `args` once against `rules`.
pub fn scan(args: &[String], rules: &[Rule]) -> Scan {
    let mut result = Scan::default();
    let mut i = 0;
    while i < args.len() {
        let token = &args[i];
        let mut matched = false;
        'rules: for rule in rules {
            for name in rule.names {
                let hit = match match_name(token, name, rule.takes_value) {
                    Some(hit) => hit,
                    None => continue,
                };
                let value = match hit {
                    Hit::Exact if rule.takes_value => {
                        if i + 1 < args.len() {
                            i += 1;
                            Some(args[i].clone())
                        } else {
                            None
                        }
                    }
                    Hit::Exact => None,
                    Hit::Attached(v) | Hit::LongEquals(v) | Hit::Numeric(v) => Some(v),
                };
                apply(&rule.effect, value, &mut result);
                matched = true;
                break 'rules;
            }
        }
        if !matched {
            result.rest.push(token.clone());
        }
        i += 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_exact_rename() {
        let rules = [Rule::flag(&["--graph"], Effect::Emit(&["-G"]))];
        let scan = scan(&args(&["--graph", "file.txt"]), &rules);
        assert_eq!(scan.emitted, vec!["-G"]);
        assert_eq!(scan.rest, vec!["file.txt"]);
    }

    #[test]
    fn test_value_forms() {
        let rules = [Rule::valued(&["-U", "--unified"], Effect::EmitValue("-U"))];
        for form in [
            vec!["-U", "5"],
            vec!["-U5"],
            vec!["--unified=5"],
            vec!["--unified", "5"],
        ] {
            let scan = scan(&args(&form), &rules);
            assert_eq!(scan.emitted, vec!["-U", "5"], "form: {:?}", form);
            assert!(scan.rest.is_empty());
        }
    }

    #[test]
    fn test_dangling_value_flag_is_dropped() {
        let rules = [Rule::valued(&["-m"], Effect::Capture("message"))];
        let scan = scan(&args(&["-m"]), &rules);
        assert!(scan.value("message").is_none());
        assert!(scan.rest.is_empty());
    }

    #[test]
    fn test_capture_last_wins() {
        let rules = [Rule::valued(&["-n", "--max-count"], Effect::Capture("limit"))];
        let scan = scan(&args(&["-n", "3", "--max-count=7"]), &rules);
        assert_eq!(scan.value("limit"), Some("7"));
    }

    #[test]
    fn test_numeric_shorthand() {
        let rules = [Rule::valued(&[NUMERIC], Effect::Capture("limit"))];
        let scan = scan(&args(&["-5", "-x"]), &rules);
        assert_eq!(scan.value("limit"), Some("5"));
        assert_eq!(scan.rest, vec!["-x"]);
    }

    #[test]
    fn test_warn_and_ignore() {
        let rules = [
            Rule::flag(&["--no-tags"], Effect::Warn("no tags here")),
            Rule::flag(&["-H"], Effect::Ignore),
        ];
        let scan = scan(&args(&["--no-tags", "-H", "path"]), &rules);
        assert_eq!(scan.warnings, vec!["no tags here"]);
        assert_eq!(scan.rest, vec!["path"]);
    }

    #[test]
    fn test_warn_value_interpolates() {
        let rules = [Rule::valued(&["-L"], Effect::WarnValue("range {} unsupported"))];
        let scan = scan(&args(&["-L", "10,20"]), &rules);
        assert_eq!(scan.warnings, vec!["range 10,20 unsupported"]);
        let scan = super::scan(&args(&["-L10,20"]), &rules);
        assert_eq!(scan.warnings, vec!["range 10,20 unsupported"]);
    }

    #[test]
    fn test_toggle_and_passthrough_order() {
        let rules = [Rule::flag(&["-s", "--short", "--porcelain"], Effect::Set("porcelain"))];
        let scan = scan(&args(&["a.txt", "--porcelain", "b.txt"]), &rules);
        assert!(scan.set("porcelain"));
        assert_eq!(scan.rest, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_long_flag_not_matched_by_short_prefix() {
        // "-n" must not swallow "--no-merges".
        let rules = [Rule::valued(&["-n"], Effect::Capture("limit"))];
        let scan = scan(&args(&["--no-merges"]), &rules);
        assert!(scan.value("limit").is_none());
        assert_eq!(scan.rest, vec!["--no-merges"]);
    }
}
