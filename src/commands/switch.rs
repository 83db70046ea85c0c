//! `git switch` → `sl goto`.
//!
//! `-c/--create <name>` creates a bookmark; creating one activates it, so no
//! separate goto is needed. Everything else is a plain goto.

use crate::core::error::GitslError;
use crate::core::sl;

/// Extract the bookmark name following `-c`/`--create`, if present.
fn create_target(args: &[String]) -> Option<&str> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "-c" || arg == "--create" {
            return iter.next().map(|s| s.as_str());
        }
    }
    None
}

pub fn run(args: &[String]) -> Result<i32, GitslError> {
    if let Some(name) = create_target(args) {
        return sl::passthrough(&["bookmark", name]);
    }
    let mut sl_args = vec!["goto".to_string()];
    sl_args.extend(args.iter().cloned());
    sl::passthrough(&sl_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_create_target_found() {
        assert_eq!(create_target(&args(&["-c", "feature"])), Some("feature"));
        assert_eq!(create_target(&args(&["--create", "x"])), Some("x"));
    }

    #[test]
    fn test_create_target_absent_or_dangling() {
        assert_eq!(create_target(&args(&["main"])), None);
        assert_eq!(create_target(&args(&["-c"])), None);
    }
}
