//! `git clean` → `sl purge`.
//!
//! git refuses to clean without `-f` or `-n`; the shim enforces the same
//! guard with git's own fatal message and exit code before anything reaches
//! the target tool. Combined short flags (`-fd`, `-fn`) are recognized the
//! way git accepts them.

use crate::core::error::GitslError;
use crate::core::output;
use crate::core::sl;

/// Does any combined short-flag token contain `c`? (`-fd` counts for both
/// `f` and `d`.)
fn has_short(args: &[String], c: char) -> bool {
    args.iter()
        .any(|a| a.starts_with('-') && !a.starts_with("--") && a.contains(c))
}

struct CleanFlags {
    force: bool,
    dry_run: bool,
    dirs: bool,
    ignored: bool,
    only_ignored: bool,
}

fn read_flags(args: &[String]) -> CleanFlags {
    CleanFlags {
        force: has_short(args, 'f') || args.iter().any(|a| a == "--force"),
        dry_run: has_short(args, 'n') || args.iter().any(|a| a == "--dry-run"),
        dirs: has_short(args, 'd'),
        ignored: has_short(args, 'x'),
        only_ignored: has_short(args, 'X'),
    }
}

pub fn run(args: &[String]) -> Result<i32, GitslError> {
    let flags = read_flags(args);

    if !flags.force && !flags.dry_run {
        eprintln!("fatal: clean.requireForce is true and -f not given: refusing to clean");
        return Ok(128);
    }

    let mut sl_args: Vec<String> = Vec::new();
    if flags.dry_run {
        sl_args.push("--print".to_string());
    }
    if flags.dirs {
        sl_args.push("--files".to_string());
        sl_args.push("--dirs".to_string());
    }
    if flags.ignored {
        sl_args.push("--ignored".to_string());
    }
    if flags.only_ignored {
        output::warn(
            "-X (only ignored files) not directly supported. \
             Using --ignored which removes untracked and ignored files.",
        );
        if !sl_args.iter().any(|a| a == "--ignored") {
            sl_args.push("--ignored".to_string());
        }
    }

    let mut filtered: Vec<String> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-e" {
            if i + 1 < args.len() {
                i += 1;
                sl_args.push("-X".to_string());
                sl_args.push(args[i].clone());
            }
        } else if let Some(pattern) = arg.strip_prefix("-e").filter(|p| !p.is_empty() && !arg.starts_with("--")) {
            sl_args.push("-X".to_string());
            sl_args.push(pattern.to_string());
        } else if arg.starts_with('-') && !arg.starts_with("--") {
            // Strip the consumed short flags; anything left passes through.
            let leftover: String = arg.chars().filter(|c| !"fdnxX".contains(*c)).collect();
            if leftover != "-" && !leftover.is_empty() {
                filtered.push(leftover);
            }
        } else if arg == "--force" || arg == "--dry-run" {
            // Already consumed.
        } else {
            filtered.push(arg.clone());
        }
        i += 1;
    }

    let mut cmd = vec!["purge".to_string()];
    cmd.extend(sl_args);
    cmd.extend(filtered);
    sl::passthrough(&cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_combined_short_flags_detected() {
        let flags = read_flags(&args(&["-fd"]));
        assert!(flags.force);
        assert!(flags.dirs);
        assert!(!flags.dry_run);
    }

    #[test]
    fn test_long_force_detected() {
        let flags = read_flags(&args(&["--force"]));
        assert!(flags.force);
    }

    #[test]
    fn test_refuses_without_force_or_dry_run() {
        let flags = read_flags(&args(&["-d"]));
        assert!(!flags.force && !flags.dry_run);
    }

    #[test]
    fn test_only_ignored_flag_detected() {
        let flags = read_flags(&args(&["-fX"]));
        assert!(flags.only_ignored);
        assert!(flags.force);
        assert!(!flags.ignored);
    }
}
