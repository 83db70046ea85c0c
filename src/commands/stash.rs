//! `git stash` → `sl shelve` / `sl unshelve`.
//!
//! git's `stash@{n}` index syntax has no sl counterpart; it is resolved
//! against a fresh `sl shelve --list` query on every use (the list can
//! change between commands, so nothing is cached). An out-of-range index is
//! a user-facing error, not a crash. `drop` with no argument targets the
//! most recent entry explicitly, because sl's delete requires a name.

use crate::core::error::GitslError;
use crate::core::output;
use crate::core::sl;
use regex::Regex;
use std::sync::OnceLock;

/// Parse `stash@{n}` into its index. Non-stash syntax yields `None`.
fn parse_stash_index(arg: &str) -> Option<usize> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^stash@\{(\d+)\}$").unwrap());
    re.captures(arg)?.get(1)?.as_str().parse().ok()
}

/// Index into a most-recent-first shelve name list.
fn resolve_index(names: &[String], index: usize) -> Option<String> {
    names.get(index).cloned()
}

/// Resolve one argument: `stash@{n}` becomes the nth shelve name, anything
/// else passes through. `None` means the error was already reported.
fn translate_ref(arg: &str) -> Option<String> {
    let index = match parse_stash_index(arg) {
        Some(index) => index,
        None => return Some(arg.to_string()),
    };
    match resolve_index(&sl::shelve_names(), index) {
        Some(name) => Some(name),
        None => {
            eprintln!("error: stash@{{{}}} does not exist", index);
            None
        }
    }
}

fn translate_all(args: &[String]) -> Option<Vec<String>> {
    args.iter().map(|a| translate_ref(a)).collect()
}

fn most_recent() -> Option<String> {
    sl::shelve_names().into_iter().next()
}

fn no_entries() -> i32 {
    eprintln!("No stash entries found.");
    1
}

fn handle_push(args: &[String]) -> Result<i32, GitslError> {
    let mut sl_args = vec!["shelve".to_string()];
    let mut remaining = Vec::new();
    let mut quiet = false;
    let mut keep_index = false;
    let mut all_files = false;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-u" | "--include-untracked" => sl_args.push("-u".to_string()),
            "-m" | "--message" => {
                if i + 1 < args.len() {
                    i += 1;
                    sl_args.push("-m".to_string());
                    sl_args.push(args[i].clone());
                }
            }
            "-p" | "--patch" => sl_args.push("-i".to_string()),
            "-k" | "--keep-index" => keep_index = true,
            "-a" | "--all" => {
                all_files = true;
                sl_args.push("-u".to_string());
            }
            "-q" | "--quiet" => quiet = true,
            _ => remaining.push(args[i].clone()),
        }
        i += 1;
    }

    if keep_index {
        output::warn(
            "-k/--keep-index has no effect. Sapling has no staging area; all changes are shelved.",
        );
    }
    if all_files {
        output::note("-a/--all includes untracked files. Ignored files may not be included.");
    }

    sl_args.extend(remaining);
    if quiet {
        return sl::quiet(&sl_args);
    }
    sl::passthrough(&sl_args)
}

fn handle_pop(args: &[String], keep: bool) -> Result<i32, GitslError> {
    let translated = match translate_all(args) {
        Some(t) => t,
        None => return Ok(1),
    };
    let mut sl_args = vec!["unshelve".to_string()];
    if keep {
        sl_args.push("--keep".to_string());
    }
    sl_args.extend(translated);
    sl::passthrough(&sl_args)
}

fn handle_show(args: &[String]) -> Result<i32, GitslError> {
    let show_stat = args.iter().any(|a| a == "--stat");
    let show_patch = args.iter().any(|a| a == "-p" || a == "--patch");

    let mut stash_ref = None;
    for arg in args {
        if parse_stash_index(arg).is_some() {
            match translate_ref(arg) {
                Some(name) => stash_ref = Some(name),
                None => return Ok(1),
            }
        }
    }
    let stash_ref = match stash_ref.or_else(most_recent) {
        Some(name) => name,
        None => return Ok(no_entries()),
    };

    if show_patch {
        sl::passthrough(&["shelve", "-p", stash_ref.as_str()])
    } else {
        // git defaults to a diffstat; --stat and the default agree here.
        let _ = show_stat;
        sl::passthrough(&["shelve", "--stat", stash_ref.as_str()])
    }
}

fn handle_branch(args: &[String]) -> Result<i32, GitslError> {
    let branch_name = match args.first() {
        Some(name) => name,
        None => {
            eprintln!("error: stash branch requires a branch name");
            return Ok(1);
        }
    };

    let shelve_name = match args.get(1) {
        Some(stash_ref) => match translate_ref(stash_ref) {
            Some(name) => name,
            None => return Ok(1),
        },
        None => match most_recent() {
            Some(name) => name,
            None => return Ok(no_entries()),
        },
    };

    let code = sl::passthrough(&["bookmark", branch_name])?;
    if code != 0 {
        return Ok(code);
    }
    sl::passthrough(&["unshelve", shelve_name.as_str()])
}

fn handle_drop(args: &[String]) -> Result<i32, GitslError> {
    if !args.is_empty() {
        let translated = match translate_all(args) {
            Some(t) => t,
            None => return Ok(1),
        };
        let mut sl_args = vec!["shelve".to_string(), "--delete".to_string()];
        sl_args.extend(translated);
        return sl::passthrough(&sl_args);
    }

    match most_recent() {
        Some(name) => sl::passthrough(&["shelve", "--delete", name.as_str()]),
        None => Ok(no_entries()),
    }
}

fn handle_list(args: &[String]) -> Result<i32, GitslError> {
    let mut sl_args = vec!["shelve".to_string(), "--list".to_string()];
    sl_args.extend(args.iter().cloned());
    sl::passthrough(&sl_args)
}

pub fn run(args: &[String]) -> Result<i32, GitslError> {
    let (subcommand, subargs) = match args.split_first() {
        None => return sl::passthrough(&["shelve"]),
        Some((first, rest)) => (first.as_str(), rest),
    };

    match subcommand {
        "push" => handle_push(subargs),
        "pop" => handle_pop(subargs, false),
        "apply" => handle_pop(subargs, true),
        "list" => handle_list(subargs),
        "drop" => handle_drop(subargs),
        "show" => handle_show(subargs),
        "branch" => handle_branch(subargs),
        // A leading flag means an implicit push: `git stash -m "wip"`.
        _ if subcommand.starts_with('-') => handle_push(args),
        // Unknown subcommand: hand the whole thing to shelve.
        _ => {
            let mut sl_args = vec!["shelve".to_string()];
            sl_args.extend(args.iter().cloned());
            sl::passthrough(&sl_args)
        }
    }
}
