//! `git branch` → `sl bookmark`.
//!
//! The safety invariant lives here: git's `-D` force-deletes a label and
//! nothing else, while sl's `-D` strips the underlying commits. `-D` is
//! therefore always downgraded to `-d`, unconditionally — the user's goal
//! (delete the label) is still achieved, so no warning is needed.

use crate::core::error::GitslError;
use crate::core::sl;
use regex::Regex;

/// Parsed branch invocation modes, in priority order of handling.
#[derive(Debug, Default, PartialEq)]
struct BranchPlan {
    show_current: bool,
    verbose: bool,
    list_pattern: Option<String>,
    copy: Option<(String, String)>,
    rename: Option<(String, String)>,
    show_all: bool,
    show_remote: bool,
    remaining: Vec<String>,
}

enum Parsed {
    Plan(BranchPlan),
    UsageError(&'static str),
}

fn parse(args: &[String]) -> Parsed {
    let mut plan = BranchPlan::default();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--show-current" => plan.show_current = true,
            "-v" | "--verbose" | "-vv" => plan.verbose = true,
            "-a" | "--all" => plan.show_all = true,
            "-r" | "--remotes" => plan.show_remote = true,
            "-l" | "--list" => {
                if let Some(next) = args.get(i + 1).filter(|a| !a.starts_with('-')) {
                    plan.list_pattern = Some(next.clone());
                    i += 1;
                }
            }
            "-c" | "--copy" => {
                if i + 2 < args.len() {
                    plan.copy = Some((args[i + 1].clone(), args[i + 2].clone()));
                    i += 2;
                } else {
                    return Parsed::UsageError("error: -c requires source and destination");
                }
            }
            "-m" | "--move" => {
                if i + 2 < args.len() {
                    plan.rename = Some((args[i + 1].clone(), args[i + 2].clone()));
                    i += 2;
                } else {
                    return Parsed::UsageError("error: -m requires old and new name");
                }
            }
            "-D" => plan.remaining.push("-d".to_string()),
            "-t" | "--track" => plan.remaining.push("-t".to_string()),
            "-f" | "--force" => plan.remaining.push("-f".to_string()),
            _ => plan.remaining.push(args[i].clone()),
        }
        i += 1;
    }
    Parsed::Plan(plan)
}

/// fnmatch-style glob: `*` and `?` only, everything else literal.
fn glob_match(pattern: &str, name: &str) -> bool {
    let mut re = String::from("^");
    for c in pattern.chars() {
        match c {
            '*' => re.push_str(".*"),
            '?' => re.push('.'),
            _ => re.push_str(&regex::escape(&c.to_string())),
        }
    }
    re.push('$');
    Regex::new(&re).map(|r| r.is_match(name)).unwrap_or(false)
}

fn show_current_branch() -> Result<i32, GitslError> {
    if let Some(bookmark) = sl::active_bookmark() {
        println!("{}", bookmark);
    }
    // Silence on detached, matching git.
    Ok(0)
}

fn list_verbose() -> Result<i32, GitslError> {
    let captured = sl::captured(&[
        "bookmark",
        "--template",
        r"{bookmark}: {node|short} {desc|firstline}\n",
    ])?;
    print!("{}", captured.stdout);
    Ok(captured.code)
}

fn list_with_pattern(pattern: &str) -> Result<i32, GitslError> {
    let captured = sl::captured(&["bookmark", "--template", r"{bookmark}\n"])?;
    if !captured.success() {
        return Ok(captured.code);
    }
    for line in captured.stdout.lines() {
        let bookmark = line.trim();
        if !bookmark.is_empty() && glob_match(pattern, bookmark) {
            println!("{}", bookmark);
        }
    }
    Ok(0)
}

/// Copy a branch: new bookmark at the commit the source bookmark names.
fn copy_branch(source: &str, dest: &str) -> Result<i32, GitslError> {
    let revset = format!("bookmark({})", source);
    let captured = sl::captured(&["log", "-r", revset.as_str(), "--template", "{node}"])?;
    let node = captured.stdout.trim();
    if !captured.success() || node.is_empty() {
        eprintln!("error: branch '{}' not found", source);
        return Ok(1);
    }
    sl::passthrough(&["bookmark", dest, "-r", node])
}

pub fn run(args: &[String]) -> Result<i32, GitslError> {
    let plan = match parse(args) {
        Parsed::Plan(plan) => plan,
        Parsed::UsageError(msg) => {
            eprintln!("{}", msg);
            return Ok(1);
        }
    };

    if plan.show_current {
        return show_current_branch();
    }
    if plan.verbose {
        return list_verbose();
    }
    if let Some(pattern) = &plan.list_pattern {
        return list_with_pattern(pattern);
    }
    if let Some((source, dest)) = &plan.copy {
        return copy_branch(source, dest);
    }
    if let Some((old, new)) = &plan.rename {
        return sl::passthrough(&["bookmark", "-m", old.as_str(), new.as_str()]);
    }

    let mut sl_args = vec!["bookmark".to_string()];
    if plan.show_all {
        sl_args.push("--all".to_string());
    }
    if plan.show_remote {
        sl_args.push("--remote".to_string());
    }
    sl_args.extend(plan.remaining);
    sl::passthrough(&sl_args)
}
