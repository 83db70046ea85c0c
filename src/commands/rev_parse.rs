//! `git rev-parse` → assorted sl queries.
//!
//! Each supported flag maps to its own read-only probe. Two quirks are
//! load-bearing for scripts: `--is-inside-work-tree` prints `true`/`false`
//! and always exits 0 (as git does), and `--verify` failures use git's
//! exact wording and exit code 128.

use crate::core::error::GitslError;
use crate::core::sl;
use std::path::Path;

fn value_after<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    let idx = args.iter().position(|a| a == flag)?;
    args.get(idx + 1).map(|s| s.as_str())
}

fn show_toplevel() -> Result<i32, GitslError> {
    let captured = sl::repo_root()?;
    if captured.success() {
        println!("{}", captured.stdout.trim());
    } else {
        eprint!("{}", captured.stderr);
    }
    Ok(captured.code)
}

fn git_dir() -> Result<i32, GitslError> {
    let captured = sl::repo_root()?;
    if !captured.success() {
        eprint!("{}", captured.stderr);
        return Ok(captured.code);
    }
    let root = captured.stdout.trim();
    let sl_dir = Path::new(root).join(".sl");
    let hg_dir = Path::new(root).join(".hg");
    if sl_dir.is_dir() {
        println!("{}", sl_dir.display());
    } else if hg_dir.is_dir() {
        println!("{}", hg_dir.display());
    } else {
        // Expected location for a modern repo.
        println!("{}", sl_dir.display());
    }
    Ok(0)
}

fn is_inside_work_tree() -> Result<i32, GitslError> {
    let inside = sl::repo_root().map(|c| c.success()).unwrap_or(false);
    println!("{}", if inside { "true" } else { "false" });
    // git exits 0 here even outside a repository.
    Ok(0)
}

fn abbrev_ref(reference: &str) -> Result<i32, GitslError> {
    if !reference.eq_ignore_ascii_case("HEAD") {
        println!("{}", reference);
        return Ok(0);
    }
    let captured = sl::captured(&["log", "-r", ".", "-T", "{activebookmark}"])?;
    if !captured.success() {
        eprint!("{}", captured.stderr);
        return Ok(captured.code);
    }
    let bookmark = captured.stdout.trim();
    if bookmark.is_empty() {
        // No active bookmark: detached.
        println!("HEAD");
    } else {
        println!("{}", bookmark);
    }
    Ok(0)
}

fn verify(reference: &str) -> Result<i32, GitslError> {
    let captured = sl::captured(&["log", "-r", reference, "-T", "{node}", "-l", "1"])?;
    if captured.success() {
        let node = captured.stdout.trim();
        if !node.is_empty() {
            println!("{}", node);
            return Ok(0);
        }
    }
    eprintln!("fatal: Needed a single revision");
    Ok(128)
}

fn short_head() -> Result<i32, GitslError> {
    let captured = sl::captured(&["whereami"])?;
    if captured.success() {
        let hash: String = captured.stdout.trim().chars().take(7).collect();
        println!("{}", hash);
    } else {
        eprint!("{}", captured.stderr);
    }
    Ok(captured.code)
}

pub fn run(args: &[String]) -> Result<i32, GitslError> {
    let has = |flag: &str| args.iter().any(|a| a == flag);

    if has("--show-toplevel") {
        return show_toplevel();
    }
    if has("--git-dir") {
        return git_dir();
    }
    if has("--is-inside-work-tree") {
        return is_inside_work_tree();
    }
    if has("--abbrev-ref") {
        return abbrev_ref(value_after(args, "--abbrev-ref").unwrap_or("HEAD"));
    }
    if has("--verify") {
        return match value_after(args, "--verify") {
            Some(reference) => verify(reference),
            None => {
                eprintln!("fatal: --verify requires a revision");
                Ok(128)
            }
        };
    }
    if has("--symbolic") {
        println!("{}", value_after(args, "--symbolic").unwrap_or("HEAD"));
        return Ok(0);
    }
    if has("--short") && has("HEAD") {
        return short_head();
    }

    eprintln!(
        "gitsl: rev-parse flag not supported. Supported: --show-toplevel, --git-dir, \
         --is-inside-work-tree, --abbrev-ref HEAD, --verify, --symbolic, --short HEAD"
    );
    Ok(1)
}
