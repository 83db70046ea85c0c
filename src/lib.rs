//! gitsl: run git commands against a Sapling repository.
//!
//! The binary is intended to sit behind a `git` alias or symlink. Each
//! supported git command has a translator that rewrites flags into their
//! `sl` equivalents, runs the target tool, and where necessary recodes its
//! output back into the shape git scripts expect.
//!
//! Unsupported commands are reported but never fail the caller: shell
//! prompts and editors routinely probe git and must keep working. Setting
//! `GITSL_DEBUG=1` prints the would-be `sl` invocation instead of running
//! anything.

pub mod commands;
pub mod core;

use crate::core::args::{self, ParsedCommand};
use crate::core::error::GitslError;

const USAGE: &str = "usage: git <command> [<args>]";

type Translator = fn(&[String]) -> Result<i32, GitslError>;

fn translator(command: &str) -> Option<Translator> {
    Some(match command {
        "add" => commands::add::run,
        "blame" => commands::blame::run,
        "branch" => commands::branch::run,
        "checkout" => commands::checkout::run,
        "clean" => commands::clean::run,
        "clone" => commands::clone::run,
        "commit" => commands::commit::run,
        "config" => commands::config::run,
        "diff" => commands::diff::run,
        "grep" => commands::grep::run,
        "init" => commands::init::run,
        "log" => commands::log::run,
        "mv" => commands::mv::run,
        "restore" => commands::restore::run,
        "rev-parse" => commands::rev_parse::run,
        "rm" => commands::rm::run,
        "show" => commands::show::run,
        "stash" => commands::stash::run,
        "status" => commands::status::run,
        "switch" => commands::switch::run,
        _ => return None,
    })
}

fn dispatch(parsed: &ParsedCommand) -> Result<i32, GitslError> {
    let command = match &parsed.command {
        None => {
            eprintln!("{}", USAGE);
            return Ok(1);
        }
        Some(command) => command.as_str(),
    };

    match command {
        "--version" | "-v" => {
            println!("gitsl version {}", env!("CARGO_PKG_VERSION"));
            return Ok(0);
        }
        "--help" | "-h" | "help" => {
            println!("{}", USAGE);
            println!("This is gitsl, a git-to-Sapling translation shim.");
            println!("Set GITSL_DEBUG=1 to see commands without executing.");
            return Ok(0);
        }
        _ => {}
    }

    if args::is_debug_mode() {
        args::print_debug_info(parsed);
        return Ok(0);
    }

    match translator(command) {
        Some(run) => run(&parsed.args),
        None => {
            // Exit 0: prompts and tooling probe commands we do not cover.
            eprintln!(
                "gitsl: unsupported command: git {}",
                args::shell_join(&parsed.raw)
            );
            Ok(0)
        }
    }
}

/// Entry point for the binary: translate, run, and reduce to an exit code.
pub fn run(argv: &[String]) -> i32 {
    let parsed = args::parse_argv(argv);
    match dispatch(&parsed) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("gitsl: {}", err);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translator_table_covers_supported_commands() {
        for command in [
            "add", "blame", "branch", "checkout", "clean", "clone", "commit", "config", "diff",
            "grep", "init", "log", "mv", "restore", "rev-parse", "rm", "show", "stash", "status",
            "switch",
        ] {
            assert!(translator(command).is_some(), "missing: {}", command);
        }
    }

    #[test]
    fn test_translator_table_rejects_unknown() {
        assert!(translator("push").is_none());
        assert!(translator("rev_parse").is_none());
        assert!(translator("").is_none());
    }
}
