//! Argument vector splitting and debug-echo mode.
//!
//! The split is deliberately dumb: first token is the command, the rest are
//! its arguments, verbatim and order-preserving. Flag interpretation belongs
//! to the per-command translators, which know their own grammars.

use std::env;

/// Environment toggle that echoes the would-be `sl` invocation instead of
/// executing anything.
pub const DEBUG_ENV: &str = "GITSL_DEBUG";

/// Parsed representation of a git-style invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// The git subcommand name, or `None` for an empty invocation.
    pub command: Option<String>,
    /// Remaining arguments after the command, untouched.
    pub args: Vec<String>,
    /// The original argument vector, kept for diagnostic echoing.
    pub raw: Vec<String>,
}

/// Split an argument vector (without the program name) into command + args.
/// This operation cannot fail.
pub fn parse_argv(argv: &[String]) -> ParsedCommand {
    match argv.split_first() {
        None => ParsedCommand {
            command: None,
            args: Vec::new(),
            raw: Vec::new(),
        },
        Some((command, rest)) => ParsedCommand {
            command: Some(command.clone()),
            args: rest.to_vec(),
            raw: argv.to_vec(),
        },
    }
}

/// Truthy values accepted for `GITSL_DEBUG`.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

pub fn is_debug_mode() -> bool {
    env::var(DEBUG_ENV).map(|v| is_truthy(&v)).unwrap_or(false)
}

/// Quote a token for display in a shell-pasteable command line.
pub fn shell_quote(token: &str) -> String {
    let plain = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "@%+=:,./-_{}".contains(c));
    if plain {
        token.to_string()
    } else {
        format!("'{}'", token.replace('\'', "'\\''"))
    }
}

/// Render a full argv as one shell-pasteable line.
pub fn shell_join(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|t| shell_quote(t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print what would be executed for `parsed`, without executing it.
pub fn print_debug_info(parsed: &ParsedCommand) {
    eprintln!("[DEBUG] Command: {:?}", parsed.command);
    eprintln!("[DEBUG] Args: {:?}", parsed.args);
    if let Some(command) = &parsed.command {
        let mut would_execute = vec!["sl".to_string(), command.clone()];
        would_execute.extend(parsed.args.iter().cloned());
        eprintln!("[DEBUG] Would execute: {}", shell_join(&would_execute));
    }
}
