//! Stderr helpers for translator warnings and notes.
//!
//! Every message about an unsupported or semantically-altered flag goes
//! through here so the prefixes stay uniform. `colored` drops the escape
//! codes automatically when stderr is not a terminal, so captured output
//! stays script-clean.

use colored::Colorize;

/// A flag was dropped or substituted; the user should know.
pub fn warn(msg: &str) {
    eprintln!("{} {}", "Warning:".yellow().bold(), msg);
}

/// Informational aside; the command still does what was asked.
pub fn note(msg: &str) {
    eprintln!("{} {}", "Note:".cyan(), msg);
}
