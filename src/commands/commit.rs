//! `git commit` → `sl commit` / `sl amend`.
//!
//! The safety invariant: `-a/--all` is dropped silently. sl has no staging
//! area, so every pending change is committed anyway; forwarding `-a` would
//! hit sl's unrelated `--all` and change what gets committed.
//!
//! `--signoff` is emulated because sl has no native equivalent. The trailer
//! is appended to whatever message source the user gave, via a temp file
//! when the message has to travel through `-l`.

use crate::core::error::GitslError;
use crate::core::output;
use crate::core::scan::{self, Effect, Rule};
use crate::core::sl;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

const RULES: &[Rule] = &[
    Rule::flag(&["-a", "--all"], Effect::Ignore),
    Rule::flag(&["--amend"], Effect::Set("amend")),
    Rule::flag(&["--no-edit"], Effect::Set("no_edit")),
    Rule::flag(&["-s", "--signoff"], Effect::Set("signoff")),
    Rule::flag(&["-v", "--verbose"], Effect::Set("verbose")),
    Rule::flag(
        &["-n", "--no-verify"],
        Effect::Warn(
            "--no-verify is not directly supported. Sapling has no native hook bypass. \
             Pre-commit hooks will still run.",
        ),
    ),
    Rule::valued(&["-m", "--message"], Effect::Capture("message")),
    Rule::valued(&["-F", "--file"], Effect::Capture("file")),
    Rule::valued(&["--author"], Effect::Capture("author")),
    Rule::valued(&["--date"], Effect::Capture("date")),
];

/// Append a Signed-off-by trailer unless it is already present.
fn add_signoff(message: &str, identity: &str) -> String {
    let trailer = format!("Signed-off-by: {}", identity);
    if message.contains(&trailer) {
        return message.to_string();
    }
    format!("{}\n\n{}", message.trim_end(), trailer)
}

/// `amend` opens the editor unless the message is already decided.
fn wants_editor(amend: bool, no_edit: bool, has_message: bool, has_file: bool) -> bool {
    amend && !no_edit && !has_message && !has_file
}

fn message_temp_file(content: &str) -> Result<NamedTempFile, GitslError> {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

pub fn run(args: &[String]) -> Result<i32, GitslError> {
    let scan = scan::scan(args, RULES);
    scan.report_warnings();
    if scan.set("verbose") {
        output::note("Sapling -v shows repository info. Proceeding without -v.");
    }

    let message = scan.value("message").map(String::from);
    let file = scan.value("file").map(String::from);
    let amend = scan.set("amend");
    let signoff = scan.set("signoff");

    let mut sl_args: Vec<String> = Vec::new();
    let mut editor = wants_editor(amend, scan.set("no_edit"), message.is_some(), file.is_some());
    // Keeps the -l file alive until sl has read it.
    let mut temp_file: Option<NamedTempFile> = None;

    sl_args.push(if amend { "amend" } else { "commit" }.to_string());

    if signoff {
        let identity = sl::user_identity();
        if let Some(msg) = &message {
            sl_args.push("-m".to_string());
            sl_args.push(add_signoff(msg, &identity));
        } else if let Some(path) = &file {
            let content = fs::read_to_string(path).map_err(|source| {
                GitslError::MessageFileError {
                    path: path.clone(),
                    source,
                }
            })?;
            let tmp = message_temp_file(&add_signoff(&content, &identity))?;
            sl_args.push("-l".to_string());
            sl_args.push(tmp.path().display().to_string());
            temp_file = Some(tmp);
        } else {
            // No message source: seed the editor with the trailer.
            let tmp = message_temp_file(&format!("\n\nSigned-off-by: {}", identity))?;
            sl_args.push("-l".to_string());
            sl_args.push(tmp.path().display().to_string());
            temp_file = Some(tmp);
            editor = true;
        }
    } else if let Some(msg) = &message {
        sl_args.push("-m".to_string());
        sl_args.push(msg.clone());
    } else if let Some(path) = &file {
        sl_args.push("-l".to_string());
        sl_args.push(path.clone());
    }

    if editor {
        sl_args.push("-e".to_string());
    }
    if let Some(author) = scan.value("author") {
        sl_args.push("-u".to_string());
        sl_args.push(author.to_string());
    }
    if let Some(date) = scan.value("date") {
        sl_args.push("-d".to_string());
        sl_args.push(date.to_string());
    }
    sl_args.extend(scan.rest.iter().cloned());

    let code = sl::passthrough(&sl_args)?;
    drop(temp_file);
    Ok(code)
}
