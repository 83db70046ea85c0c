//! Status output recoding: sl one-character codes to git porcelain v1.
//!
//! sl has no staging area, which fixes the mapping: a modification is a
//! working-tree change (` M`), while an add or remove is already scheduled
//! for the next commit and therefore reads as staged (`A `, `D `). Files
//! missing from disk but still tracked map to ` D`; untracked to `??`;
//! ignored (only requested via `--ignored`) to `!!`.

/// Fixed sl-to-git status code table.
pub fn porcelain_code(sl_code: char) -> &'static str {
    match sl_code {
        'M' => " M",
        'A' => "A ",
        'R' => "D ",
        '?' => "??",
        '!' => " D",
        'I' => "!!",
        _ => "??",
    }
}

/// Parse one `sl status` line of the form `X path`. Returns `None` for
/// anything malformed; callers skip those lines.
pub fn parse_status_line(line: &str) -> Option<(char, &str)> {
    let bytes = line.as_bytes();
    if bytes.len() < 3 || bytes[1] != b' ' {
        return None;
    }
    Some((bytes[0] as char, &line[2..]))
}

/// Recode a full `sl status` capture into git porcelain format. Empty input
/// yields the empty string, not a stray newline.
pub fn to_porcelain(sl_output: &str) -> String {
    let lines: Vec<String> = sl_output
        .lines()
        .filter_map(parse_status_line)
        .map(|(code, path)| format!("{} {}", porcelain_code(code), path))
        .collect();
    if lines.is_empty() {
        String::new()
    } else {
        lines.join("\n") + "\n"
    }
}

/// Synthesized `status -b` header line.
pub fn branch_header(active_bookmark: Option<&str>) -> String {
    format!("## {}\n", active_bookmark.unwrap_or("(detached)"))
}
