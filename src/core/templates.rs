//! sl template strings for the log/show translators.
//!
//! git's `--oneline`/`--name-only`/`--name-status`/`--decorate`/`--pretty`
//! flags all collapse into exactly one `-T` template on the sl side. The
//! strings below contain literal `\n` sequences: sl's templater expands
//! them, not this process.

/// `--oneline`: short hash (12 chars in sl) plus first description line.
pub const ONELINE: &str = r"{node|short} {desc|firstline}\n";

/// `--name-only`: commit line followed by the touched file list.
pub const NAME_ONLY: &str = r"{node|short} {desc|firstline}\n{files}\n";

/// `--name-status`: commit line followed by per-file add/delete/modify rows.
pub const NAME_STATUS: &str = r"{node|short} {desc|firstline}\n{file_adds % 'A\t{file}\n'}{file_dels % 'D\t{file}\n'}{file_mods % 'M\t{file}\n'}\n";

/// `--decorate`: oneline with bookmark decoration when present.
pub const DECORATE: &str = r"{node|short}{if(bookmarks, ' ({bookmarks})')} {desc|firstline}\n";

/// `-s`/`--no-patch`: commit metadata only, diff suppressed.
pub const NO_PATCH: &str =
    r"commit {node|short}\nAuthor: {author}\nDate:   {date|isodate}\n\n    {desc}\n";

/// Preset bodies for `--pretty=<name>`.
pub fn preset(name: &str) -> Option<&'static str> {
    match name {
        "oneline" => Some(ONELINE),
        "short" => Some(r"commit {node|short}\nAuthor: {author}\n\n    {desc|firstline}\n\n"),
        "medium" => Some(
            r"commit {node|short}\nAuthor: {author}\nDate:   {date|isodate}\n\n    {desc|firstline}\n\n",
        ),
        "full" => Some(r"commit {node}\nAuthor: {author}\nCommit: {author}\n\n    {desc}\n\n"),
        _ => None,
    }
}

/// git format placeholders and their sl template equivalents, applied in
/// this order.
const PLACEHOLDERS: &[(&str, &str)] = &[
    ("%H", "{node}"),
    ("%h", "{node|short}"),
    ("%s", "{desc|firstline}"),
    ("%b", "{desc}"),
    ("%an", "{author|person}"),
    ("%ae", "{author|email}"),
    ("%ad", "{date|isodate}"),
    ("%ar", "{date|age}"),
    ("%d", "{bookmarks}"),
    ("%n", r"\n"),
];

/// Rewrite a git `format:` string into sl template syntax, forcing a
/// trailing newline token if the format lacks one.
pub fn translate_placeholders(git_format: &str) -> String {
    let mut result = git_format.to_string();
    for (git, sl) in PLACEHOLDERS {
        result = result.replace(git, sl);
    }
    if !result.ends_with(r"\n") {
        result.push_str(r"\n");
    }
    result
}

/// Resolve a `--pretty=`/`--format=` argument: preset name, `format:`
/// custom string, or bare custom string.
pub fn resolve_pretty(spec: &str) -> String {
    if let Some(body) = preset(spec) {
        return body.to_string();
    }
    let custom = spec.strip_prefix("format:").unwrap_or(spec);
    translate_placeholders(custom)
}

/// Pick the single template for a `log` invocation.
/// Priority: custom pretty > name-status > name-only > decorate > oneline.
pub fn select_log_template(
    custom: Option<String>,
    name_status: bool,
    name_only: bool,
    decorate: bool,
    oneline: bool,
) -> Option<String> {
    if let Some(t) = custom {
        Some(t)
    } else if name_status {
        Some(NAME_STATUS.to_string())
    } else if name_only {
        Some(NAME_ONLY.to_string())
    } else if decorate {
        Some(DECORATE.to_string())
    } else if oneline {
        Some(ONELINE.to_string())
    } else {
        None
    }
}

/// Pick the single template for a `show` invocation.
/// Priority: custom pretty > name-status > name-only > no-patch > oneline.
pub fn select_show_template(
    custom: Option<String>,
    name_status: bool,
    name_only: bool,
    no_patch: bool,
    oneline: bool,
) -> Option<String> {
    if let Some(t) = custom {
        Some(t)
    } else if name_status {
        Some(NAME_STATUS.to_string())
    } else if name_only {
        Some(NAME_ONLY.to_string())
    } else if no_patch {
        Some(NO_PATCH.to_string())
    } else if oneline {
        Some(ONELINE.to_string())
    } else {
        None
    }
}

/// Combine `--since`/`--until` into one sl date expression. Both bounds
/// present become a single inclusive range rather than two conflicting
/// filters.
pub fn date_filter(since: Option<&str>, until: Option<&str>) -> Option<String> {
    match (since, until) {
        (Some(s), Some(u)) => Some(format!("{} to {}", s, u)),
        (Some(s), None) => Some(format!(">{}", s)),
        (None, Some(u)) => Some(format!("<{}", u)),
        (None, None) => None,
    }
}
