use super::Diagnostic;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

pub const RULE: &str = "component-naming";

static COMPONENT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-zA-Z]*(Whisper|Story|Memory|Heart|Soul|Dream|Connection|Emotional)")
        .unwrap()
});

/// Component file stems should carry one of the emotional words after a
/// capitalised lead. Advisory only.
pub fn check(path: &Path) -> Vec<Diagnostic> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    if COMPONENT_NAME.is_match(&stem) {
        return vec![];
    }

    vec![Diagnostic::warning(
        RULE,
        path,
        format!("Component {stem} could have more soul in its name"),
    )]
}
