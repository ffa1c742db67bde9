use super::Diagnostic;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

pub const LOADING_RULE: &str = "generic-loading";
pub const ERROR_MESSAGE_RULE: &str = "generic-error-message";

static LOADING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[r"(?i)loading\.\.\.", r"isLoading", r"<Spinner", r"(?i)please wait"])
});

static ERROR_MESSAGE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[r"(?i)Error:", r"(?i)failed", r"(?i)invalid", r"(?i)required", r"(?i)try again"])
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

/// One warning per loading pattern present in the file.
pub fn check_loading_states(content: &str, path: &Path) -> Vec<Diagnostic> {
    matching(&LOADING_PATTERNS, content)
        .map(|found| {
            Diagnostic::warning(
                LOADING_RULE,
                path,
                format!(
                    "Generic loading state ({}) in {} - add whisper poetry to loading",
                    found,
                    path.display()
                ),
            )
        })
        .collect()
}

/// One warning per error-message pattern present in the file.
pub fn check_error_messages(content: &str, path: &Path) -> Vec<Diagnostic> {
    matching(&ERROR_MESSAGE_PATTERNS, content)
        .map(|found| {
            Diagnostic::warning(
                ERROR_MESSAGE_RULE,
                path,
                format!(
                    "Generic error message ({}) in {} - add comfort to errors",
                    found,
                    path.display()
                ),
            )
        })
        .collect()
}

/// First matched text of every pattern that hits.
fn matching<'a>(patterns: &'a [Regex], content: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    patterns
        .iter()
        .filter_map(move |p| p.find(content))
        .map(|m| m.as_str())
}
