use super::Diagnostic;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

pub const RULE: &str = "image-naming";

static IMAGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z-]+(moment|memory|whisper|story|dream|heart)").unwrap()
});

/// Image file names must lead with lowercase words ending in a descriptive
/// word. Blocking.
pub fn check(path: &Path) -> Vec<Diagnostic> {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    if IMAGE_NAME.is_match(&name) {
        return vec![];
    }

    vec![Diagnostic::error(
        RULE,
        path,
        format!("Image {name} needs emotional naming"),
    )]
}
