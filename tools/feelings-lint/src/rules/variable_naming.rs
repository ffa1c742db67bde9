//! Best-effort identifier check.
//!
//! Declarations are found lexically with a regex, so destructuring, scope,
//! shadowing and declarations inside strings or comments are not told apart.
//! The keyword must start a word, so `myvar data =` declares nothing here.
//! Treat hits as hints, not as analysis results.

use super::Diagnostic;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

pub const RULE: &str = "variable-naming";

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:const|let|var)\s+([A-Za-z0-9_]+)\s*=").unwrap()
});

static EMOTIONAL_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(heart|soul|whisper|memory|story|dream|feeling|emotion)").unwrap()
});

/// Short names such as loop counters are exempt.
const MIN_CHECKED_LEN: usize = 3;

/// Prefix of hook names, which follow their own convention.
const HOOK_PREFIX: &str = "use";

pub fn check(content: &str, path: &Path) -> Vec<Diagnostic> {
    DECLARATION
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|name| name.len() >= MIN_CHECKED_LEN && !name.starts_with(HOOK_PREFIX))
        .filter(|name| !EMOTIONAL_WORD.is_match(name))
        .map(|name| {
            Diagnostic::warning(
                RULE,
                path,
                format!(
                    "Variable \"{}\" in {} could use more emotional naming",
                    name,
                    path.display()
                ),
            )
        })
        .collect()
}
