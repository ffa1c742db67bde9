//! Tone-of-voice rules.
//!
//! Every rule is a pure function from file content or path to diagnostics.
//! Rules never fail and never suppress one another: a file collects whatever
//! every applicable rule reports.

pub mod component_naming;
pub mod forbidden_phrases;
pub mod generic_phrasing;
pub mod image_naming;
pub mod variable_naming;

use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Blocking: fails the run.
    Error,
    /// Advisory: printed, never fails the run.
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub rule: &'static str,
    pub path: PathBuf,
    pub message: String,
}

impl Diagnostic {
    pub fn error(rule: &'static str, path: &Path, message: String) -> Self {
        Self { severity: Severity::Error, rule, path: path.to_path_buf(), message }
    }

    pub fn warning(rule: &'static str, path: &Path, message: String) -> Self {
        Self { severity: Severity::Warning, rule, path: path.to_path_buf(), message }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.rule, self.message)
    }
}

/// Rules for script and markup sources.
pub fn check_source(content: &str, path: &Path, component: bool) -> Vec<Diagnostic> {
    let mut diagnostics = forbidden_phrases::check(content, path);
    diagnostics.extend(variable_naming::check(content, path));
    diagnostics.extend(generic_phrasing::check_loading_states(content, path));
    diagnostics.extend(generic_phrasing::check_error_messages(content, path));
    if component {
        diagnostics.extend(component_naming::check(path));
    }
    diagnostics
}

/// Rules for image assets.
pub fn check_image(path: &Path) -> Vec<Diagnostic> {
    image_naming::check(path)
}
