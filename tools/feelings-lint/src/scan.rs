use crate::classify::{self, FileKind};
use crate::config::LinterConfig;
use crate::error::ScanError;
use crate::rules::{self, Diagnostic, Severity};
use crate::walker::Walker;
use std::path::Path;
use std::time::Instant;

/// Everything one run found, split by severity.
#[derive(Debug, Default)]
pub struct Report {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    /// Paths that could not be listed, stat'ed or read. Already logged.
    pub io_failures: usize,
}

impl Report {
    pub fn record(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
        }
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.record(diagnostic);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// `1` when any blocking diagnostic was recorded. Warnings never fail a run.
    pub fn exit_code(&self) -> i32 {
        if self.has_errors() {
            1
        } else {
            0
        }
    }
}

/// Walk every configured root in turn and run the rules on each file.
pub async fn scan(config: &LinterConfig) -> Report {
    let mut report = Report::default();
    for root in &config.scan_roots {
        let start = Instant::now();
        scan_root(config, root, &mut report).await;
        log::debug!("scanned {} in {:.0?}", config.relative(root).display(), start.elapsed());
    }
    report
}

async fn scan_root(config: &LinterConfig, root: &Path, report: &mut Report) {
    let mut walker = Walker::new(root);
    while let Some(path) = walker.next_file().await {
        match check_file(config, &path).await {
            Ok(diagnostics) => report.extend(diagnostics),
            Err(err) => {
                log::warn!("{err}");
                report.io_failures += 1;
            }
        }
    }
    report.io_failures += walker.failures().len();
}

/// Diagnostics for one file. Only reading the file can fail.
pub async fn check_file(config: &LinterConfig, path: &Path) -> Result<Vec<Diagnostic>, ScanError> {
    let rel_path = config.relative(path);

    match classify::classify(rel_path) {
        FileKind::Source { component } => {
            let bytes = tokio::fs::read(path).await.map_err(|source| ScanError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;
            let content = String::from_utf8_lossy(&bytes);
            Ok(rules::check_source(&content, rel_path, component))
        }
        FileKind::Image => Ok(rules::check_image(rel_path)),
        FileKind::Ignored => Ok(vec![]),
    }
}
