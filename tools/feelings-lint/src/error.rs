use std::io;
use std::path::PathBuf;

/// I/O failures met while scanning. None of them abort a run: the path is
/// logged, counted and skipped.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("cannot list directory {}: {source}", .path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("cannot stat {}: {source}", .path.display())]
    Metadata { path: PathBuf, source: io::Error },

    #[error("cannot read file {}: {source}", .path.display())]
    ReadFile { path: PathBuf, source: io::Error },
}

