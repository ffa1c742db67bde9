use crate::config;
use crate::error::ScanError;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::{self, ReadDir};

/// Lazy depth-first walk over the files below one root.
///
/// Each call to [`Walker::next_file`] awaits only the filesystem calls it
/// needs to reach the next file, so a scan never has more than one operation
/// in flight. Directory order is whatever the filesystem returns.
///
/// Dependency and hidden entries (see [`config::is_skipped`]) are never
/// yielded or descended. Links to directories are not followed.
pub struct Walker {
    pending_root: Option<PathBuf>,
    stack: Vec<(PathBuf, ReadDir)>,
    failures: Vec<ScanError>,
}

impl Walker {
    pub fn new(root: &Path) -> Self {
        Self {
            pending_root: Some(root.to_path_buf()),
            stack: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Failures recorded so far. Each one was already logged when it happened.
    pub fn failures(&self) -> &[ScanError] {
        &self.failures
    }

    pub async fn next_file(&mut self) -> Option<PathBuf> {
        if let Some(root) = self.pending_root.take() {
            self.open_root(root).await;
        }

        loop {
            let (dir, entries) = self.stack.last_mut()?;
            let next = entries.next_entry().await;
            let entry = match next {
                Ok(Some(entry)) => entry,
                Ok(None) => {
                    self.stack.pop();
                    continue;
                }
                Err(source) => {
                    let path = dir.clone();
                    self.stack.pop();
                    self.record(ScanError::ReadDir { path, source });
                    continue;
                }
            };

            if config::is_skipped(&entry.file_name().to_string_lossy()) {
                continue;
            }

            let path = entry.path();
            let file_type = match entry.file_type().await {
                Ok(t) => t,
                Err(source) => {
                    self.record(ScanError::Metadata { path, source });
                    continue;
                }
            };

            if file_type.is_dir() {
                self.descend(path).await;
            } else if file_type.is_symlink() {
                match fs::metadata(&path).await {
                    Ok(meta) if meta.is_file() => return Some(path),
                    Ok(_) => log::debug!("not following directory link {}", path.display()),
                    Err(source) => self.record(ScanError::Metadata { path, source }),
                }
            } else if file_type.is_file() {
                return Some(path);
            }
        }
    }

    async fn open_root(&mut self, root: PathBuf) {
        match fs::metadata(&root).await {
            Ok(meta) if meta.is_dir() => self.descend(root).await,
            Ok(_) => log::debug!("scan root {} is not a directory, skipping", root.display()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("scan root {} does not exist, skipping", root.display());
            }
            Err(source) => self.record(ScanError::Metadata { path: root, source }),
        }
    }

    async fn descend(&mut self, dir: PathBuf) {
        match fs::read_dir(&dir).await {
            Ok(entries) => self.stack.push((dir, entries)),
            Err(source) => self.record(ScanError::ReadDir { path: dir, source }),
        }
    }

    fn record(&mut self, err: ScanError) {
        log::warn!("{err}");
        self.failures.push(err);
    }
}
