use std::path::{Path, PathBuf};

/// Directories that are never traversed, at any depth.
/// Anything whose name starts with `.` is skipped as well.
pub const SKIP_DIRS: &[&str] = &["node_modules"];

/// Roots scanned on every run, relative to the project root.
pub const SCAN_ROOTS: &[&str] = &["app", "components", "lib", "public/images"];

/// Whether a directory entry with this name should be left out of the walk.
pub fn is_skipped(name: &str) -> bool {
    name.starts_with('.') || SKIP_DIRS.contains(&name)
}

pub struct LinterConfig {
    pub root_dir: PathBuf,
    pub scan_roots: Vec<PathBuf>,
}

impl LinterConfig {
    pub fn from_root(root: &Path) -> Self {
        Self {
            root_dir: root.to_path_buf(),
            scan_roots: SCAN_ROOTS.iter().map(|r| root.join(r)).collect(),
        }
    }

    /// Config rooted at the current working directory.
    pub fn from_cwd() -> std::io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::from_root(&cwd))
    }

    /// Path relative to the project root, for diagnostics and classification.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root_dir).unwrap_or(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_dependency_and_hidden_dirs() {
        assert!(is_skipped("node_modules"));
        assert!(is_skipped(".git"));
        assert!(is_skipped(".next"));
        assert!(!is_skipped("components"));
        assert!(!is_skipped("node_modules_backup"));
    }

    #[test]
    fn scan_roots_are_joined_onto_root() {
        let config = LinterConfig::from_root(Path::new("/site"));
        assert_eq!(config.scan_roots.len(), 4);
        assert!(config.scan_roots.contains(&PathBuf::from("/site/public/images")));
        assert_eq!(
            config.relative(Path::new("/site/app/page.tsx")),
            Path::new("app/page.tsx")
        );
    }
}
