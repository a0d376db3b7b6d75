//! Directory walking abstraction for consistent file discovery.

use crate::config::ScanConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::WalkDir;

/// Configuration for directory walking.
#[derive(Debug, Clone, Default)]
pub struct WalkConfig {
    /// Maximum depth to traverse. None means unlimited.
    pub max_depth: Option<usize>,
    /// Whether to follow symbolic links to directories.
    pub follow_symlinks: bool,
    /// Whether to yield directory entries sorted by file name.
    pub sort_by_name: bool,
}

impl WalkConfig {
    /// Create a new WalkConfig with unlimited depth and filesystem order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set whether to follow symlinks.
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Set whether entries are sorted by name.
    pub fn with_sort_by_name(mut self, sort: bool) -> Self {
        self.sort_by_name = sort;
        self
    }
}

impl From<&ScanConfig> for WalkConfig {
    fn from(scan: &ScanConfig) -> Self {
        let config = Self::new()
            .with_follow_symlinks(scan.follow_symlinks)
            .with_sort_by_name(scan.sort_by_name);
        match scan.max_depth {
            Some(depth) => config.with_max_depth(depth),
            None => config,
        }
    }
}

/// An item produced by the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEntry {
    /// A file to read. Symlinks that do not point at a directory are
    /// yielded too, so a dangling link surfaces as a read failure.
    File(PathBuf),
    /// An entry the walker could not descend into or stat.
    Error {
        path: Option<PathBuf>,
        message: String,
    },
}

/// Directory walker over a single root.
pub struct DirectoryWalker {
    config: WalkConfig,
}

impl DirectoryWalker {
    /// Create a new DirectoryWalker with the given configuration.
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Walk `root` recursively and yield files and walk errors in traversal order.
    pub fn walk<'a>(&'a self, root: &'a Path) -> impl Iterator<Item = WalkEntry> + 'a {
        let mut walker = WalkDir::new(root).follow_links(self.config.follow_symlinks);

        if let Some(depth) = self.config.max_depth {
            walker = walker.max_depth(depth);
        }

        if self.config.sort_by_name {
            walker = walker.sort_by_file_name();
        }

        walker.into_iter().filter_map(|entry| match entry {
            Ok(e) => {
                let file_type = e.file_type();
                if file_type.is_file() {
                    return Some(WalkEntry::File(e.into_path()));
                }
                if file_type.is_symlink() && !points_to_dir(e.path()) {
                    return Some(WalkEntry::File(e.into_path()));
                }
                trace!(path = %e.path().display(), "Skipping non-file entry");
                None
            }
            Err(e) => Some(WalkEntry::Error {
                path: e.path().map(Path::to_path_buf),
                message: e.to_string(),
            }),
        })
    }
}

fn points_to_dir(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn files(walker: &DirectoryWalker, root: &Path) -> Vec<PathBuf> {
        walker
            .walk(root)
            .filter_map(|entry| match entry {
                WalkEntry::File(path) => Some(path),
                WalkEntry::Error { .. } => None,
            })
            .collect()
    }

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        let nested = dir.path().join("logs").join("2024");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(nested.join("app.log"), "log").unwrap();

        dir
    }

    #[test]
    fn test_walk_finds_all_files() {
        let dir = create_test_dir();
        let walker = DirectoryWalker::new(WalkConfig::new());

        let files = files(&walker, dir.path());
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_walk_sorted_order() {
        let dir = create_test_dir();
        let walker = DirectoryWalker::new(WalkConfig::new().with_sort_by_name(true));

        let files = files(&walker, dir.path());
        assert!(files[0].ends_with("a.txt"));
        assert!(files[1].ends_with("b.txt"));
        assert!(files[2].ends_with("logs/2024/app.log"));
    }

    #[test]
    fn test_walk_with_max_depth() {
        let dir = create_test_dir();
        let walker = DirectoryWalker::new(WalkConfig::new().with_max_depth(1));

        let files = files(&walker, dir.path());
        // Only the top-level files
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_walk_empty_directory() {
        let dir = TempDir::new().unwrap();
        let walker = DirectoryWalker::new(WalkConfig::new());

        assert!(files(&walker, dir.path()).is_empty());
    }

    #[test]
    fn test_walk_nonexistent_root_yields_error() {
        let dir = TempDir::new().unwrap();
        let walker = DirectoryWalker::new(WalkConfig::new());

        let entries: Vec<_> = walker.walk(&dir.path().join("missing")).collect();
        assert_eq!(entries.len(), 1);
        assert!(matches!(entries[0], WalkEntry::Error { .. }));
    }

    #[test]
    fn test_walk_config_from_scan_config() {
        let scan = ScanConfig {
            max_depth: Some(2),
            follow_symlinks: true,
            ..ScanConfig::default()
        };
        let config = WalkConfig::from(&scan);
        assert_eq!(config.max_depth, Some(2));
        assert!(config.follow_symlinks);
        assert!(config.sort_by_name);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_yields_file_symlinks_but_not_dir_symlinks() {
        use std::os::unix::fs::symlink;

        let dir = create_test_dir();
        symlink(dir.path().join("a.txt"), dir.path().join("link.txt")).unwrap();
        symlink(dir.path().join("logs"), dir.path().join("logs-link")).unwrap();

        let walker = DirectoryWalker::new(WalkConfig::new());
        let files = files(&walker, dir.path());

        assert_eq!(files.len(), 4);
        assert!(files.iter().any(|f| f.ends_with("link.txt")));
        assert!(!files.iter().any(|f| f.starts_with(dir.path().join("logs-link"))));
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_follows_dir_symlinks_when_enabled() {
        use std::os::unix::fs::symlink;

        let dir = create_test_dir();
        symlink(dir.path().join("logs"), dir.path().join("logs-link")).unwrap();

        let walker = DirectoryWalker::new(WalkConfig::new().with_follow_symlinks(true));
        let files = files(&walker, dir.path());

        assert_eq!(files.len(), 4);
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_reports_symlink_loop() {
        use std::os::unix::fs::symlink;

        let dir = create_test_dir();
        symlink(dir.path(), dir.path().join("logs").join("loop")).unwrap();

        let walker = DirectoryWalker::new(WalkConfig::new().with_follow_symlinks(true));
        let entries: Vec<_> = walker.walk(dir.path()).collect();

        assert!(entries.iter().any(|e| matches!(e, WalkEntry::Error { .. })));
    }
}
