/*!
 * Exclusion filtering for RepoDump
 *
 * A path is excluded when its absolute-path string contains any configured
 * pattern as a literal substring. This is a deliberately coarse filter: a
 * pattern like `build` also excludes a file under `buildings/`, and `.log`
 * excludes anything whose absolute path mentions `.log` anywhere. The
 * over-breadth is documented behavior, not an accident; callers wanting
 * precision would need a glob or path-segment matcher instead.
 */

use std::env;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

/// Default patterns to exclude
pub static DEFAULT_EXCLUDE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Version control
        ".git",
        // Dependencies
        "node_modules",
        // Caches
        "__pycache__",
        // Build & dist
        "build",
        "dist",
        // Log, temp and swap files
        ".log",
        ".tmp",
        ".swp",
        // OS files
        ".DS_Store",
    ]
});

/// Ordered set of literal substring exclusion patterns
#[derive(Debug, Clone)]
pub struct ExcludeList {
    patterns: Vec<String>,
}

impl ExcludeList {
    /// Create an exclusion list from an ordered set of patterns
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    /// Check whether a path is excluded.
    ///
    /// The path is absolutized (joined with the current directory if
    /// relative) before matching; no filesystem access is performed, so a
    /// nonexistent path simply fails to match unless a pattern hits.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let abs_path = absolutize(path);
        let haystack = abs_path.to_string_lossy();
        self.patterns.iter().any(|p| haystack.contains(p.as_str()))
    }
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
