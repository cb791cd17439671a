//! Path helpers shared by the analyzer and the command layer.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::parsing::Language;

/// Directory names that are never worth descending into.
pub const DEFAULT_EXCLUDE_FOLDERS: [&str; 7] = [
    "node_modules",
    ".git",
    "dist",
    "build",
    "out",
    "coverage",
    ".next",
];

/// Recursively lists all supported source files beneath `root`.
///
/// `exclude` entries are matched against directory names and merged with
/// the defaults; matching directories are pruned, so the walk never
/// descends into them.
#[must_use]
pub fn find_source_files(root: &Path, exclude: &[String]) -> Vec<PathBuf> {
    let default_excludes = DEFAULT_EXCLUDE_FOLDERS.iter().map(|&s| s.to_owned());
    let all_excludes: Vec<String> = exclude.iter().cloned().chain(default_excludes).collect();

    WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| {
            let path = entry.path();
            if path.is_dir() && path != root {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy())
                    .unwrap_or_default();
                return !all_excludes.iter().any(|ex| name == ex.as_str());
            }
            true
        })
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.path().is_file() && Language::from_path(entry.path()).is_some())
        .map(|entry| entry.path().to_path_buf())
        .collect()
}

/// Normalizes a path for display.
///
/// - Converts backslashes to forward slashes (cross-platform consistency)
/// - Strips a leading "./" or ".\" prefix (cleaner output)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use codecompass::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new("./src/app.ts")), "src/app.ts");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    let normalized = s.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}
