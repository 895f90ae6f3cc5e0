//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `resolve_under` - configured paths relative to the project root

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a configured path against `root`, without touching the disk.
///
/// `~` is expanded, relative paths are joined onto `root`, and `.` segments
/// and trailing separators are dropped so `"assets/dev/"` and `"assets/dev"`
/// resolve identically.
pub fn resolve_under(root: &Path, path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    let expanded = PathBuf::from(shellexpand::tilde(&raw).into_owned());

    let full = if expanded.is_absolute() {
        expanded
    } else {
        root.join(expanded)
    };

    full.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
