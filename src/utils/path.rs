//! Path normalization.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
///
/// The fallback matters for output directories that do not exist yet.
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_missing_relative_path() {
        let normalized = normalize_path(Path::new("dist/not-created-yet"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("dist/not-created-yet"));
    }

    #[test]
    fn test_normalize_resolves_dots() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("icons");
        std::fs::create_dir(&nested).unwrap();

        let dotted = nested.join("..").join("icons");
        assert_eq!(normalize_path(&dotted), nested.canonicalize().unwrap());
    }
}
