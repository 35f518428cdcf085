//! Output path allocation

use std::path::{Path, PathBuf};

/// First path at or after `path` that does not exist yet
///
/// An existing `brief.pdf` yields `brief (1).pdf`, then `brief (2).pdf`, and so
/// on. Only checks existence; nothing is created or locked.
pub fn uniquify(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    (1u32..)
        .map(|n| path.with_file_name(format!("{} ({}){}", stem, n, extension)))
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_free_path_is_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("brief.pdf");
        assert_eq!(uniquify(&path), path);
    }

    #[test]
    fn test_counter_increments() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("brief.pdf");
        fs::write(&path, b"x").unwrap();
        assert_eq!(uniquify(&path), dir.path().join("brief (1).pdf"));

        fs::write(dir.path().join("brief (1).pdf"), b"x").unwrap();
        assert_eq!(uniquify(&path), dir.path().join("brief (2).pdf"));
    }

    #[test]
    fn test_no_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("brief");
        fs::write(&path, b"x").unwrap();
        assert_eq!(uniquify(&path), dir.path().join("brief (1)"));
    }
}
