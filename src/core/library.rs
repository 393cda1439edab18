//! Filesystem walk for the tagged-folder catalog import.

use std::path::{Path, PathBuf};

use super::error::CatalogError;

/// Recursively collect `.mp3` files under `root`, sorted by path.
pub fn scan_mp3s(root: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let mut out = Vec::new();
    walk_dir(root, &mut out)?;
    out.sort();
    Ok(out)
}

fn walk_dir(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), CatalogError> {
    let io_err = |source| CatalogError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let entries = std::fs::read_dir(dir).map_err(io_err)?;

    for entry in entries {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();

        if path.is_dir() {
            walk_dir(&path, out)?;
        } else if is_mp3(&path) {
            out.push(path);
        }
    }

    Ok(())
}

fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false)
}
