//! Filesystem probe for local package directories

use std::fs;
use std::path::Path;

/// Whether `path` exists and is a directory.
///
/// Symlinks are followed. Any stat failure, including a missing entry or a
/// dangling link, answers `false`.
pub fn is_directory(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).map(|meta| meta.is_dir()).unwrap_or(false)
}
