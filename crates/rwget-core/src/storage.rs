//! Destination directories and files.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::WgetError;

/// Creates `dir` (and parents) unless it already exists.
pub fn ensure_dir(dir: &Path) -> Result<(), WgetError> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| WgetError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::debug!(dir = %dir.display(), "created destination directory");
    Ok(())
}

/// Joins `name` onto `dir` when a directory was requested.
pub fn destination_path(dir: Option<&Path>, name: &str) -> PathBuf {
    match dir {
        Some(d) => d.join(name),
        None => PathBuf::from(name),
    }
}

/// Creates `path` for writing. Overwrites if the path already exists.
pub fn create_destination(path: &Path) -> Result<File, WgetError> {
    File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| WgetError::CreateFile {
            path: path.to_path_buf(),
            source,
        })
}
