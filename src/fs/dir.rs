//! Directory create/delete helpers

use crate::error::{Result, UtilError};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Make `path` an empty directory, deleting whatever directory was there
pub fn ensure_empty_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    delete_dir_if_exists(path)?;
    create_dir(path)
}

/// Remove a directory and all its contents; fails if it does not exist
pub fn delete_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let meta = fs::metadata(path).map_err(|e| UtilError::io(path, e))?;
    remove_dir_tree(path, &meta)
}

/// Remove a directory and all its contents if it exists
pub fn delete_dir_if_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(meta) => remove_dir_tree(path, &meta),
        Err(_) => Ok(()),
    }
}

/// Create a directory (and missing parents); fails if the path exists
pub fn create_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Err(UtilError::AlreadyExists(path.to_path_buf()));
    }
    debug!(path = %path.display(), "creating directory");
    fs::create_dir_all(path).map_err(|e| UtilError::io(path, e))
}

/// Create a directory (and missing parents) unless the path exists
pub fn create_dir_if_not_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "creating directory");
    fs::create_dir_all(path).map_err(|e| UtilError::io(path, e))
}

fn remove_dir_tree(path: &Path, meta: &fs::Metadata) -> Result<()> {
    if !meta.is_dir() {
        return Err(UtilError::NotADirectory(path.to_path_buf()));
    }
    debug!(path = %path.display(), "removing directory tree");
    fs::remove_dir_all(path).map_err(|e| UtilError::io(path, e))
}
