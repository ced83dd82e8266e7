//! Whole-file writes: create fresh or replace.
//!
//! Replacement is remove-then-create, not an atomic rename. A concurrent
//! reader can observe the file briefly absent.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::{FileOpError, Step};
use crate::probe::try_exists;

/// Writes `contents` to `path`, removing any existing file first.
pub fn replace_file(path: &Path, contents: &[u8]) -> Result<(), FileOpError> {
    if try_exists(path)? {
        std::fs::remove_file(path).map_err(|e| FileOpError::new(Step::Remove, path, e))?;
    }

    let file = File::create(path).map_err(|e| FileOpError::new(Step::Create, path, e))?;
    write_all(file, path, contents)
}

/// Writes `contents` to a new file at `path`.
///
/// Fails with a `Create` step error if the file already exists.
pub fn create_file(path: &Path, contents: &[u8]) -> Result<(), FileOpError> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| FileOpError::new(Step::Create, path, e))?;
    write_all(file, path, contents)
}

/// Removes the file at `path`. Returns false if it was already gone.
pub fn remove_file_if_exists(path: &Path) -> Result<bool, FileOpError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(FileOpError::new(Step::Remove, path, e)),
    }
}

fn write_all(mut file: File, path: &Path, contents: &[u8]) -> Result<(), FileOpError> {
    file.write_all(contents)
        .and_then(|()| file.flush())
        .map_err(|e| FileOpError::new(Step::Write, path, e))
}
