//! Path existence checks.

use std::path::Path;

use crate::error::{FileOpError, Step};

/// Returns true if `path` exists.
///
/// Never fails: any stat error, including permission errors, reads as
/// "does not exist". Use [`try_exists`] where that distinction matters.
pub fn exists(path: &Path) -> bool {
    try_exists(path).unwrap_or(false)
}

/// Returns whether `path` exists, surfacing stat errors other than
/// `NotFound`.
pub fn try_exists(path: &Path) -> Result<bool, FileOpError> {
    match std::fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(FileOpError::new(Step::Stat, path, e)),
    }
}
