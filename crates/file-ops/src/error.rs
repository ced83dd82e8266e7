//! Error type for file operations.

use std::fmt;
use std::path::PathBuf;

/// The step of a file operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Stat,
    CreateDir,
    SetPermissions,
    Remove,
    Create,
    Write,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Stat => write!(f, "stat"),
            Step::CreateDir => write!(f, "create directory"),
            Step::SetPermissions => write!(f, "set permissions on"),
            Step::Remove => write!(f, "remove"),
            Step::Create => write!(f, "create"),
            Step::Write => write!(f, "write"),
        }
    }
}

/// A failed filesystem step, with the path it was applied to.
#[derive(Debug, thiserror::Error)]
#[error("failed to {step} {}: {source}", path.display())]
pub struct FileOpError {
    pub step: Step,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl FileOpError {
    pub(crate) fn new(step: Step, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            step,
            path: path.into(),
            source,
        }
    }

    /// Returns true if the underlying I/O error is `NotFound`.
    pub fn is_not_found(&self) -> bool {
        self.source.kind() == std::io::ErrorKind::NotFound
    }
}
