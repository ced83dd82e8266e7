//! Error types for game store operations.

use std::path::PathBuf;

use lwg_file_ops::FileOpError;

/// Errors produced while reading or writing game files.
#[derive(Debug, thiserror::Error)]
pub enum GamesError {
    #[error("games directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("games path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("failed to decode game file {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to encode game {name:?}: {source}")]
    Encode {
        name: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    FileOp(#[from] FileOpError),

    #[error("failed to walk games directory: {0}")]
    Walk(#[from] walkdir::Error),
}
