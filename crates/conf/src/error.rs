//! Error types for configuration operations.

use std::path::PathBuf;

use lwg_file_ops::FileOpError;

/// Errors produced while loading or saving the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to decode config file {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to encode config: {0}")]
    Encode(#[source] serde_yaml::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    FileOp(#[from] FileOpError),

    #[error("attempted to update but config file does not exist: {}", .0.display())]
    ConfigFileMissing(PathBuf),

    #[error("configuration home directory not available")]
    NoConfigHome,
}
