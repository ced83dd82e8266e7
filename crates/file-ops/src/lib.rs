//! File operations shared by the game store and the configuration manager.
//!
//! Provides the existence probe used to branch between create and replace
//! paths, remove-then-create file replacement, and directory scaffolding
//! with a fixed permission mode.

mod dirs;
mod error;
mod probe;
mod write;

pub use dirs::{DIR_MODE, ensure_dir};
pub use error::{FileOpError, Step};
pub use probe::{exists, try_exists};
pub use write::{create_file, remove_file_if_exists, replace_file};
