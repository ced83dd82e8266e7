//! Launcher configuration.
//!
//! A single YAML record at `<config home>/lwg/config.yaml` names the games
//! and runners directories and holds the default runner preference. The
//! first save scaffolds the directory tree; later saves replace the file.

pub mod config;
pub mod error;
pub mod home;

pub use config::{
    APP_DIR_NAME, CONFIG_FILE_NAME, Config, ConfigPaths, GAMES_DIR_NAME, Preferences,
    RUNNERS_DIR_NAME, RunnerPreferences,
};
pub use error::ConfigError;
pub use home::config_home;
