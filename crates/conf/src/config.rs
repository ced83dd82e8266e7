//! The configuration record and its save/load lifecycle.

use std::path::{Path, PathBuf};

use lwg_file_ops::{create_file, ensure_dir, replace_file, try_exists};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ConfigError;

/// Directory created under the configuration home.
pub const APP_DIR_NAME: &str = "lwg";
/// Name of the configuration file inside the main directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const GAMES_DIR_NAME: &str = "games";
pub const RUNNERS_DIR_NAME: &str = "runners";

/// Launcher configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub paths: ConfigPaths,

    #[serde(default)]
    pub preferences: Preferences,
}

/// Root directory and the two directories beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigPaths {
    pub main_dir: PathBuf,

    #[serde(rename = "games")]
    pub games_dir: PathBuf,

    #[serde(rename = "runners")]
    pub runners_dir: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub runners: RunnerPreferences,
}

/// Default runner used by games that name none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerPreferences {
    pub default_friendly_name: String,
    pub default_path: String,
    /// Nil means no default runner is set.
    pub default_id: Uuid,
}

impl Config {
    /// Builds the default configuration rooted at `config_home`.
    ///
    /// Nothing is read from or written to disk.
    pub fn with_config_home(config_home: impl AsRef<Path>) -> Self {
        let main_dir = config_home.as_ref().join(APP_DIR_NAME);
        Self {
            paths: ConfigPaths {
                games_dir: main_dir.join(GAMES_DIR_NAME),
                runners_dir: main_dir.join(RUNNERS_DIR_NAME),
                main_dir,
            },
            preferences: Preferences::default(),
        }
    }

    /// Builds the default configuration rooted at the platform config home.
    pub fn from_env() -> Result<Self, ConfigError> {
        let home = crate::home::config_home().ok_or(ConfigError::NoConfigHome)?;
        Ok(Self::with_config_home(home))
    }

    /// Loads the configuration stored in `dir`.
    ///
    /// `dir` is the main directory holding `config.yaml`, not the file itself.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let meta = std::fs::metadata(dir).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(dir.to_path_buf())
            } else {
                ConfigError::Io {
                    path: dir.to_path_buf(),
                    source,
                }
            }
        })?;
        if !meta.is_dir() {
            return Err(ConfigError::NotADirectory(dir.to_path_buf()));
        }

        let path = dir.join(CONFIG_FILE_NAME);
        let content = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.clone())
            } else {
                ConfigError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        let config = serde_yaml::from_str(&content).map_err(|source| ConfigError::Decode {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Loads the configuration from this record's main directory, or saves
    /// this record (scaffolding the tree) if that directory does not exist
    /// yet.
    ///
    /// Typically called on a default built by [`Config::from_env`] or
    /// [`Config::with_config_home`].
    pub fn load_or_init(self) -> Result<Self, ConfigError> {
        if try_exists(&self.paths.main_dir)? {
            return Self::load(&self.paths.main_dir);
        }

        self.save()?;
        Ok(self)
    }

    /// Writes the configuration to `<main_dir>/config.yaml`.
    ///
    /// If `main_dir` does not exist, the main, games and runners directories
    /// are created and the file is written fresh. Otherwise the existing
    /// file is removed and rewritten; if it is missing the save fails with
    /// [`ConfigError::ConfigFileMissing`] and nothing is created.
    pub fn save(&self) -> Result<(), ConfigError> {
        let contents = serde_yaml::to_string(self).map_err(ConfigError::Encode)?;
        let config_file = self.config_file();

        if !try_exists(&self.paths.main_dir)? {
            self.scaffold()?;
            create_file(&config_file, contents.as_bytes())?;
            info!(path = %config_file.display(), "initialized configuration");
            return Ok(());
        }

        if !try_exists(&config_file)? {
            return Err(ConfigError::ConfigFileMissing(config_file));
        }

        replace_file(&config_file, contents.as_bytes())?;
        debug!(path = %config_file.display(), "configuration saved");
        Ok(())
    }

    /// Returns the path of the configuration file.
    pub fn config_file(&self) -> PathBuf {
        self.paths.main_dir.join(CONFIG_FILE_NAME)
    }

    /// Returns the default runner id, or `None` if unset.
    pub fn default_runner(&self) -> Option<Uuid> {
        let id = self.preferences.runners.default_id;
        (!id.is_nil()).then_some(id)
    }

    pub fn set_default_runner(
        &mut self,
        id: Uuid,
        friendly_name: impl Into<String>,
        path: impl Into<String>,
    ) {
        self.preferences.runners = RunnerPreferences {
            default_friendly_name: friendly_name.into(),
            default_path: path.into(),
            default_id: id,
        };
    }

    pub fn clear_default_runner(&mut self) {
        self.preferences.runners = RunnerPreferences::default();
    }

    fn scaffold(&self) -> Result<(), ConfigError> {
        ensure_dir(&self.paths.main_dir)?;
        ensure_dir(&self.paths.games_dir)?;
        ensure_dir(&self.paths.runners_dir)?;
        Ok(())
    }
}
