//! In-memory game map backed by one YAML file per game.
//!
//! The map and the directory are kept in step by ordering: a game is only
//! inserted after its file write succeeded, and only removed after its file
//! is gone. Loading is all-or-nothing.

use std::collections::HashMap;
use std::fs::FileType;
use std::path::{Path, PathBuf};

use lwg_file_ops::{ensure_dir, remove_file_if_exists, replace_file};
use tracing::{debug, info, warn};
use uuid::Uuid;
use walkdir::{DirEntry, WalkDir};

use crate::error::GamesError;
use crate::types::Game;

/// Games keyed by id.
#[derive(Debug, Default)]
pub struct GameStore {
    games: HashMap<Uuid, StoredGame>,
}

/// A game and the file it was last written to or read from.
#[derive(Debug)]
struct StoredGame {
    game: Game,
    path: PathBuf,
}

impl GameStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Persists `game` under `games_dir` and registers it.
    ///
    /// The file `<name>_<id>` is replaced if present. If the store already
    /// held this id at another path (a different name or directory), that
    /// old file is removed afterwards. On error the store is left unchanged.
    pub fn add(&mut self, game: Game, games_dir: &Path) -> Result<(), GamesError> {
        ensure_dir(games_dir)?;

        let contents = serde_yaml::to_string(&game).map_err(|source| GamesError::Encode {
            name: game.name.clone(),
            source,
        })?;

        let path = games_dir.join(game.file_name());
        replace_file(&path, contents.as_bytes())?;
        debug!(id = %game.id, path = %path.display(), "wrote game file");

        let stored = StoredGame {
            game,
            path: path.clone(),
        };
        if let Some(previous) = self.games.insert(stored.game.id, stored)
            && previous.path != path
            && let Err(e) = remove_file_if_exists(&previous.path)
        {
            warn!(
                path = %previous.path.display(),
                error = %e,
                "failed to remove stale game file"
            );
        }

        Ok(())
    }

    /// Loads every game file found under `games_dir`, recursively.
    ///
    /// Directories, and symlinks to directories, are skipped. Every regular
    /// file (or symlink to one) must decode as exactly one [`Game`]; any
    /// other kind of entry, such as a FIFO or socket, fails the load without
    /// being opened. Games are keyed by the `id` inside the file, not by the
    /// filename. The first unreadable or malformed file fails the whole load.
    pub fn load(games_dir: &Path) -> Result<Self, GamesError> {
        match std::fs::metadata(games_dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(GamesError::NotADirectory(games_dir.to_path_buf())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(GamesError::NotFound(games_dir.to_path_buf()));
            }
            Err(source) => {
                return Err(GamesError::Io {
                    path: games_dir.to_path_buf(),
                    source,
                });
            }
        }

        let mut store = Self::new();
        for entry in WalkDir::new(games_dir).sort_by_file_name() {
            let entry = entry?;
            let file_type = resolved_file_type(&entry)?;
            if file_type.is_dir() {
                continue;
            }
            if !file_type.is_file() {
                return Err(GamesError::NotAFile(entry.path().to_path_buf()));
            }

            let game = read_game(entry.path())?;
            debug!(id = %game.id, path = %entry.path().display(), "read game file");

            let stored = StoredGame {
                game,
                path: entry.into_path(),
            };
            if let Some(previous) = store.games.insert(stored.game.id, stored) {
                warn!(
                    id = %previous.game.id,
                    path = %previous.path.display(),
                    "duplicate game id, keeping the later file"
                );
            }
        }

        info!(path = %games_dir.display(), count = store.len(), "loaded games");
        Ok(store)
    }

    /// Deletes the game's file and drops it from the store.
    ///
    /// The file removed is the one the game was last written to or loaded
    /// from. Returns `None` if the id is unknown. A file that is already
    /// gone is not an error. If the file cannot be removed the store is
    /// unchanged.
    pub fn remove(&mut self, id: &Uuid) -> Result<Option<Game>, GamesError> {
        let Some(stored) = self.games.get(id) else {
            return Ok(None);
        };

        if !remove_file_if_exists(&stored.path)? {
            debug!(id = %id, path = %stored.path.display(), "game file already absent");
        }

        Ok(self.games.remove(id).map(|stored| stored.game))
    }

    pub fn get(&self, id: &Uuid) -> Option<&Game> {
        self.games.get(id).map(|stored| &stored.game)
    }

    /// Returns the file backing the game with this id.
    pub fn file_path(&self, id: &Uuid) -> Option<&Path> {
        self.games.get(id).map(|stored| stored.path.as_path())
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.games.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Iterates over all games in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Game> {
        self.games.values().map(|stored| &stored.game)
    }

    /// Iterates over the games that name `runner_id` as their runner.
    pub fn games_for_runner(&self, runner_id: Uuid) -> impl Iterator<Item = &Game> {
        self.iter().filter(move |g| g.runner_id == runner_id)
    }
}

/// Returns the entry's type, looking through symlinks.
fn resolved_file_type(entry: &DirEntry) -> Result<FileType, GamesError> {
    if !entry.path_is_symlink() {
        return Ok(entry.file_type());
    }

    std::fs::metadata(entry.path())
        .map(|meta| meta.file_type())
        .map_err(|source| GamesError::Io {
            path: entry.path().to_path_buf(),
            source,
        })
}

fn read_game(path: &Path) -> Result<Game, GamesError> {
    let content = std::fs::read_to_string(path).map_err(|source| GamesError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml::from_str(&content).map_err(|source| GamesError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
