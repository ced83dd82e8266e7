//! Game launch records.

use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A game launch record as stored on disk.
///
/// The serialized field names are the on-disk format, including the
/// `excecutable_path` spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub name: String,

    #[serde(rename = "excecutable_path")]
    pub executable_path: String,

    /// Compatibility-layer prefix directory. Empty when unused.
    #[serde(rename = "wine_prefix_path", default)]
    pub prefix_path: String,

    #[serde(default)]
    pub extra_args: String,

    pub id: Uuid,

    /// Runner used to launch this game. Nil when none was chosen.
    ///
    /// Not checked against any runner collection.
    #[serde(default)]
    pub runner_id: Uuid,
}

/// Every [`Game`] field except the id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameDraft {
    pub name: String,
    pub executable_path: String,
    pub prefix_path: String,
    pub extra_args: String,
    pub runner_id: Uuid,
}

impl Game {
    /// Builds a game from `draft` with a freshly generated random id.
    ///
    /// Every call mints a new identity. The game is not part of any store
    /// until passed to [`GameStore::add`](crate::GameStore::add).
    pub fn mint(draft: GameDraft) -> Self {
        Self {
            name: draft.name,
            executable_path: draft.executable_path,
            prefix_path: draft.prefix_path,
            extra_args: draft.extra_args,
            id: Uuid::new_v4(),
            runner_id: draft.runner_id,
        }
    }

    /// Returns the filename this game is stored under: `<name>_<id>`.
    ///
    /// Path separators and NUL in the name are replaced with `_`.
    pub fn file_name(&self) -> String {
        let name: String = self
            .name
            .chars()
            .map(|c| match c {
                '/' | '\\' | '\0' => '_',
                c => c,
            })
            .collect();
        format!("{name}_{}", self.id)
    }

    /// Returns the prefix directory, or `None` if unset.
    pub fn prefix(&self) -> Option<&Path> {
        if self.prefix_path.is_empty() {
            None
        } else {
            Some(Path::new(&self.prefix_path))
        }
    }

    /// Returns the runner to launch with: this game's own runner if set,
    /// otherwise `default`.
    pub fn resolve_runner(&self, default: Option<Uuid>) -> Option<Uuid> {
        if self.runner_id.is_nil() {
            default.filter(|id| !id.is_nil())
        } else {
            Some(self.runner_id)
        }
    }
}

impl From<Game> for GameDraft {
    fn from(game: Game) -> Self {
        Self {
            name: game.name,
            executable_path: game.executable_path,
            prefix_path: game.prefix_path,
            extra_args: game.extra_args,
            runner_id: game.runner_id,
        }
    }
}
