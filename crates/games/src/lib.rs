//! Game launch records and their on-disk store.
//!
//! Each game is persisted as one YAML file named `<name>_<id>` inside the
//! configured games directory. The [`GameStore`] keeps an in-memory map keyed
//! by game id and only registers a game after its file was written.
//!
//! # Operations
//!
//! - **Mint**: build a [`Game`] with a fresh id from a [`GameDraft`]
//! - **Add**: persist a game and register it in the store
//! - **Load**: read every file under a directory, failing on the first bad one
//! - **Remove**: delete the backing file and the map entry

pub mod error;
pub mod store;
pub mod types;

pub use error::GamesError;
pub use store::GameStore;
pub use types::{Game, GameDraft};
