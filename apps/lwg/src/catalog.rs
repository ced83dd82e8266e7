//! Game listing with resolved runners.

use anyhow::Context;
use lwg_conf::Config;
use lwg_games::GameStore;
use uuid::Uuid;

/// A game together with the runner it would launch with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: Uuid,
    pub name: String,
    pub runner: Option<Uuid>,
}

/// Loads the configuration rooted where `defaults` points (saving
/// `defaults` on first run) and lists every stored game, sorted by name.
pub fn list(defaults: Config) -> anyhow::Result<Vec<CatalogEntry>> {
    let main_dir = defaults.paths.main_dir.clone();
    let config = defaults
        .load_or_init()
        .with_context(|| format!("failed to load configuration from {}", main_dir.display()))?;

    let store = GameStore::load(&config.paths.games_dir).with_context(|| {
        format!("failed to load games from {}", config.paths.games_dir.display())
    })?;

    let default_runner = config.default_runner();
    let mut entries: Vec<CatalogEntry> = store
        .iter()
        .map(|game| CatalogEntry {
            id: game.id,
            name: game.name.clone(),
            runner: game.resolve_runner(default_runner),
        })
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

    Ok(entries)
}
