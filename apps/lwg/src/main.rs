//! lwg entry point.
//!
//! Loads the configuration (scaffolding it on first run), loads the game
//! store from the configured games directory and logs every game with the
//! runner it resolves to.

mod catalog;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting lwg");

    let defaults = lwg_conf::Config::from_env()?;
    let entries = catalog::list(defaults)?;

    for entry in &entries {
        match entry.runner {
            Some(runner) => tracing::info!(
                name = %entry.name,
                id = %entry.id,
                runner = %runner,
                "game"
            ),
            None => tracing::warn!(name = %entry.name, id = %entry.id, "game has no runner"),
        }
    }

    tracing::info!(count = entries.len(), "done");
    Ok(())
}
