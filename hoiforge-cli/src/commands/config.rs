//! CLI commands for the stored game path

use std::path::Path;

use anyhow::Context;
use hoiforge::settings::SettingsStore;

/// Print where settings live and what they hold
pub fn show(store: &SettingsStore) -> anyhow::Result<()> {
    println!("Settings file: {}", store.path().display());

    let game_path = store.load();
    if game_path.is_empty() {
        println!("Game path: (not set)");
    } else if Path::new(&game_path).exists() {
        println!("Game path: {game_path}");
    } else {
        println!("Game path: {game_path} (missing on disk)");
    }

    Ok(())
}

/// Store a new game path
pub fn set_game_path(store: &SettingsStore, path: &Path) -> anyhow::Result<()> {
    if !path.is_dir() {
        tracing::warn!("{} is not a directory; saving it anyway", path.display());
    }

    store
        .save(&path.to_string_lossy())
        .with_context(|| format!("Failed to write settings to {}", store.path().display()))?;

    println!("✓ Game path set to {}", path.display());
    Ok(())
}
