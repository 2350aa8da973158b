//! CLI commands for searching localisation

use std::path::{Path, PathBuf};

use anyhow::Context;
use hoiforge::localisation::{search, search_all};
use hoiforge::settings::{localisation_dir, SettingsStore};

/// Use `--root` when given, otherwise `<stored game path>/localisation`
fn resolve_root(store: &SettingsStore, root: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(root) = root {
        return Ok(root.to_path_buf());
    }

    let game_path = store.resolve_validated();
    if game_path.is_empty() {
        anyhow::bail!(
            "No valid game path configured.\n\
             Run `hoiforge config set-game-path <DIR>` or pass --root."
        );
    }
    Ok(localisation_dir(Path::new(&game_path)))
}

pub fn execute(
    store: &SettingsStore,
    query: &str,
    root: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let root = resolve_root(store, root)?;

    if json {
        let report = search_all(&root, query)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut results =
        search(&root, query).with_context(|| format!("Cannot search {}", root.display()))?;

    let mut count = 0usize;
    for hit in results.by_ref() {
        println!("{hit}");
        count += 1;
    }

    if count == 0 {
        println!("No matches found for '{query}'");
    } else {
        println!(
            "\nFound {count} matches in {} files",
            results.files_scanned()
        );
    }
    if results.files_skipped() > 0 {
        println!("{} files could not be read", results.files_skipped());
    }

    Ok(())
}
