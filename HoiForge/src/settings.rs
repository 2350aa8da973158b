//! Persisted user settings
//!
//! The only persisted value is the game installation directory. It lives in a
//! small JSON file (`{ "game_path": "..." }`) next to the executable, so a
//! portable copy of the tool carries its own settings.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Directory (relative to the executable) holding the settings file
const CONFIG_DIR_NAME: &str = "config";

/// Settings file name
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Name of the localisation folder inside the game installation
const LOCALISATION_DIR_NAME: &str = "localisation";

/// Persistable settings (saved to disk)
///
/// Unknown keys are ignored when reading and dropped when writing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Path to the game installation directory (may be empty or stale)
    #[serde(default)]
    pub game_path: String,
}

/// Reads and writes [`Settings`] at a fixed location
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store backed by an explicit settings file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at [`SettingsStore::default_path`]
    #[must_use]
    pub fn at_default_location() -> Self {
        Self::new(Self::default_path())
    }

    /// The well-known settings location
    ///
    /// `<executable dir>/config/settings.json`, or the platform config
    /// directory when the executable path is unavailable.
    #[must_use]
    pub fn default_path() -> PathBuf {
        let base = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .or_else(|| dirs::config_dir().map(|dir| dir.join("HoiForge")))
            .unwrap_or_default();
        base.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME)
    }

    /// Path of the backing settings file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored game path
    ///
    /// Returns an empty string when the file is missing, unreadable or
    /// malformed. Failures are logged, never returned.
    #[must_use]
    pub fn load(&self) -> String {
        self.read_settings().game_path
    }

    /// Save the game path, replacing the whole settings file
    pub fn save(&self, game_path: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let settings = Settings {
            game_path: game_path.to_string(),
        };
        fs::write(&self.path, to_pretty_json(&settings)?)?;

        tracing::debug!("Saved game path to {}", self.path.display());
        Ok(())
    }

    /// Load the stored game path, discarding it if it no longer exists on disk
    #[must_use]
    pub fn resolve_validated(&self) -> String {
        let game_path = self.load();
        if game_path.is_empty() {
            return game_path;
        }

        if Path::new(&game_path).exists() {
            game_path
        } else {
            tracing::warn!("Stored game path no longer exists: {}", game_path);
            String::new()
        }
    }

    fn read_settings(&self) -> Settings {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No settings file at {}", self.path.display());
                return Settings::default();
            }
            Err(e) => {
                tracing::warn!("Failed to read settings {}: {}", self.path.display(), e);
                return Settings::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse settings {}: {}", self.path.display(), e);
            Settings::default()
        })
    }
}

/// Location of the localisation tree inside a game installation
#[must_use]
pub fn localisation_dir(game_root: &Path) -> PathBuf {
    game_root.join(LOCALISATION_DIR_NAME)
}

/// Serialize with 4-space indentation, keeping non-ASCII characters as-is
fn to_pretty_json(settings: &Settings) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    settings.serialize(&mut serializer)?;
    Ok(buf)
}
