//! Error types for `HoiForge`

use std::path::PathBuf;

use thiserror::Error;

use crate::mods::types::GenerationStep;

/// The error type for `HoiForge` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ==================== Mod Descriptor Errors ====================
    /// The descriptor has no `path="..."` assignment.
    #[error("could not find a path=\"...\" entry in the mod descriptor")]
    DescriptorPatternNotFound,

    /// No mod directory was supplied for an operation that writes into one.
    #[error("no mod directory selected - load a .mod descriptor first")]
    ModPathNotSet,

    // ==================== Country Validation Errors ====================
    /// The country tag is empty after trimming.
    #[error("country tag must not be empty")]
    EmptyTag,

    /// The country tag cannot be used in file names or registry rows.
    #[error("country tag {tag:?} contains the character {invalid:?}, which is not allowed in tags")]
    InvalidTag {
        /// The rejected tag.
        tag: String,
        /// The first offending character.
        invalid: char,
    },

    /// The country name is empty after trimming.
    #[error("country name must not be empty")]
    EmptyName,

    /// The country name cannot be used as a file name.
    #[error("country name {name:?} contains the character {invalid:?}, which is not allowed in file names")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// The first offending character.
        invalid: char,
    },

    /// The graphical culture is not in the culture table.
    #[error("unknown graphical culture {0:?} (run `hoiforge cultures` for the list)")]
    UnknownCulture(String),

    /// A color channel is outside `0..=255`.
    #[error("color channel {channel} is {value}, expected a value between 0 and 255")]
    ColorOutOfRange {
        /// Channel name (`R`, `G` or `B`).
        channel: char,
        /// The rejected value.
        value: i64,
    },

    /// The color text is neither `"R G B"` nor `#rrggbb`.
    #[error("invalid color {0:?}: expected \"R G B\" or #rrggbb")]
    InvalidColor(String),

    // ==================== Generation Errors ====================
    /// A file operation failed part-way through country generation.
    ///
    /// Every step before `step` has already been applied to disk.
    #[error("{} failed for {}: {source}", .step.as_str(), .path.display())]
    FilesystemWrite {
        /// The step that failed.
        step: GenerationStep,
        /// The file or directory being written.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    // ==================== Search Errors ====================
    /// The localisation root does not exist or is not a directory.
    #[error("localisation directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
}

/// A specialized Result type for `HoiForge` operations.
pub type Result<T> = std::result::Result<T, Error>;
