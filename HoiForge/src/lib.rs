//! # HoiForge
//!
//! Helpers for Hearts of Iron IV modding.
//!
//! ## Features
//!
//! - **Settings** - remember the game installation directory
//! - **Mod descriptors** - find a mod's directory from its `.mod` file
//! - **Country scaffolding** - generate country, history and registry entries
//! - **Localisation search** - find localisation lines by their text
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use hoiforge::prelude::*;
//!
//! let descriptor_file = Path::new("mod/mymod.mod");
//! let descriptor = ModDescriptor::from_file(descriptor_file)?;
//! let mod_root = descriptor.resolve_root(descriptor_file);
//!
//! let norway = CountryDefinition::new(
//!     "NOR",
//!     "Norway",
//!     "176 40 40".parse()?,
//!     GraphicalCulture::WesternEuropean,
//! )?;
//! generate_country(&mod_root, &norway)?;
//! # Ok::<(), hoiforge::Error>(())
//! ```

pub mod error;
pub mod localisation;
pub mod mods;
pub mod settings;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    pub use crate::settings::{localisation_dir, Settings, SettingsStore};

    pub use crate::mods::{
        extract_path, generate_country, generate_country_with_progress, CountryDefinition,
        CountryTag, GeneratedCountry, GenerationProgress, GenerationStep, GraphicalCulture,
        ModDescriptor, Rgb,
    };

    pub use crate::localisation::{
        search, search_all, LocalisationMatch, LocalisationSearch, SearchReport,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
