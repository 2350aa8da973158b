//! Mod utilities - descriptor reading and country scaffolding
//!
//! This module provides tools for working inside a HOI4 mod:
//! - Locate the mod directory from its `.mod` descriptor
//! - Validate country input (tag, name, color, graphical culture)
//! - Generate country definition, history and registry entries

pub mod country;
pub mod culture;
pub mod descriptor;
pub mod generator;
pub mod types;

pub use country::{CountryDefinition, CountryTag, Rgb};
pub use culture::GraphicalCulture;
pub use descriptor::{extract_path, ModDescriptor};
pub use generator::{generate_country, generate_country_with_progress, GeneratedCountry};
pub use types::{GenerationProgress, GenerationProgressCallback, GenerationStep};
