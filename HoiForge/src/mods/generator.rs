//! Country file generation
//!
//! Writes the four artifacts a new country needs inside a mod:
//!
//! - `common/countries/<Name>.txt` - graphical culture and map color
//! - `history/countries/<TAG> - <Name>.txt` - starting capital and research slots
//! - `common/countries/colors.txt` - shared color registry (appended)
//! - `common/country_tags/02_countries.txt` - shared tag registry (appended)
//!
//! The steps run in order with no rollback. If one fails, the returned
//! [`Error::FilesystemWrite`] names it and every earlier step stays on disk.
//! The registries are append-only, so generating the same tag twice leaves
//! two rows in each.

use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Error, Result};

use super::country::CountryDefinition;
use super::types::{GenerationProgress, GenerationProgressCallback, GenerationStep};

const COUNTRIES_DIR: [&str; 2] = ["common", "countries"];
const HISTORY_DIR: [&str; 2] = ["history", "countries"];
const COUNTRY_TAGS_DIR: [&str; 2] = ["common", "country_tags"];

const COLORS_FILE: &str = "colors.txt";
const TAGS_FILE: &str = "02_countries.txt";

/// Starter history applied to every new country
const HISTORY_CONTENT: &str = "capital = 1\nset_research_slots = 3\n";

/// Serializes registry appends so concurrent callers never interleave lines
static REGISTRY_LOCK: Mutex<()> = Mutex::new(());

/// Paths written by a successful generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCountry {
    pub country_file: PathBuf,
    pub history_file: PathBuf,
    pub colors_file: PathBuf,
    pub tags_file: PathBuf,
}

/// Generate all files for `definition` under `mod_root`
pub fn generate_country(mod_root: &Path, definition: &CountryDefinition) -> Result<GeneratedCountry> {
    generate_country_with_progress(mod_root, definition, &|_| {})
}

/// Generate all files for `definition` under `mod_root` with a progress callback
pub fn generate_country_with_progress(
    mod_root: &Path,
    definition: &CountryDefinition,
    progress: GenerationProgressCallback,
) -> Result<GeneratedCountry> {
    if mod_root.as_os_str().is_empty() {
        return Err(Error::ModPathNotSet);
    }

    let countries_dir = join_all(mod_root, &COUNTRIES_DIR);
    let history_dir = join_all(mod_root, &HISTORY_DIR);
    let tags_dir = join_all(mod_root, &COUNTRY_TAGS_DIR);

    let artifacts = GeneratedCountry {
        country_file: countries_dir.join(definition.country_file_name()),
        history_file: history_dir.join(definition.history_file_name()),
        colors_file: countries_dir.join(COLORS_FILE),
        tags_file: tags_dir.join(TAGS_FILE),
    };

    // 1. Directories
    progress(&GenerationProgress::new(GenerationStep::CreateDirectories));
    for dir in [&countries_dir, &history_dir, &tags_dir] {
        fs::create_dir_all(dir).map_err(|e| write_error(GenerationStep::CreateDirectories, dir, e))?;
    }

    // 2. Country definition
    report(progress, GenerationStep::CountryFile, &artifacts.country_file);
    fs::write(&artifacts.country_file, country_content(definition))
        .map_err(|e| write_error(GenerationStep::CountryFile, &artifacts.country_file, e))?;

    // 3. History
    report(progress, GenerationStep::HistoryFile, &artifacts.history_file);
    fs::write(&artifacts.history_file, HISTORY_CONTENT)
        .map_err(|e| write_error(GenerationStep::HistoryFile, &artifacts.history_file, e))?;

    // 4. Color registry
    report(progress, GenerationStep::ColorRegistry, &artifacts.colors_file);
    append_to_registry(&artifacts.colors_file, &color_registry_line(definition))
        .map_err(|e| write_error(GenerationStep::ColorRegistry, &artifacts.colors_file, e))?;

    // 5. Tag registry
    report(progress, GenerationStep::TagRegistry, &artifacts.tags_file);
    append_to_registry(&artifacts.tags_file, &tag_registry_line(definition))
        .map_err(|e| write_error(GenerationStep::TagRegistry, &artifacts.tags_file, e))?;

    tracing::info!(
        "Created country {} ({}) in {}",
        definition.name,
        definition.tag,
        mod_root.display()
    );

    Ok(artifacts)
}

/// Content of `common/countries/<Name>.txt`
#[must_use]
pub fn country_content(definition: &CountryDefinition) -> String {
    format!(
        "graphical_culture = {}\ngraphical_culture_2d = {}\ncolor = {{ {} }}\n",
        definition.culture.gfx_3d(),
        definition.culture.gfx_2d(),
        definition.color
    )
}

/// Block appended to `colors.txt`, led by a blank line
#[must_use]
pub fn color_registry_line(definition: &CountryDefinition) -> String {
    format!(
        "\n{tag} = {{ color = rgb {{ {color} }} color_ui = rgb {{ {color} }} }}\n",
        tag = definition.tag,
        color = definition.color
    )
}

/// Line appended to `02_countries.txt`
#[must_use]
pub fn tag_registry_line(definition: &CountryDefinition) -> String {
    format!(
        "{} = \"countries/{}\"\n",
        definition.tag,
        definition.country_file_name()
    )
}

fn join_all(root: &Path, parts: &[&str]) -> PathBuf {
    parts.iter().fold(root.to_path_buf(), |path, part| path.join(part))
}

fn report(progress: GenerationProgressCallback, step: GenerationStep, file: &Path) {
    tracing::debug!("{}: {}", step.as_str(), file.display());
    progress(&GenerationProgress::with_file(
        step,
        file.to_string_lossy(),
    ));
}

fn write_error(step: GenerationStep, path: &Path, source: std::io::Error) -> Error {
    Error::FilesystemWrite {
        step,
        path: path.to_path_buf(),
        source,
    }
}

/// Append `line` to a registry file, creating it if needed
///
/// A newline is inserted first when the existing file does not end with one,
/// so the new row never merges into the previous line.
fn append_to_registry(path: &Path, line: &str) -> std::io::Result<()> {
    let _guard = REGISTRY_LOCK
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);

    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path)?;

    let needs_separator = if file.metadata()?.len() == 0 || line.starts_with('\n') {
        false
    } else {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        last[0] != b'\n'
    };

    if needs_separator {
        file.write_all(b"\n")?;
    }
    file.write_all(line.as_bytes())
}
