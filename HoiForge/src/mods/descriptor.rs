//! `.mod` descriptor reading
//!
//! Only two assignments matter here: `path="..."` (where the mod lives) and
//! the optional `name="..."`. Everything else in the descriptor is ignored.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

static PATH_PATTERN: OnceLock<Regex> = OnceLock::new();
static NAME_PATTERN: OnceLock<Regex> = OnceLock::new();

// `\b` keeps `replace_path="..."` from being taken as the mod path
fn path_pattern() -> &'static Regex {
    PATH_PATTERN.get_or_init(|| Regex::new(r#"\bpath="(.+?)""#).expect("valid path pattern"))
}

fn name_pattern() -> &'static Regex {
    NAME_PATTERN.get_or_init(|| Regex::new(r#"\bname="(.+?)""#).expect("valid name pattern"))
}

/// Extract the mod directory from descriptor text
///
/// Returns the value of the first `path="..."` assignment, or
/// [`Error::DescriptorPatternNotFound`] when there is none.
pub fn extract_path(contents: &str) -> Result<String> {
    first_capture(path_pattern(), contents).ok_or(Error::DescriptorPatternNotFound)
}

fn first_capture(pattern: &Regex, contents: &str) -> Option<String> {
    pattern
        .captures(contents)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// The parts of a `.mod` descriptor this tool uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModDescriptor {
    /// Raw `path` value, absolute or relative to the game's user directory
    pub path: String,
    /// Display name, if the descriptor has one
    pub name: Option<String>,
}

impl ModDescriptor {
    /// Parse descriptor text
    pub fn parse(contents: &str) -> Result<Self> {
        let contents = contents.trim_start_matches('\u{feff}');
        Ok(Self {
            path: extract_path(contents)?,
            name: first_capture(name_pattern(), contents),
        })
    }

    /// Read and parse a descriptor file
    pub fn from_file(descriptor: &Path) -> Result<Self> {
        let contents = fs::read_to_string(descriptor)?;
        let parsed = Self::parse(&contents)?;
        tracing::debug!(
            "Descriptor {} points at {}",
            descriptor.display(),
            parsed.path
        );
        Ok(parsed)
    }

    /// Resolve the mod root directory
    ///
    /// Absolute paths are returned unchanged. Relative paths (such as
    /// `mod/MyMod`) are resolved against the directory that contains the
    /// descriptor's `mod/` folder, the same way the game launcher does.
    #[must_use]
    pub fn resolve_root(&self, descriptor: &Path) -> PathBuf {
        let path = Path::new(&self.path);
        if path.is_absolute() {
            return path.to_path_buf();
        }

        let user_dir = descriptor
            .parent()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new(""));
        user_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extract_single_path() {
        let text = "version=\"1.0\"\npath=\"C:/Users/me/Documents/Paradox Interactive/Hearts of Iron IV/mod/mymod\"\nname=\"My Mod\"\n";
        assert_eq!(
            extract_path(text).unwrap(),
            "C:/Users/me/Documents/Paradox Interactive/Hearts of Iron IV/mod/mymod"
        );
    }

    #[test]
    fn test_extract_missing_path() {
        assert!(matches!(
            extract_path("name=\"No path here\"\n"),
            Err(Error::DescriptorPatternNotFound)
        ));
        assert!(matches!(extract_path(""), Err(Error::DescriptorPatternNotFound)));
        // Empty value does not count
        assert!(matches!(extract_path("path=\"\""), Err(Error::DescriptorPatternNotFound)));
    }

    #[test]
    fn test_extract_takes_first_of_many() {
        let text = "path=\"first/mod\"\npath=\"second/mod\"\n";
        assert_eq!(extract_path(text).unwrap(), "first/mod");
    }

    #[test]
    fn test_replace_path_is_not_the_mod_path() {
        let text = "replace_path=\"history/states\"\npath=\"mod/real\"\n";
        assert_eq!(extract_path(text).unwrap(), "mod/real");
    }

    #[test]
    fn test_parse_descriptor_with_bom_and_name() {
        let desc = ModDescriptor::parse("\u{feff}name=\"Cool Mod\"\npath=\"mod/cool\"\n").unwrap();
        assert_eq!(desc.path, "mod/cool");
        assert_eq!(desc.name.as_deref(), Some("Cool Mod"));

        let unnamed = ModDescriptor::parse("path=\"mod/cool\"").unwrap();
        assert_eq!(unnamed.name, None);
    }

    #[test]
    fn test_resolve_root() {
        let descriptor = Path::new("/docs/Hearts of Iron IV/mod/cool.mod");

        let relative = ModDescriptor::parse("path=\"mod/cool\"").unwrap();
        assert_eq!(
            relative.resolve_root(descriptor),
            Path::new("/docs/Hearts of Iron IV/mod/cool")
        );

        let absolute_text = if cfg!(windows) {
            "path=\"C:\\mods\\cool\""
        } else {
            "path=\"/mods/cool\""
        };
        let absolute = ModDescriptor::parse(absolute_text).unwrap();
        assert_eq!(absolute.resolve_root(descriptor), PathBuf::from(&absolute.path));
    }

    #[test]
    fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("cool.mod");
        fs::write(&file, "name=\"Cool\"\npath=\"mod/cool\"\n").unwrap();

        let desc = ModDescriptor::from_file(&file).unwrap();
        assert_eq!(desc.path, "mod/cool");

        let missing = ModDescriptor::from_file(&temp.path().join("missing.mod"));
        assert!(matches!(missing, Err(Error::Io(_))));
    }
}
