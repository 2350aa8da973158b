//! Country definition input
//!
//! A [`CountryDefinition`] can only be built from validated parts, so the
//! generator never touches the disk with an incomplete or malformed country.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

use super::culture::GraphicalCulture;

/// Characters the name and tag may not contain, since both become file names
const FORBIDDEN_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Expected tag length used by the game
const TAG_LENGTH: usize = 3;

/// Upper-cased country tag, e.g. `GER`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryTag(String);

impl CountryTag {
    /// Normalize and validate a tag
    ///
    /// The tag is trimmed and upper-cased. It ends up in a file name and in
    /// the registry rows, so characters unsafe there (including whitespace
    /// and control characters) are rejected. Other tags that are not three
    /// ASCII letters or digits are accepted with a warning.
    pub fn parse(raw: &str) -> Result<Self> {
        let tag = raw.trim().to_uppercase();
        if tag.is_empty() {
            return Err(Error::EmptyTag);
        }
        let unsafe_char = tag
            .chars()
            .find(|c| FORBIDDEN_NAME_CHARS.contains(c) || c.is_whitespace() || c.is_control());
        if let Some(invalid) = unsafe_char {
            return Err(Error::InvalidTag { tag, invalid });
        }
        if tag.chars().count() != TAG_LENGTH || !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            tracing::warn!(
                "Tag {:?} is not {} ASCII letters/digits; the game may reject it",
                tag,
                TAG_LENGTH
            );
        }
        Ok(Self(tag))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An RGB color with channels in `0..=255`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Rgb {
    /// Pure red, used when no color is given
    fn default() -> Self {
        Self::new(255, 0, 0)
    }
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from wide integers, rejecting anything outside `0..=255`
    pub fn from_components(r: i64, g: i64, b: i64) -> Result<Self> {
        Ok(Self {
            r: channel('R', r)?,
            g: channel('G', g)?,
            b: channel('B', b)?,
        })
    }

    /// `#rrggbb` form, for previews
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn channel(name: char, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::ColorOutOfRange {
        channel: name,
        value,
    })
}

impl fmt::Display for Rgb {
    /// Space-separated `R G B`, the form used inside `{ }` in game files
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parses `"R G B"` (spaces and/or commas) or `#rrggbb`
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();

        if let Some(hex) = text.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(Error::InvalidColor(s.to_string()));
            }
            let part = |i: usize| {
                u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| Error::InvalidColor(s.to_string()))
            };
            return Ok(Self::new(part(0)?, part(2)?, part(4)?));
        }

        let values = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<i64>().map_err(|_| Error::InvalidColor(s.to_string())))
            .collect::<Result<Vec<_>>>()?;

        match values.as_slice() {
            [r, g, b] => Self::from_components(*r, *g, *b),
            _ => Err(Error::InvalidColor(s.to_string())),
        }
    }
}

/// Everything needed to generate one country
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryDefinition {
    pub tag: CountryTag,
    pub name: String,
    pub color: Rgb,
    pub culture: GraphicalCulture,
}

impl CountryDefinition {
    /// Validate raw form input
    pub fn new(tag: &str, name: &str, color: Rgb, culture: GraphicalCulture) -> Result<Self> {
        let tag = CountryTag::parse(tag)?;

        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if let Some(invalid) = name.chars().find(|c| FORBIDDEN_NAME_CHARS.contains(c) || c.is_control()) {
            return Err(Error::InvalidName {
                name: name.to_string(),
                invalid,
            });
        }

        Ok(Self {
            tag,
            name: name.to_string(),
            color,
            culture,
        })
    }

    /// File name of the country definition, `<Name>.txt`
    #[must_use]
    pub fn country_file_name(&self) -> String {
        format!("{}.txt", self.name)
    }

    /// File name of the history file, `<TAG> - <Name>.txt`
    #[must_use]
    pub fn history_file_name(&self) -> String {
        format!("{} - {}.txt", self.tag, self.name)
    }
}
