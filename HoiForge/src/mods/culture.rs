//! Graphical culture table
//!
//! Each culture selects the 3D unit models and 2D portraits a country uses.
//! The game identifiers are written verbatim into the country file.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Visual style category of a country
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphicalCulture {
    EasternEuropean,
    African,
    MiddleEastern,
    Asian,
    SouthAmerican,
    Commonwealth,
    #[default]
    WesternEuropean,
}

/// One row of the culture table
struct CultureEntry {
    culture: GraphicalCulture,
    key: &'static str,
    label: &'static str,
    gfx_3d: &'static str,
    gfx_2d: &'static str,
}

/// Indexed by `GraphicalCulture as usize`
static CULTURE_TABLE: [CultureEntry; 7] = [
    CultureEntry {
        culture: GraphicalCulture::EasternEuropean,
        key: "eastern_european",
        label: "Eastern European",
        gfx_3d: "eastern_european_gfx",
        gfx_2d: "eastern_european_2d",
    },
    CultureEntry {
        culture: GraphicalCulture::African,
        key: "african",
        label: "African",
        gfx_3d: "african_gfx",
        gfx_2d: "african_2d",
    },
    CultureEntry {
        culture: GraphicalCulture::MiddleEastern,
        key: "middle_eastern",
        label: "Middle Eastern",
        gfx_3d: "middle_eastern_gfx",
        gfx_2d: "middle_eastern_2d",
    },
    CultureEntry {
        culture: GraphicalCulture::Asian,
        key: "asian",
        label: "Asian",
        gfx_3d: "asian_gfx",
        gfx_2d: "asian_2d",
    },
    CultureEntry {
        culture: GraphicalCulture::SouthAmerican,
        key: "south_american",
        label: "South American",
        gfx_3d: "southamerican_gfx",
        gfx_2d: "southamerican_2d",
    },
    CultureEntry {
        culture: GraphicalCulture::Commonwealth,
        key: "commonwealth",
        label: "Commonwealth (British)",
        gfx_3d: "commonwealth_gfx",
        gfx_2d: "commonwealth_2d",
    },
    CultureEntry {
        culture: GraphicalCulture::WesternEuropean,
        key: "western_european",
        label: "Western European",
        gfx_3d: "western_european_gfx",
        gfx_2d: "western_european_2d",
    },
];

impl GraphicalCulture {
    /// All cultures in table order
    pub const ALL: [GraphicalCulture; 7] = [
        Self::EasternEuropean,
        Self::African,
        Self::MiddleEastern,
        Self::Asian,
        Self::SouthAmerican,
        Self::Commonwealth,
        Self::WesternEuropean,
    ];

    fn entry(self) -> &'static CultureEntry {
        &CULTURE_TABLE[self as usize]
    }

    /// Stable identifier accepted on the command line
    #[must_use]
    pub fn key(self) -> &'static str {
        self.entry().key
    }

    /// Human-readable name
    #[must_use]
    pub fn label(self) -> &'static str {
        self.entry().label
    }

    /// `graphical_culture` value (3D models)
    #[must_use]
    pub fn gfx_3d(self) -> &'static str {
        self.entry().gfx_3d
    }

    /// `graphical_culture_2d` value (2D portraits)
    #[must_use]
    pub fn gfx_2d(self) -> &'static str {
        self.entry().gfx_2d
    }
}

impl fmt::Display for GraphicalCulture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GraphicalCulture {
    type Err = Error;

    /// Accepts a key or a label, ignoring case and `_`/`-`/space differences
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        CULTURE_TABLE
            .iter()
            .find(|entry| normalize(entry.key) == wanted || normalize(entry.label) == wanted)
            .map(|entry| entry.culture)
            .ok_or_else(|| Error::UnknownCulture(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_culture_has_a_row() {
        for culture in GraphicalCulture::ALL {
            assert_eq!(culture.entry().culture, culture);
        }
    }

    #[test]
    fn test_gfx_ids() {
        assert_eq!(GraphicalCulture::SouthAmerican.gfx_3d(), "southamerican_gfx");
        assert_eq!(GraphicalCulture::SouthAmerican.gfx_2d(), "southamerican_2d");
        assert_eq!(GraphicalCulture::Commonwealth.gfx_3d(), "commonwealth_gfx");
        assert_eq!(GraphicalCulture::default().gfx_2d(), "western_european_2d");
    }

    #[test]
    fn test_parse_key_and_label() {
        assert_eq!(
            "middle_eastern".parse::<GraphicalCulture>().unwrap(),
            GraphicalCulture::MiddleEastern
        );
        assert_eq!(
            "Eastern European".parse::<GraphicalCulture>().unwrap(),
            GraphicalCulture::EasternEuropean
        );
        assert_eq!(
            " south-american ".parse::<GraphicalCulture>().unwrap(),
            GraphicalCulture::SouthAmerican
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "martian".parse::<GraphicalCulture>().unwrap_err();
        assert!(matches!(err, Error::UnknownCulture(ref s) if s == "martian"));
        assert!("".parse::<GraphicalCulture>().is_err());
        // Raw game identifiers are not culture choices
        assert!("asian_gfx".parse::<GraphicalCulture>().is_err());
    }
}
