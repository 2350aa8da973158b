//! Types for localisation search results

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// A matching localisation line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalisationMatch {
    /// Line text with the comment removed and whitespace trimmed
    pub line_text: String,
    /// File the line came from
    pub source_file: PathBuf,
    /// 1-based line number
    pub line_number: usize,
}

impl fmt::Display for LocalisationMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (line {})",
            self.line_text,
            self.source_file.display(),
            self.line_number
        )
    }
}

/// Collected outcome of a full search
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchReport {
    pub matches: Vec<LocalisationMatch>,
    /// Files read to the end
    pub files_scanned: usize,
    /// Files that could not be opened or read completely
    pub files_skipped: usize,
}

impl SearchReport {
    /// True when the search found nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
