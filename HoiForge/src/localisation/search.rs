//! Recursive, comment-aware localisation search
//!
//! Walks every `.yml` file under a root in file-name order and yields each
//! line whose comment-free text contains the query, ignoring case. Files that
//! cannot be read are logged and skipped; the walk carries on.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use walkdir::WalkDir;

use crate::error::{Error, Result};

use super::types::{LocalisationMatch, SearchReport};

/// Extension of localisation files (the game only loads lowercase `.yml`)
pub const LOCALISATION_EXTENSION: &str = ".yml";

/// Starts a line comment
const COMMENT_MARKER: char = '#';

/// Start a search of `root` for `query`
///
/// Fails with [`Error::DirectoryNotFound`] before yielding anything when
/// `root` is not an existing directory. An empty query yields no matches.
pub fn search(root: &Path, query: &str) -> Result<LocalisationSearch> {
    if !root.is_dir() {
        return Err(Error::DirectoryNotFound(root.to_path_buf()));
    }

    let walker = if query.is_empty() {
        None
    } else {
        Some(WalkDir::new(root).sort_by_file_name().into_iter())
    };

    Ok(LocalisationSearch {
        query: query.to_lowercase(),
        walker,
        current: None,
        files_scanned: 0,
        files_skipped: 0,
        cancel: None,
    })
}

/// Run a search to completion and collect the results
pub fn search_all(root: &Path, query: &str) -> Result<SearchReport> {
    let mut search = search(root, query)?;
    let matches: Vec<_> = search.by_ref().collect();

    tracing::info!(
        "Found {} matches for {:?} in {} files ({} skipped)",
        matches.len(),
        query,
        search.files_scanned(),
        search.files_skipped()
    );

    Ok(SearchReport {
        matches,
        files_scanned: search.files_scanned(),
        files_skipped: search.files_skipped(),
    })
}

/// Comment-free, trimmed text of `line` if it contains `query_lower`
fn match_line(line: &str, query_lower: &str) -> Option<String> {
    let code = line.split(COMMENT_MARKER).next().unwrap_or_default();
    let clean = code.trim_start_matches('\u{feff}').trim();
    clean
        .to_lowercase()
        .contains(query_lower)
        .then(|| clean.to_string())
}

/// File currently being read
struct OpenFile {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_number: usize,
}

/// Lazy search over a localisation tree
///
/// Produced by [`search`]. Yields matches file by file, top to bottom within
/// each file. Single pass: once exhausted it stays exhausted.
pub struct LocalisationSearch {
    query: String,
    walker: Option<walkdir::IntoIter>,
    current: Option<OpenFile>,
    files_scanned: usize,
    files_skipped: usize,
    cancel: Option<Arc<AtomicBool>>,
}

impl LocalisationSearch {
    /// Stop yielding once `flag` is set
    #[must_use]
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Number of files read to the end so far
    #[must_use]
    pub fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    /// Number of files skipped because of read errors so far
    #[must_use]
    pub fn files_skipped(&self) -> usize {
        self.files_skipped
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Open the next localisation file, or return false when the walk is done
    fn advance_file(&mut self) -> bool {
        let Some(walker) = self.walker.as_mut() else {
            return false;
        };

        loop {
            let entry = match walker.next() {
                None => {
                    self.walker = None;
                    return false;
                }
                Some(Err(e)) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
                Some(Ok(entry)) => entry,
            };

            if !entry.file_type().is_file()
                || !entry
                    .file_name()
                    .to_string_lossy()
                    .ends_with(LOCALISATION_EXTENSION)
            {
                continue;
            }

            match File::open(entry.path()) {
                Ok(file) => {
                    self.current = Some(OpenFile {
                        path: entry.into_path(),
                        lines: BufReader::new(file).lines(),
                        line_number: 0,
                    });
                    return true;
                }
                Err(e) => {
                    tracing::warn!("Failed to open {}: {}", entry.path().display(), e);
                    self.files_skipped += 1;
                }
            }
        }
    }
}

impl Iterator for LocalisationSearch {
    type Item = LocalisationMatch;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.is_cancelled() {
                self.walker = None;
                self.current = None;
                return None;
            }

            let Some(file) = self.current.as_mut() else {
                if self.advance_file() {
                    continue;
                }
                return None;
            };

            match file.lines.next() {
                Some(Ok(line)) => {
                    file.line_number += 1;
                    if let Some(line_text) = match_line(&line, &self.query) {
                        return Some(LocalisationMatch {
                            line_text,
                            source_file: file.path.clone(),
                            line_number: file.line_number,
                        });
                    }
                }
                Some(Err(e)) => {
                    tracing::warn!(
                        "Failed to read {} after line {}: {}",
                        file.path.display(),
                        file.line_number,
                        e
                    );
                    self.files_skipped += 1;
                    self.current = None;
                }
                None => {
                    self.files_scanned += 1;
                    self.current = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &[u8]) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_match_line_strips_comment_and_whitespace() {
        assert_eq!(
            match_line("  Some Text # a comment", "text").as_deref(),
            Some("Some Text")
        );
        assert_eq!(match_line("# only a comment with text", "text"), None);
        assert_eq!(match_line("\u{feff}l_english:", "english").as_deref(), Some("l_english:"));
        assert_eq!(match_line("nothing here", "text"), None);
    }

    #[test]
    fn test_single_match_with_comment() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "english/test_l_english.yml", b"Some Text # a comment\n");

        let matches: Vec<_> = search(temp.path(), "text").unwrap().collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].line_text, "Some Text");
        assert_eq!(matches[0].line_number, 1);
        assert_eq!(
            matches[0].source_file,
            temp.path().join("english/test_l_english.yml")
        );
    }

    #[test]
    fn test_case_insensitive_and_line_numbers() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "countries_l_english.yml",
            "l_english:\n GER:0 \"German Reich\"\n # GERMAN comment\n GER_ADJ:0 \"GERMAN\"\n".as_bytes(),
        );

        let matches: Vec<_> = search(temp.path(), "german").unwrap().collect();
        let lines: Vec<_> = matches.iter().map(|m| m.line_number).collect();
        assert_eq!(lines, vec![2, 4]);
        assert_eq!(matches[1].line_text, "GER_ADJ:0 \"GERMAN\"");
    }

    #[test]
    fn test_only_yml_files_are_searched() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.yml", b"needle\n");
        write(temp.path(), "b.txt", b"needle\n");
        write(temp.path(), "c.yml.bak", b"needle\n");

        let mut search = search(temp.path(), "needle").unwrap();
        assert_eq!(search.by_ref().count(), 1);
        assert_eq!(search.files_scanned(), 1);
    }

    #[test]
    fn test_unreadable_file_is_skipped() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a_bad.yml", b"needle\n\xff\xfe broken\nneedle again\n");
        write(temp.path(), "b_good.yml", b"needle\n");

        let report = search_all(temp.path(), "needle").unwrap();
        // First line of the bad file is read before the decode error
        assert_eq!(report.matches.len(), 2);
        assert_eq!(report.files_scanned, 1);
        assert_eq!(report.files_skipped, 1);
        assert!(report.matches[1].source_file.ends_with("b_good.yml"));
    }

    #[cfg(unix)]
    #[test]
    fn test_unopenable_file_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        write(temp.path(), "a_locked.yml", b"needle\n");
        write(temp.path(), "b_good.yml", b"needle\n");
        let locked = temp.path().join("a_locked.yml");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not apply to root
        if File::open(&locked).is_ok() {
            return;
        }

        let report = search_all(temp.path(), "needle").unwrap();
        assert_eq!(report.files_skipped, 1);
        assert_eq!(report.files_scanned, 1);
        assert_eq!(report.matches.len(), 1);
        assert!(report.matches[0].source_file.ends_with("b_good.yml"));

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let temp = TempDir::new().unwrap();
        assert!(search_all(temp.path(), "anything").unwrap().is_empty());

        write(temp.path(), "a.yml", b"l_english:\n");
        assert!(search_all(temp.path(), "absent").unwrap().is_empty());
    }

    #[test]
    fn test_missing_root_is_directory_not_found() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        assert!(matches!(
            search(&missing, "x"),
            Err(Error::DirectoryNotFound(ref p)) if *p == missing
        ));

        write(temp.path(), "file.yml", b"x\n");
        assert!(matches!(
            search(&temp.path().join("file.yml"), "x"),
            Err(Error::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_empty_query_yields_nothing() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.yml", b"text\n");
        assert_eq!(search(temp.path(), "").unwrap().count(), 0);
    }

    #[test]
    fn test_cancel_stops_search() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.yml", b"hit\nhit\nhit\n");

        let flag = Arc::new(AtomicBool::new(false));
        let mut search = search(temp.path(), "hit").unwrap().with_cancel(Arc::clone(&flag));
        assert!(search.next().is_some());

        flag.store(true, Ordering::Relaxed);
        assert!(search.next().is_none());
        flag.store(false, Ordering::Relaxed);
        assert!(search.next().is_none());
    }

    #[test]
    fn test_files_visited_in_name_order() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "b.yml", b"hit\n");
        write(temp.path(), "a.yml", b"hit\n");
        write(temp.path(), "c/a.yml", b"hit\n");

        let files: Vec<_> = search(temp.path(), "hit")
            .unwrap()
            .map(|m| m.source_file)
            .collect();
        assert_eq!(
            files,
            vec![
                temp.path().join("a.yml"),
                temp.path().join("b.yml"),
                temp.path().join("c").join("a.yml"),
            ]
        );
    }
}
