//! Candidate stock file discovery.
//!
//! Stock history files are named `<TICKER>.us.txt` (any casing). Discovery
//! enumerates a directory non-recursively, derives the ticker from each
//! qualifying file name, and records the file's resolved path and byte size.

use crate::error::{DataError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-name suffix that marks a stock history file.
pub const CANDIDATE_SUFFIX: &str = ".us.txt";

/// A stock history file discovered in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Ticker derived from the file name.
    pub ticker: String,

    /// Bare file name, as found on disk.
    pub file_name: String,

    /// Resolved absolute path to the file.
    pub path: PathBuf,

    /// File size in bytes.
    pub size: u64,
}

impl CandidateFile {
    /// Whether the file holds no data at all.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }
}

/// Derive a ticker from a stock file name.
///
/// A name qualifies only if its lower-cased form ends with `.us.txt`; the
/// ticker is the remaining prefix, upper-cased. Returns `None` for
/// non-qualifying names and for names that are nothing but the suffix.
pub fn extract_ticker(file_name: &str) -> Option<String> {
    let lower = file_name.to_ascii_lowercase();
    let stem = lower.strip_suffix(CANDIDATE_SUFFIX)?;
    if stem.is_empty() {
        return None;
    }
    Some(stem.to_uppercase())
}

/// Enumerate candidate stock files in a directory, sorted by file name.
///
/// Non-recursive. Entries whose names do not carry the candidate suffix are
/// ignored entirely; they are neither counted nor reported.
///
/// # Errors
///
/// Returns [`DataError::DirectoryNotFound`] if the directory is absent, and
/// propagates any filesystem error during enumeration.
pub fn discover_candidates(dir: &Path) -> Result<Vec<CandidateFile>> {
    if !dir.is_dir() {
        return Err(DataError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        let Some(ticker) = extract_ticker(&file_name) else {
            continue;
        };

        candidates.push(CandidateFile {
            ticker,
            file_name,
            path: fs::canonicalize(entry.path())?,
            size: metadata.len(),
        });
    }

    candidates.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("aapl.us.txt", Some("AAPL"))]
    #[case("AAPL.US.TXT", Some("AAPL"))]
    #[case("Aapl.Us.Txt", Some("AAPL"))]
    #[case("brk-b.us.txt", Some("BRK-B"))]
    #[case("aapl.txt", None)]
    #[case("aapl.us.csv", None)]
    #[case(".us.txt", None)]
    #[case("readme.md", None)]
    #[case("", None)]
    fn ticker_derivation(#[case] name: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_ticker(name).as_deref(), expected);
    }

    #[test]
    fn test_discovery_filters_and_sorts() {
        let dir = std::env::temp_dir().join(format!("hobart_discover_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        std::fs::write(dir.join("zzz.us.txt"), "").unwrap();
        std::fs::write(dir.join("aapl.us.txt"), "Date,Close\n2017-01-03,29.0\n").unwrap();
        std::fs::write(dir.join("notes.md"), "not a stock file").unwrap();

        let candidates = discover_candidates(&dir).unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].ticker, "AAPL");
        assert_eq!(candidates[0].file_name, "aapl.us.txt");
        assert!(!candidates[0].is_empty());
        assert_eq!(candidates[1].ticker, "ZZZ");
        assert_eq!(candidates[1].size, 0);
        assert!(candidates[1].is_empty());
        assert!(candidates[0].path.is_absolute());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_discovery_missing_directory() {
        let dir = std::env::temp_dir().join("hobart_no_such_dir");
        let err = discover_candidates(&dir).unwrap_err();

        assert!(matches!(err, DataError::DirectoryNotFound(_)));
    }
}
