//! Manifest output for filtering runs.
//!
//! Writes the matched-file manifest and the skipped-empty report as CSV.
//! Both manifests carry fixed headers that are written even when no records
//! qualify, so downstream consumers always see the schema.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while writing manifests.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Header columns of the matched-file manifest.
pub const MANIFEST_HEADER: [&str; 3] = ["ticker", "file_name", "file_path"];

/// Header columns of the skipped-empty report.
pub const EMPTY_REPORT_HEADER: [&str; 2] = ["file_name", "file_path"];

/// Default file name of the skipped-empty report.
pub const EMPTY_REPORT_FILE_NAME: &str = "empty_files_skipped.csv";

/// A matched, non-empty stock file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileRecord {
    /// Ticker derived from the file name.
    pub ticker: String,

    /// Bare file name.
    pub file_name: String,

    /// Resolved absolute path to the file.
    pub file_path: String,
}

impl FileRecord {
    /// Create a new file record.
    pub const fn new(ticker: String, file_name: String, file_path: String) -> Self {
        Self {
            ticker,
            file_name,
            file_path,
        }
    }
}

/// An empty candidate file observed during a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmptyFileRecord {
    /// Bare file name.
    pub file_name: String,

    /// Resolved absolute path to the file.
    pub file_path: String,
}

impl EmptyFileRecord {
    /// Create a new empty-file record.
    pub const fn new(file_name: String, file_path: String) -> Self {
        Self {
            file_name,
            file_path,
        }
    }
}

/// Path of the skipped-empty report, placed beside a manifest.
pub fn empty_report_path(manifest_path: &Path) -> PathBuf {
    manifest_path.parent().map_or_else(
        || PathBuf::from(EMPTY_REPORT_FILE_NAME),
        |parent| parent.join(EMPTY_REPORT_FILE_NAME),
    )
}

/// Write the matched-file manifest.
///
/// Parent directories are created as needed. An empty record list still
/// produces a manifest holding only the header row.
///
/// # Errors
///
/// Returns an error if directory creation, serialization, or file writing
/// fails.
pub fn write_manifest(path: &Path, records: &[FileRecord]) -> Result<(), ManifestError> {
    create_parent_dirs(path)?;

    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    wtr.write_record(MANIFEST_HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the skipped-empty report.
///
/// # Errors
///
/// Returns an error if directory creation, serialization, or file writing
/// fails.
pub fn write_empty_report(path: &Path, records: &[EmptyFileRecord]) -> Result<(), ManifestError> {
    create_parent_dirs(path)?;

    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    wtr.write_record(EMPTY_REPORT_HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

fn create_parent_dirs(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_out_dir(name: &str) -> PathBuf {
        let dir =
            std::env::temp_dir().join(format!("hobart_manifest_{}_{}", std::process::id(), name));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_empty_manifest_still_has_header() {
        let dir = temp_out_dir("empty");
        let path = dir.join("manifest.csv");

        write_manifest(&path, &[]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "ticker,file_name,file_path\n");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_manifest_rows_follow_header() {
        let dir = temp_out_dir("rows");
        let path = dir.join("manifest.csv");

        let records = vec![
            FileRecord::new(
                "AAPL".to_string(),
                "aapl.us.txt".to_string(),
                "/data/aapl.us.txt".to_string(),
            ),
            FileRecord::new(
                "MSFT".to_string(),
                "msft.us.txt".to_string(),
                "/data/msft.us.txt".to_string(),
            ),
        ];
        write_manifest(&path, &records).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ticker,file_name,file_path");
        assert_eq!(lines[1], "AAPL,aapl.us.txt,/data/aapl.us.txt");
        assert_eq!(lines[2], "MSFT,msft.us.txt,/data/msft.us.txt");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_manifest_creates_parent_dirs() {
        let dir = temp_out_dir("parents");
        let path = dir.join("nested/deeper/manifest.csv");

        write_manifest(&path, &[]).unwrap();
        assert!(path.exists());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_manifest_is_idempotent() {
        let dir = temp_out_dir("idempotent");
        let path = dir.join("manifest.csv");
        let records = vec![FileRecord::new(
            "AAPL".to_string(),
            "aapl.us.txt".to_string(),
            "/data/aapl.us.txt".to_string(),
        )];

        write_manifest(&path, &records).unwrap();
        let first = fs::read(&path).unwrap();
        write_manifest(&path, &records).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_empty_report_header_and_rows() {
        let dir = temp_out_dir("report");
        let path = dir.join(EMPTY_REPORT_FILE_NAME);

        let records = vec![EmptyFileRecord::new(
            "zzz.us.txt".to_string(),
            "/data/zzz.us.txt".to_string(),
        )];
        write_empty_report(&path, &records).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "file_name,file_path");
        assert_eq!(lines[1], "zzz.us.txt,/data/zzz.us.txt");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_empty_report_path_sits_beside_manifest() {
        let manifest = Path::new("data/processed/sp500_filtered_files.csv");
        assert_eq!(
            empty_report_path(manifest),
            Path::new("data/processed").join(EMPTY_REPORT_FILE_NAME)
        );
    }
}
