//! Run summary reporting.
//!
//! The summary is an ephemeral aggregate of one filtering run. It is printed
//! for the operator (text or JSON) and never persisted as structured data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary of one filtering run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Stocks directory that was scanned.
    pub stocks_dir: String,

    /// Number of reference symbols loaded.
    pub symbols_loaded: usize,

    /// Total candidate stock files found.
    pub files_found: usize,

    /// Total empty files found.
    pub empty_files: usize,

    /// Empty-file handling mode selected ("ignore" or "skip").
    pub mode: String,

    /// Matched valid files written to the manifest.
    pub matched_valid: usize,

    /// Matched symbols whose files were empty.
    pub matched_empty: usize,

    /// Manifest output path.
    pub output_file: String,

    /// Skipped-empty report path, when one was written.
    pub empty_report: Option<String>,

    /// Number of files copied, when a copy destination was supplied.
    pub copied: Option<usize>,

    /// Copy destination directory, when supplied.
    pub copy_dir: Option<String>,

    /// Summary generation timestamp.
    pub generated_at: DateTime<Utc>,
}

impl RunSummary {
    /// Convert the summary to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Filter Summary ---")?;
        writeln!(f, "Stocks directory: {}", self.stocks_dir)?;
        writeln!(f, "Symbols loaded: {}", self.symbols_loaded)?;
        writeln!(f, "Total stock files found: {}", self.files_found)?;
        writeln!(f, "Total empty files found: {}", self.empty_files)?;
        writeln!(f, "Empty-file handling mode: {}", self.mode)?;
        writeln!(f, "Matched valid files: {}", self.matched_valid)?;
        writeln!(f, "Output file: {}", self.output_file)?;
        if let Some(report) = &self.empty_report {
            writeln!(f, "Skipped empty-file report: {report}")?;
        }
        if self.matched_empty > 0 {
            writeln!(f, "Matched symbols with empty files: {}", self.matched_empty)?;
        }
        if let Some(copied) = self.copied {
            writeln!(f, "Copied files: {copied}")?;
        }
        if let Some(dir) = &self.copy_dir {
            writeln!(f, "Copy directory: {dir}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> RunSummary {
        RunSummary {
            stocks_dir: "/data/raw/Stocks".to_string(),
            symbols_loaded: 503,
            files_found: 7195,
            empty_files: 12,
            mode: "ignore".to_string(),
            matched_valid: 498,
            matched_empty: 0,
            output_file: "/data/processed/sp500_filtered_files.csv".to_string(),
            empty_report: None,
            copied: None,
            copy_dir: None,
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_display_core_lines() {
        let summary = sample_summary();
        let text = summary.to_string();

        assert!(text.contains("--- Filter Summary ---"));
        assert!(text.contains("Symbols loaded: 503"));
        assert!(text.contains("Total stock files found: 7195"));
        assert!(text.contains("Empty-file handling mode: ignore"));
        assert!(text.contains("Matched valid files: 498"));
    }

    #[test]
    fn test_display_omits_inapplicable_lines() {
        let summary = sample_summary();
        let text = summary.to_string();

        assert!(!text.contains("Matched symbols with empty files"));
        assert!(!text.contains("Copied files"));
        assert!(!text.contains("Skipped empty-file report"));
    }

    #[test]
    fn test_display_conditional_lines() {
        let mut summary = sample_summary();
        summary.mode = "skip".to_string();
        summary.matched_empty = 5;
        summary.empty_report = Some("/data/processed/empty_files_skipped.csv".to_string());
        summary.copied = Some(498);
        summary.copy_dir = Some("/data/processed/sp500".to_string());

        let text = summary.to_string();
        assert!(text.contains("Matched symbols with empty files: 5"));
        assert!(text.contains("Skipped empty-file report: /data/processed/empty_files_skipped.csv"));
        assert!(text.contains("Copied files: 498"));
        assert!(text.contains("Copy directory: /data/processed/sp500"));
    }

    #[test]
    fn test_json_round_trip() {
        let summary = sample_summary();
        let json = summary.to_json().unwrap();

        assert!(json.contains("\"symbols_loaded\": 503"));
        assert!(json.contains("\"mode\": \"ignore\""));

        let parsed: RunSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.symbols_loaded, summary.symbols_loaded);
        assert_eq!(parsed.matched_valid, summary.matched_valid);
        assert_eq!(parsed.mode, summary.mode);
    }
}
