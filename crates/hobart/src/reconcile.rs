//! Reconciliation of discovered stock files against a reference universe.
//!
//! This is the core of the filtering run: candidate files are partitioned
//! into matched-valid records, empty files, and the matched-empty subset,
//! and the empty-file handling mode for the run is selected from a count
//! threshold.

use crate::universe::Universe;
use hobart_data::discover::CandidateFile;
use hobart_output::manifest::{EmptyFileRecord, FileRecord};
use std::fmt;

/// Default number of empty files tolerated before a run switches to
/// explicit skip/report mode.
pub const DEFAULT_EMPTY_THRESHOLD: usize = 50;

/// How empty candidate files are handled for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyFileMode {
    /// Empty files are dropped silently.
    Ignore,

    /// Empty files are dropped and reported explicitly.
    Skip,
}

impl EmptyFileMode {
    /// Select the mode for a run from the total empty-file count.
    ///
    /// Counts up to and including `threshold` stay in [`Self::Ignore`];
    /// anything above switches the run to [`Self::Skip`].
    pub const fn select(empty_count: usize, threshold: usize) -> Self {
        if empty_count <= threshold {
            Self::Ignore
        } else {
            Self::Skip
        }
    }

    /// Short name used in run summaries.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for EmptyFileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of reconciling candidate files against a universe.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    /// Matched, non-empty files, sorted by ticker ascending.
    pub records: Vec<FileRecord>,

    /// Every empty candidate file, matched or not.
    pub empty_files: Vec<EmptyFileRecord>,

    /// Empty candidate files whose ticker is in the universe.
    pub matched_empty: Vec<EmptyFileRecord>,

    /// Empty-file handling mode selected for this run.
    pub mode: EmptyFileMode,
}

impl Reconciliation {
    /// Whether the skipped-empty report should be written.
    ///
    /// The report is a superset listing of every empty file, produced only
    /// in skip mode.
    pub fn wants_empty_report(&self) -> bool {
        self.mode == EmptyFileMode::Skip && !self.empty_files.is_empty()
    }
}

/// Partition candidate files against the reference universe.
///
/// Candidates are visited in the order given. An empty file never produces
/// a matched record, even when its ticker is in the universe; it lands in
/// the empty collection (and the matched-empty collection on a ticker
/// match) instead. Matched records are sorted by ticker ascending; each
/// qualifying file becomes one record, with no de-duplication by ticker.
pub fn reconcile<U: Universe>(
    candidates: &[CandidateFile],
    universe: &U,
    empty_threshold: usize,
) -> Reconciliation {
    let mut records = Vec::new();
    let mut empty_files = Vec::new();
    let mut matched_empty = Vec::new();

    for candidate in candidates {
        // Discovery never yields an empty ticker; guard for hand-built input.
        if candidate.ticker.is_empty() {
            continue;
        }

        if candidate.is_empty() {
            let record = EmptyFileRecord::new(
                candidate.file_name.clone(),
                candidate.path.display().to_string(),
            );
            if universe.contains(&candidate.ticker) {
                matched_empty.push(record.clone());
            }
            empty_files.push(record);
            continue;
        }

        if universe.contains(&candidate.ticker) {
            records.push(FileRecord::new(
                candidate.ticker.clone(),
                candidate.file_name.clone(),
                candidate.path.display().to_string(),
            ));
        }
    }

    records.sort_by(|a, b| a.ticker.cmp(&b.ticker));

    let mode = EmptyFileMode::select(empty_files.len(), empty_threshold);

    Reconciliation {
        records,
        empty_files,
        matched_empty,
        mode,
    }
}
