//! Single-series loading and schema diagnostics.
//!
//! Loads one ticker's price history into a DataFrame, parses its `Date`
//! column, and reports missing values per column.

use crate::discover::CANDIDATE_SUFFIX;
use crate::error::{DataError, Result};
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// Column expected to hold trading dates in a stock history file.
pub const DATE_COLUMN: &str = "Date";

/// Resolve a ticker to its stock file path.
///
/// Tries the exact-uppercase file name first, then an all-lowercase variant.
/// When neither exists the uppercase candidate is returned anyway, so a
/// subsequent [`load_series`] fails with a clear not-found error rather than
/// silently trying further variants.
pub fn resolve_series_path(data_dir: &Path, ticker: &str) -> PathBuf {
    let ticker = ticker.trim().to_uppercase();
    let upper = data_dir.join(format!("{ticker}{CANDIDATE_SUFFIX}"));
    let lower = data_dir.join(format!("{}{CANDIDATE_SUFFIX}", ticker.to_lowercase()));

    if upper.exists() {
        return upper;
    }
    if lower.exists() {
        return lower;
    }
    upper
}

/// Load one stock history file and parse its `Date` column.
///
/// Rows whose date fails to parse are kept with a null date rather than
/// failing the load.
///
/// # Errors
///
/// Returns [`DataError::FileNotFound`] if the path is absent and
/// [`DataError::MissingColumn`] if the file has no `Date` column.
pub fn load_series(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(DataError::FileNotFound(path.to_path_buf()));
    }

    let df = CsvReadOptions::default()
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    if !df.get_column_names_str().contains(&DATE_COLUMN) {
        return Err(DataError::MissingColumn(DATE_COLUMN.to_string()));
    }

    let df = df
        .lazy()
        .with_column(
            col(DATE_COLUMN)
                .cast(DataType::String)
                .str()
                .to_date(StrptimeOptions {
                    strict: false,
                    ..Default::default()
                }),
        )
        .collect()?;

    Ok(df)
}

/// Count null entries per column, in column order.
pub fn missing_value_report(df: &DataFrame) -> Vec<(String, usize)> {
    df.get_columns()
        .iter()
        .map(|column| (column.name().to_string(), column.null_count()))
        .collect()
}
