//! Reference symbol loading and normalization.

use crate::error::{DataError, Result};
use polars::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;

/// Column expected to hold ticker symbols in a reference file.
const SYMBOL_COLUMN: &str = "Symbol";

/// A normalized set of reference ticker symbols.
///
/// Symbols are trimmed and upper-cased on insertion and blank values are
/// dropped, so membership tests are case-insensitive with respect to the
/// source data. Duplicates collapse under set semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolSet {
    symbols: BTreeSet<String>,
}

impl SymbolSet {
    /// Create an empty symbol set.
    pub const fn new() -> Self {
        Self {
            symbols: BTreeSet::new(),
        }
    }

    /// Build a set from raw symbol values, normalizing each entry.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let symbols = values
            .into_iter()
            .filter_map(|value| {
                let normalized = value.as_ref().trim().to_uppercase();
                if normalized.is_empty() {
                    None
                } else {
                    Some(normalized)
                }
            })
            .collect();

        Self { symbols }
    }

    /// Check if a symbol is in the set.
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    /// Number of symbols in the set.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the set holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate over the symbols in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

impl FromIterator<String> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<'a> FromIterator<&'a str> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

/// Load the reference symbol set from a tabular file.
///
/// Reads the `Symbol` column when present, falling back to the first column
/// positionally. Values are normalized per [`SymbolSet`]: stringified,
/// trimmed, upper-cased, blanks dropped.
///
/// # Errors
///
/// Returns [`DataError::FileNotFound`] if the path is absent, and propagates
/// read failures.
pub fn load_symbols(path: &Path) -> Result<SymbolSet> {
    if !path.exists() {
        return Err(DataError::FileNotFound(path.to_path_buf()));
    }

    let df = CsvReadOptions::default()
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let column = if df.get_column_names_str().contains(&SYMBOL_COLUMN) {
        df.column(SYMBOL_COLUMN)?
    } else {
        df.get_columns()
            .first()
            .ok_or_else(|| DataError::MissingColumn(SYMBOL_COLUMN.to_string()))?
    };

    let values = column.as_materialized_series().cast(&DataType::String)?;
    let symbols = values.str()?.into_iter().flatten().collect::<SymbolSet>();

    Ok(symbols)
}
