//! Universe membership for data-preparation runs.
//!
//! A universe is the set of symbols a run cares about. The reference symbol
//! list loaded from disk is the usual universe, but the reconciliation
//! filter only needs membership tests, so it is generic over this trait.

use hobart_data::symbols::SymbolSet;

/// Trait for symbol universes.
pub trait Universe {
    /// Get all symbols in the universe.
    fn symbols(&self) -> Vec<String>;

    /// Check if a symbol is in the universe.
    fn contains(&self, symbol: &str) -> bool {
        self.symbols().contains(&symbol.to_string())
    }

    /// Get the number of symbols.
    fn size(&self) -> usize {
        self.symbols().len()
    }
}

impl Universe for SymbolSet {
    fn symbols(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }

    fn contains(&self, symbol: &str) -> bool {
        Self::contains(self, symbol)
    }

    fn size(&self) -> usize {
        self.len()
    }
}
