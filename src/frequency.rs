use std::collections::BTreeMap;

use crate::{config::SymbolFilter, CoderError};

/// Occurrence count of every symbol seen in a corpus, in ascending symbol order.
///
/// Only positive counts are stored, and their total always fits in a `usize`, so no
/// subtree weight of a tree built from the table can overflow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, usize>,
}

impl FrequencyTable {
    /// Counts the symbols of `corpus` accepted by `filter`.
    pub fn count(corpus: &str, filter: &SymbolFilter) -> Self {
        let mut counts = BTreeMap::new();
        for symbol in corpus.chars().filter_map(|c| filter.apply(c)) {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        FrequencyTable { counts }
    }

    /// Builds a table from explicit counts. Zero counts are dropped, repeated symbols summed.
    ///
    /// Fails with `FrequencyOverflow` when the counts add up to more than `usize::MAX`.
    pub fn from_counts<I>(counts: I) -> Result<Self, CoderError>
    where
        I: IntoIterator<Item = (char, usize)>,
    {
        let mut table = BTreeMap::new();
        let mut total: usize = 0;
        for (symbol, count) in counts.into_iter().filter(|(_, count)| *count > 0) {
            total = total
                .checked_add(count)
                .ok_or(CoderError::FrequencyOverflow(symbol))?;
            *table.entry(symbol).or_insert(0) += count;
        }
        Ok(FrequencyTable { counts: table })
    }

    pub fn get(&self, symbol: char) -> Option<usize> {
        self.counts.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(symbol, count)| (*symbol, *count))
    }
}
