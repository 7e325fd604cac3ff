//! Region and category selection over the cleaned table

use crate::types::transaction::Transaction;
use serde::Serialize;
use std::collections::BTreeSet;

/// Sorted distinct regions present in `table`
pub fn available_regions(table: &[Transaction]) -> BTreeSet<String> {
    table.iter().filter_map(|t| t.region.clone()).collect()
}

/// Sorted distinct categories present in `table`
pub fn available_categories(table: &[Transaction]) -> BTreeSet<String> {
    table.iter().filter_map(|t| t.category.clone()).collect()
}

/// The pair of multi-select filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub regions: BTreeSet<String>,
    pub categories: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new(regions: BTreeSet<String>, categories: BTreeSet<String>) -> Self {
        Self {
            regions,
            categories,
        }
    }

    /// Select every region and category available in `table`
    pub fn all(table: &[Transaction]) -> Self {
        Self::new(available_regions(table), available_categories(table))
    }

    /// True when the row's region AND category are both selected
    pub fn matches(&self, row: &Transaction) -> bool {
        let region = row
            .region
            .as_ref()
            .is_some_and(|r| self.regions.contains(r));
        let category = row
            .category
            .as_ref()
            .is_some_and(|c| self.categories.contains(c));
        region && category
    }

    /// Rows of `table` matching the selection, in their original order
    pub fn apply(&self, table: &[Transaction]) -> Vec<Transaction> {
        table.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}
