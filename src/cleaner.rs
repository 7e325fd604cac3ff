//! Removal of duplicate and incomplete transaction rows

use crate::types::transaction::Transaction;
use serde::Serialize;
use std::collections::HashSet;
use tracing::info;

/// Result of cleaning a raw table
#[derive(Debug, Clone, Serialize)]
pub struct CleaningReport {
    /// Surviving rows, in their original order
    pub table: Vec<Transaction>,
    /// Rows in the input
    pub rows_before: usize,
    /// `rows_before - table.len()`
    pub rows_removed: usize,
    /// Rows dropped as exact repeats of an earlier row
    pub duplicates_removed: usize,
    /// Rows dropped for a missing region or category
    pub incomplete_removed: usize,
}

impl CleaningReport {
    pub fn rows_after(&self) -> usize {
        self.table.len()
    }
}

/// Deduplicates rows, then drops rows missing a region or category
pub struct DataCleaner;

impl DataCleaner {
    pub fn new() -> Self {
        Self
    }

    /// Clean `raw` without mutating surviving rows
    pub fn clean(&self, raw: &[Transaction]) -> CleaningReport {
        let rows_before = raw.len();

        let mut seen = HashSet::with_capacity(rows_before);
        let unique: Vec<&Transaction> = raw
            .iter()
            .filter(|row| seen.insert(row.row_key()))
            .collect();
        let duplicates_removed = rows_before - unique.len();

        let table: Vec<Transaction> = unique
            .into_iter()
            .filter(|row| !row.is_incomplete())
            .cloned()
            .collect();
        let incomplete_removed = rows_before - duplicates_removed - table.len();

        let rows_removed = rows_before - table.len();
        info!(
            rows_before = rows_before,
            rows_after = table.len(),
            duplicates = duplicates_removed,
            incomplete = incomplete_removed,
            "Cleaned transaction table"
        );

        CleaningReport {
            table,
            rows_before,
            rows_removed,
            duplicates_removed,
            incomplete_removed,
        }
    }
}

impl Default for DataCleaner {
    fn default() -> Self {
        Self::new()
    }
}
