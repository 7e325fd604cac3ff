//! Read-through memo table for synthesized datasets

use crate::error::Result;
use crate::synthesizer::DataSynthesizer;
use crate::types::transaction::Transaction;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Per-session memo of synthesizer output keyed by row count.
///
/// The key space is tiny and synthesis is deterministic, so entries are
/// never evicted.
pub struct SynthesisCache {
    synthesizer: DataSynthesizer,
    tables: HashMap<usize, Arc<Vec<Transaction>>>,
    hits: u64,
    misses: u64,
}

impl SynthesisCache {
    pub fn new(synthesizer: DataSynthesizer) -> Self {
        Self {
            synthesizer,
            tables: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Return the table for `rows`, generating it on first request
    pub fn get_or_generate(&mut self, rows: usize) -> Result<Arc<Vec<Transaction>>> {
        if let Some(table) = self.tables.get(&rows) {
            self.hits += 1;
            debug!(rows = rows, "Synthesis cache hit");
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(self.synthesizer.generate(rows)?);
        self.misses += 1;
        debug!(rows = rows, "Synthesis cache miss");
        self.tables.insert(rows, Arc::clone(&table));
        Ok(table)
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Number of memoized tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
