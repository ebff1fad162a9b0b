//! Stateful catalog that keeps its statistics in sync with its records

use tracing::{debug, trace};

use crate::merge;
use crate::query::{self, SearchCriteria, TitleCursor};
use crate::record::{Record, RecordId, RecordUpdate};
use crate::stats::{self, CatalogAnalysis, GenreCounts, Statistics, StatusCounts};

/// Owns a mutable record set and keeps its statistics current.
///
/// Status counts are cached and recomputed after every mutation. Genre figures
/// are computed on read. The backing sequence is never handed out mutably, so
/// the cache cannot drift from the records.
#[derive(Debug, Clone)]
pub struct CatalogManager {
    /// Records in insertion order
    records: Vec<Record>,
    /// Counts for `records`, refreshed on every mutation
    status: StatusCounts,
}

impl CatalogManager {
    /// Create a manager over a copy of `initial`
    pub fn new(initial: &[Record]) -> Self {
        let mut manager = Self {
            records: initial.to_vec(),
            status: StatusCounts::default(),
        };
        manager.refresh_statistics();
        manager
    }

    /// Append records in call order and return the new total
    pub fn add_records<I>(&mut self, new_records: I) -> usize
    where
        I: IntoIterator<Item = Record>,
    {
        let before = self.records.len();
        self.records.extend(new_records);
        self.refresh_statistics();

        debug!(
            added = self.records.len() - before,
            total = self.records.len(),
            "Added records to catalog"
        );
        self.records.len()
    }

    /// Search the owned records
    pub fn search_records(&self, criteria: &SearchCriteria, case_sensitive: bool) -> Vec<&Record> {
        query::search(&self.records, criteria, case_sensitive)
    }

    /// Cached status counts merged with fresh genre figures
    pub fn get_statistics(&self) -> Statistics {
        Statistics::from_parts(self.status, GenreCounts::of(&self.records))
    }

    /// Update the first record with `id` in place.
    ///
    /// Returns `None` without touching anything when no such record exists.
    /// Fields are merged, never replaced wholesale; see [`crate::merge`].
    pub fn update_record(&mut self, id: RecordId, updates: &RecordUpdate) -> Option<&Record> {
        let Some(index) = self.records.iter().position(|record| record.id == id) else {
            debug!(id, "Update skipped: record not found");
            return None;
        };

        let changed = merge::apply_update(&mut self.records[index], updates);
        self.refresh_statistics();

        debug!(id, ?changed, "Updated record");
        self.records.get(index)
    }

    /// First record with `id`
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Cursor over the titles of the owned records
    pub fn titles(&self) -> TitleCursor<'_> {
        query::title_sequence(&self.records)
    }

    pub fn analyze(&self) -> CatalogAnalysis {
        stats::analyze(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn refresh_statistics(&mut self) {
        self.status = StatusCounts::of(&self.records);
        trace!(
            total = self.status.total,
            available = self.status.available,
            checked_out = self.status.checked_out,
            "Refreshed catalog statistics"
        );
    }
}
