//! Shelf core library
//!
//! An in-memory catalog of records with stateless query and aggregation
//! functions, and a [`CatalogManager`] that owns a mutable record set and
//! keeps its statistics in sync with every mutation.
//!
//! ```text
//! record / store  ──►  query, stats  ──►  manager  ──►  presentation (shelf-cli)
//! ```

pub mod config;
pub mod error;
pub mod manager;
pub mod memo;
pub mod merge;
pub mod query;
pub mod record;
pub mod stats;
pub mod store;
pub mod summary;

pub use config::CatalogFile;
pub use error::{CatalogError, Result};
pub use manager::CatalogManager;
pub use memo::Memoize;
pub use query::{
    filter_by_status, group_by_genre, search, title_sequence, GenreGroups, SearchCriteria,
    TitleCursor,
};
pub use record::{Availability, Record, RecordId, RecordUpdate, STATUS_AVAILABLE, STATUS_CHECKED_OUT};
pub use stats::{analyze, compute_statistics, CatalogAnalysis, GenreCount, GenreCounts, Statistics};
pub use store::{demo_records, unique_authors, CategoryDescriptions};
