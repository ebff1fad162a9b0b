//! Shared helpers for shelf-core integration tests

use shelf_core::Record;
use std::sync::Once;

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// A mixed catalog: well-formed, absent and malformed availability across
/// three genres
pub fn mixed_catalog() -> Vec<Record> {
    vec![
        Record::new(1, "Clean Architecture", "Robert C. Martin", 2017, "Programming")
            .available_at("A2-15"),
        Record::new(2, "the CLEAN coder", "Robert C. Martin", 2011, "Programming")
            .checked_out_until("2024-12-01"),
        Record::new(3, "SPQR", "Mary Beard", 2015, "History"),
        Record::new(4, "Design Patterns", "Gang of Four", 1994, "Software Engineering")
            .with_availability(shelf_core::Availability::from_parts(
                Some("available".to_string()),
                None,
                None,
            )),
        Record::new(5, "The Histories", "Herodotus", -430, "History").available_at("H1"),
        Record::new(6, "Refactoring", "Martin Fowler", 1999, "Programming"),
    ]
}

pub fn ids(records: &[&Record]) -> Vec<u64> {
    records.iter().map(|record| record.id).collect()
}
