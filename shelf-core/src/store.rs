//! Built-in seed data and record-set lookups

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::record::Record;

/// Genre descriptions of the demo catalog
pub const BUILTIN_CATEGORIES: &[(&str, &str)] = &[
    (
        "Programming",
        "Books about programming languages and techniques",
    ),
    (
        "Software Engineering",
        "Books about software design and architecture",
    ),
];

/// The demo catalog shipped with the CLI.
///
/// Record 3 deliberately has no availability.
pub fn demo_records() -> Vec<Record> {
    vec![
        Record::new(1, "The Clean Coder", "Robert C. Martin", 2011, "Programming")
            .available_at("A1-23"),
        Record::new(2, "You Don't Know JS", "Kyle Simpson", 2014, "Programming")
            .checked_out_until("2024-12-01"),
        Record::new(3, "Design Patterns", "Gang of Four", 1994, "Software Engineering"),
        Record::new(4, "Clean Architecture", "Robert C. Martin", 2017, "Programming")
            .available_at("A2-15"),
    ]
}

/// Distinct authors in first-seen order
pub fn unique_authors(records: &[Record]) -> Vec<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|record| record.author.as_str())
        .filter(|author| seen.insert(*author))
        .collect()
}

/// Human readable descriptions of genres.
///
/// Serializes as a plain `{genre: description}` map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryDescriptions {
    descriptions: HashMap<String, String>,
}

impl CategoryDescriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptions for the genres of the demo catalog
    pub fn builtin() -> Self {
        let mut descriptions = Self::new();
        for (genre, description) in BUILTIN_CATEGORIES {
            descriptions.insert(*genre, *description);
        }
        descriptions
    }

    pub fn insert(&mut self, genre: impl Into<String>, description: impl Into<String>) {
        self.descriptions.insert(genre.into(), description.into());
    }

    pub fn describe(&self, genre: &str) -> Option<&str> {
        self.descriptions.get(genre).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}
