//! Stateless queries over a caller-supplied record slice

use std::collections::HashMap;
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Records whose availability status equals `status`.
///
/// Only the status is compared; a missing location or due date does not
/// exclude a record. Absent availability never matches.
pub fn filter_by_status<'a>(records: &'a [Record], status: &str) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| record.status() == Some(status))
        .collect()
}

/// Partition records by genre, buckets in first-seen genre order
pub fn group_by_genre(records: &[Record]) -> GenreGroups<'_> {
    let mut groups = GenreGroups::default();
    for record in records {
        groups.push(record);
    }
    groups
}

/// Records matching every supplied criterion
pub fn search<'a>(
    records: &'a [Record],
    criteria: &SearchCriteria,
    case_sensitive: bool,
) -> Vec<&'a Record> {
    let matcher = Matcher::new(criteria, case_sensitive);
    records
        .iter()
        .filter(|record| matcher.matches(record))
        .collect()
}

/// Single-pass cursor over the titles of `records`
pub fn title_sequence(records: &[Record]) -> TitleCursor<'_> {
    TitleCursor {
        records,
        position: 0,
    }
}

/// Search criteria. Omitted or empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Substring of the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Substring of the author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Exact genre
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// True when no criterion constrains the search
    pub fn is_empty(&self) -> bool {
        [&self.title, &self.author, &self.genre]
            .iter()
            .all(|term| term.as_deref().map_or(true, str::is_empty))
    }

    /// Human readable description, e.g. `title: "Clean", genre: "Programming"`
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        for (name, term) in [
            ("title", &self.title),
            ("author", &self.author),
            ("genre", &self.genre),
        ] {
            if let Some(term) = term.as_deref().filter(|t| !t.is_empty()) {
                parts.push(format!("{name}: \"{term}\""));
            }
        }
        parts.join(", ")
    }
}

/// Criteria with empty terms dropped and case folding applied once
struct Matcher<'c> {
    title: Option<String>,
    author: Option<String>,
    genre: Option<&'c str>,
    case_sensitive: bool,
}

impl<'c> Matcher<'c> {
    fn new(criteria: &'c SearchCriteria, case_sensitive: bool) -> Self {
        let fold = |term: &Option<String>| {
            term.as_deref()
                .filter(|t| !t.is_empty())
                .map(|t| if case_sensitive { t.to_string() } else { t.to_lowercase() })
        };

        Self {
            title: fold(&criteria.title),
            author: fold(&criteria.author),
            genre: criteria.genre.as_deref().filter(|g| !g.is_empty()),
            case_sensitive,
        }
    }

    fn matches(&self, record: &Record) -> bool {
        let matches_title = self
            .title
            .as_deref()
            .map_or(true, |term| self.contains(&record.title, term));
        let matches_author = self
            .author
            .as_deref()
            .map_or(true, |term| self.contains(&record.author, term));
        let matches_genre = self.genre.map_or(true, |genre| record.genre == genre);

        matches_title && matches_author && matches_genre
    }

    fn contains(&self, field: &str, term: &str) -> bool {
        if self.case_sensitive {
            field.contains(term)
        } else {
            field.to_lowercase().contains(term)
        }
    }
}

/// Records grouped by genre.
///
/// Buckets keep first-seen genre order and input order within a bucket.
#[derive(Debug, Clone, Default)]
pub struct GenreGroups<'a> {
    groups: Vec<(&'a str, Vec<&'a Record>)>,
    index: HashMap<&'a str, usize>,
}

impl<'a> GenreGroups<'a> {
    fn push(&mut self, record: &'a Record) {
        let genre = record.genre.as_str();
        let slot = match self.index.get(genre) {
            Some(&slot) => slot,
            None => {
                self.groups.push((genre, Vec::new()));
                self.index.insert(genre, self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        self.groups[slot].1.push(record);
    }

    /// Records of a genre, `None` if the genre never occurred
    pub fn get(&self, genre: &str) -> Option<&[&'a Record]> {
        self.index
            .get(genre)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    pub fn genres(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.iter().map(|(genre, _)| *genre)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a Record])> + '_ {
        self.groups
            .iter()
            .map(|(genre, records)| (*genre, records.as_slice()))
    }

    /// Number of distinct genres
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Pull-based, single-pass sequence of titles.
///
/// Holds only a read position into the borrowed slice; once exhausted a new
/// cursor has to be requested with [`title_sequence`].
#[derive(Debug, Clone)]
pub struct TitleCursor<'a> {
    records: &'a [Record],
    position: usize,
}

impl<'a> TitleCursor<'a> {
    pub fn has_next(&self) -> bool {
        self.position < self.records.len()
    }

    pub fn next_title(&mut self) -> Option<&'a str> {
        let record = self.records.get(self.position)?;
        self.position += 1;
        Some(record.title.as_str())
    }

    /// Titles not yet consumed
    pub fn remaining(&self) -> usize {
        self.records.len().saturating_sub(self.position)
    }
}

impl<'a> Iterator for TitleCursor<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_title()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TitleCursor<'_> {}

impl FusedIterator for TitleCursor<'_> {}
