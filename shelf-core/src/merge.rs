//! Field merge strategies used when updating a record in place
//!
//! Each field of a [`RecordUpdate`] is merged with its own rule:
//!
//! | field                 | strategy                          |
//! |-----------------------|-----------------------------------|
//! | `year`                | [`coalesce_if_absent`]            |
//! | `title`, `author`     | [`replace_if_falsy`]              |
//! | `availability.status` | [`replace_status_if_both_truthy`] |
//!
//! The year rule only fires on a missing value, so a year of `0` is kept,
//! while title and author are also replaced when empty.

use crate::record::{Availability, Record, RecordUpdate};

/// Set `current` from `update` only when `current` is `None`
pub fn coalesce_if_absent<T>(current: &mut Option<T>, update: Option<T>) -> bool {
    match (current.is_none(), update) {
        (true, Some(value)) => {
            *current = Some(value);
            true
        }
        _ => false,
    }
}

/// Set `current` from `update` only when `current` is empty
pub fn replace_if_falsy(current: &mut String, update: Option<&str>) -> bool {
    match update {
        Some(value) if current.is_empty() && !value.is_empty() => {
            *current = value.to_string();
            true
        }
        _ => false,
    }
}

/// Replace the availability status only when both the record and the update
/// carry a non-empty status. Location and due date are kept and the result
/// is reclassified.
pub fn replace_status_if_both_truthy(current: &mut Availability, update: Option<&str>) -> bool {
    let has_status = current.status().is_some_and(|s| !s.is_empty());
    match update {
        Some(status) if has_status && !status.is_empty() => {
            *current = current.with_status(status);
            true
        }
        _ => false,
    }
}

/// Apply every field rule of `update` to `record`.
///
/// Returns the names of the fields that changed.
pub fn apply_update(record: &mut Record, update: &RecordUpdate) -> Vec<&'static str> {
    let mut changed = Vec::new();

    if coalesce_if_absent(&mut record.year, update.year) {
        changed.push("year");
    }
    if replace_if_falsy(&mut record.title, update.title.as_deref()) {
        changed.push("title");
    }
    if replace_if_falsy(&mut record.author, update.author.as_deref()) {
        changed.push("author");
    }
    if replace_status_if_both_truthy(&mut record.availability, update.status.as_deref()) {
        changed.push("status");
    }

    changed
}
