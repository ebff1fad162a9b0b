//! Catalog record model
//!
//! A [`Record`] is one catalog entry. Its availability is optional and may be
//! malformed in real-world data, so it is modelled as a sum type that every
//! consumer matches on instead of probing individual fields.

use serde::{Deserialize, Serialize};

/// Identifier of a record. Uniqueness is assumed by callers, never enforced.
pub type RecordId = u64;

/// Status string of a record that can be borrowed
pub const STATUS_AVAILABLE: &str = "available";

/// Status string of a record that is currently lent out
pub const STATUS_CHECKED_OUT: &str = "checked_out";

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: String,

    /// Publication year, absent for undated entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[serde(default)]
    pub genre: String,

    #[serde(default, skip_serializing_if = "Availability::is_absent")]
    pub availability: Availability,
}

impl Record {
    /// Create a dated record with no availability information
    pub fn new(
        id: RecordId,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year: Some(year),
            genre: genre.into(),
            availability: Availability::Absent,
        }
    }

    /// Mark the record as available at `location`
    pub fn available_at(mut self, location: impl Into<String>) -> Self {
        self.availability = Availability::Available {
            location: location.into(),
        };
        self
    }

    /// Mark the record as checked out until `due_date`
    pub fn checked_out_until(mut self, due_date: impl Into<String>) -> Self {
        self.availability = Availability::CheckedOut {
            due_date: due_date.into(),
        };
        self
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    pub fn without_year(mut self) -> Self {
        self.year = None;
        self
    }

    /// Raw availability status, if any
    pub fn status(&self) -> Option<&str> {
        self.availability.status()
    }
}

/// Availability of a record.
///
/// Only two shapes are well formed: `available` with a location and
/// `checked_out` with a due date. Anything else that was supplied lands in
/// [`Availability::Unknown`] with its raw fields kept, so a later status
/// change can still produce a well-formed shape.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<RawAvailability>", into = "Option<RawAvailability>")]
pub enum Availability {
    #[default]
    Absent,
    Available {
        location: String,
    },
    CheckedOut {
        due_date: String,
    },
    Unknown {
        status: Option<String>,
        location: Option<String>,
        due_date: Option<String>,
    },
}

impl Availability {
    /// Classify a raw availability sub-record.
    ///
    /// Empty strings count as missing.
    pub fn from_parts(
        status: Option<String>,
        location: Option<String>,
        due_date: Option<String>,
    ) -> Self {
        let location = location.filter(|l| !l.is_empty());
        let due_date = due_date.filter(|d| !d.is_empty());

        match (status.as_deref(), location, due_date) {
            (Some(STATUS_AVAILABLE), Some(location), None) => Availability::Available { location },
            (Some(STATUS_CHECKED_OUT), None, Some(due_date)) => {
                Availability::CheckedOut { due_date }
            }
            (_, location, due_date) => Availability::Unknown {
                status,
                location,
                due_date,
            },
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Availability::Absent)
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available { .. })
    }

    pub fn is_checked_out(&self) -> bool {
        matches!(self, Availability::CheckedOut { .. })
    }

    /// Status string as supplied, including the raw status of unknown shapes
    pub fn status(&self) -> Option<&str> {
        match self {
            Availability::Absent => None,
            Availability::Available { .. } => Some(STATUS_AVAILABLE),
            Availability::CheckedOut { .. } => Some(STATUS_CHECKED_OUT),
            Availability::Unknown { status, .. } => status.as_deref(),
        }
    }

    /// Status string of a well-formed shape; `None` for absent or unknown
    pub fn known_status(&self) -> Option<&'static str> {
        match self {
            Availability::Available { .. } => Some(STATUS_AVAILABLE),
            Availability::CheckedOut { .. } => Some(STATUS_CHECKED_OUT),
            Availability::Absent | Availability::Unknown { .. } => None,
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Availability::Available { location } => Some(location),
            Availability::Unknown { location, .. } => location.as_deref(),
            Availability::Absent | Availability::CheckedOut { .. } => None,
        }
    }

    pub fn due_date(&self) -> Option<&str> {
        match self {
            Availability::CheckedOut { due_date } => Some(due_date),
            Availability::Unknown { due_date, .. } => due_date.as_deref(),
            Availability::Absent | Availability::Available { .. } => None,
        }
    }

    /// Same sub-record with its status replaced, reclassified.
    ///
    /// An absent availability stays absent.
    pub fn with_status(&self, status: impl Into<String>) -> Self {
        match self {
            Availability::Absent => Availability::Absent,
            other => Availability::from_parts(
                Some(status.into()),
                other.location().map(str::to_string),
                other.due_date().map(str::to_string),
            ),
        }
    }
}

/// Wire shape of the availability sub-record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAvailability {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<String>,
}

impl From<Option<RawAvailability>> for Availability {
    fn from(raw: Option<RawAvailability>) -> Self {
        match raw {
            None => Availability::Absent,
            Some(raw) => Availability::from_parts(raw.status, raw.location, raw.due_date),
        }
    }
}

impl From<Availability> for Option<RawAvailability> {
    fn from(availability: Availability) -> Self {
        match availability {
            Availability::Absent => None,
            Availability::Available { location } => Some(RawAvailability {
                status: Some(STATUS_AVAILABLE.to_string()),
                location: Some(location),
                due_date: None,
            }),
            Availability::CheckedOut { due_date } => Some(RawAvailability {
                status: Some(STATUS_CHECKED_OUT.to_string()),
                location: None,
                due_date: Some(due_date),
            }),
            Availability::Unknown {
                status,
                location,
                due_date,
            } => Some(RawAvailability {
                status,
                location,
                due_date,
            }),
        }
    }
}

/// Field updates for [`crate::CatalogManager::update_record`].
///
/// Each field is merged with its own rule; see [`crate::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordUpdate {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub year: Option<i32>,

    /// Replacement availability status
    #[serde(default)]
    pub status: Option<String>,
}

impl RecordUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}
