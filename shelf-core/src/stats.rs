//! Statistics and analysis over a record set
//!
//! Everything here is a pure function of the records passed in. The catalog
//! manager caches [`StatusCounts`] between mutations and recomputes genre
//! figures on read.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::record::{Record, STATUS_AVAILABLE, STATUS_CHECKED_OUT};

/// Summary counts for a record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Number of records
    pub total: usize,
    /// Records whose availability status is `available`
    pub available: usize,
    /// Records whose availability status is `checked_out`
    pub checked_out: usize,
    /// Number of distinct genres
    pub genres: usize,
    /// Records per genre, first-seen order
    pub by_genre: GenreCounts,
}

impl Statistics {
    pub(crate) fn from_parts(status: StatusCounts, by_genre: GenreCounts) -> Self {
        Self {
            total: status.total,
            available: status.available,
            checked_out: status.checked_out,
            genres: by_genre.len(),
            by_genre,
        }
    }

    /// Records with no availability or a status other than the two known ones
    pub fn unknown(&self) -> usize {
        self.total - self.available - self.checked_out
    }
}

/// Record and availability counts, the part of [`Statistics`] that the
/// catalog manager caches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct StatusCounts {
    pub total: usize,
    pub available: usize,
    pub checked_out: usize,
}

impl StatusCounts {
    pub fn of(records: &[Record]) -> Self {
        records.iter().fold(
            Self {
                total: records.len(),
                ..Self::default()
            },
            |mut counts, record| {
                match record.status() {
                    Some(STATUS_AVAILABLE) => counts.available += 1,
                    Some(STATUS_CHECKED_OUT) => counts.checked_out += 1,
                    _ => {}
                }
                counts
            },
        )
    }
}

/// Number of records in one genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Per-genre record counts in first-seen order.
///
/// Serializes as a JSON object `{genre: count}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreCounts {
    counts: Vec<GenreCount>,
}

impl GenreCounts {
    pub fn of(records: &[Record]) -> Self {
        let mut counts = Self::default();
        for record in records {
            counts.increment(&record.genre);
        }
        counts
    }

    fn increment(&mut self, genre: &str) {
        match self.counts.iter_mut().find(|c| c.genre == genre) {
            Some(entry) => entry.count += 1,
            None => self.counts.push(GenreCount {
                genre: genre.to_string(),
                count: 1,
            }),
        }
    }

    pub fn get(&self, genre: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|c| c.genre == genre)
            .map(|c| c.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GenreCount> {
        self.counts.iter()
    }

    /// Genre with the highest count. On a tie the genre seen first wins.
    pub fn most_common(&self) -> Option<&GenreCount> {
        self.counts.iter().fold(None, |max: Option<&GenreCount>, entry| match max {
            Some(current) if entry.count <= current.count => Some(current),
            _ => Some(entry),
        })
    }

    /// Number of distinct genres
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl Serialize for GenreCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for entry in &self.counts {
            map.serialize_entry(&entry.genre, &entry.count)?;
        }
        map.end()
    }
}

/// Compute [`Statistics`] for a record set
pub fn compute_statistics(records: &[Record]) -> Statistics {
    Statistics::from_parts(StatusCounts::of(records), GenreCounts::of(records))
}

/// Reporting view of a record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogAnalysis {
    pub genre_distribution: GenreCounts,
    pub most_common_genre: Option<GenreCount>,
    pub available: usize,
    pub checked_out: usize,
    /// Earliest publication year among dated records
    pub oldest_year: Option<i32>,
    /// Latest publication year among dated records
    pub newest_year: Option<i32>,
    /// Mean publication year of dated records, rounded half up
    pub average_year: Option<i32>,
}

/// Analyze a record set for reporting.
///
/// Records without a year are left out of the year figures.
pub fn analyze(records: &[Record]) -> CatalogAnalysis {
    let genre_distribution = GenreCounts::of(records);
    let most_common_genre = genre_distribution.most_common().cloned();
    let status = StatusCounts::of(records);

    let years: Vec<i32> = records.iter().filter_map(|record| record.year).collect();

    CatalogAnalysis {
        genre_distribution,
        most_common_genre,
        available: status.available,
        checked_out: status.checked_out,
        oldest_year: years.iter().copied().min(),
        newest_year: years.iter().copied().max(),
        average_year: mean_rounded_half_up(&years),
    }
}

/// Integer mean rounded half up, i.e. `floor(mean + 0.5)`
fn mean_rounded_half_up(values: &[i32]) -> Option<i32> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as i64;
    let sum: i64 = values.iter().map(|&v| i64::from(v)).sum();
    i32::try_from((2 * sum + n).div_euclid(2 * n)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Availability;
    use crate::store::demo_records;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Record> {
        vec![
            Record::new(1, "A", "X", 2000, "Programming").available_at("A1"),
            Record::new(2, "B", "Y", 2001, "Programming").checked_out_until("2024-01-01"),
            Record::new(3, "C", "Z", 2002, "History"),
        ]
    }

    #[test]
    fn test_compute_statistics_end_to_end() {
        let stats = compute_statistics(&sample());

        assert_eq!(stats.total, 3);
        assert_eq!(stats.available, 1);
        assert_eq!(stats.checked_out, 1);
        assert_eq!(stats.genres, 2);
        assert_eq!(stats.by_genre.get("Programming"), Some(2));
        assert_eq!(stats.by_genre.get("History"), Some(1));
        assert_eq!(stats.unknown(), 1);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "total": 3,
                "available": 1,
                "checkedOut": 1,
                "genres": 2,
                "byGenre": {"Programming": 2, "History": 1}
            })
        );
    }

    #[test]
    fn test_statistics_of_empty_set() {
        let stats = compute_statistics(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.genres, 0);
        assert!(stats.by_genre.is_empty());
    }

    #[test]
    fn test_counts_follow_raw_status() {
        let records = vec![
            Record::new(1, "A", "X", 2000, "Misc").with_availability(Availability::from_parts(
                Some("checked_out".to_string()),
                None,
                None,
            )),
            Record::new(2, "B", "X", 2000, "Misc").with_availability(Availability::from_parts(
                Some("lost".to_string()),
                Some("B2".to_string()),
                None,
            )),
            Record::new(3, "C", "X", 2000, "Misc"),
        ];

        let stats = compute_statistics(&records);
        assert_eq!(stats.available, 0);
        assert_eq!(stats.checked_out, 1);
        assert_eq!(stats.unknown(), 2);
    }

    #[test]
    fn test_most_common_keeps_first_on_tie() {
        let records = vec![
            Record::new(1, "A", "X", 2000, "History"),
            Record::new(2, "B", "X", 2000, "Poetry"),
            Record::new(3, "C", "X", 2000, "Poetry"),
            Record::new(4, "D", "X", 2000, "History"),
        ];

        let counts = GenreCounts::of(&records);
        assert_eq!(
            counts.most_common(),
            Some(&GenreCount {
                genre: "History".to_string(),
                count: 2
            })
        );
        assert_eq!(GenreCounts::default().most_common(), None);
    }

    #[test]
    fn test_analyze_demo_catalog() {
        let analysis = analyze(&demo_records());

        assert_eq!(
            analysis.most_common_genre,
            Some(GenreCount {
                genre: "Programming".to_string(),
                count: 3
            })
        );
        assert_eq!(analysis.available, 2);
        assert_eq!(analysis.checked_out, 1);
        assert_eq!(analysis.oldest_year, Some(1994));
        assert_eq!(analysis.newest_year, Some(2017));
        // (2011 + 2014 + 1994 + 2017) / 4 = 2009
        assert_eq!(analysis.average_year, Some(2009));
    }

    #[test]
    fn test_average_year_rounds_half_up() {
        assert_eq!(mean_rounded_half_up(&[2000, 2001]), Some(2001));
        assert_eq!(mean_rounded_half_up(&[2000, 2000, 2001]), Some(2000));
        assert_eq!(mean_rounded_half_up(&[-3, -2]), Some(-2));
        assert_eq!(mean_rounded_half_up(&[]), None);
    }

    #[test]
    fn test_analyze_skips_undated_records() {
        let records = vec![
            Record::new(1, "A", "X", 1990, "History"),
            Record::new(2, "B", "X", 0, "History").without_year(),
        ];

        let analysis = analyze(&records);
        assert_eq!(analysis.oldest_year, Some(1990));
        assert_eq!(analysis.newest_year, Some(1990));
        assert_eq!(analysis.average_year, Some(1990));

        let empty = analyze(&[]);
        assert_eq!(empty.most_common_genre, None);
        assert_eq!(empty.average_year, None);
    }
}
