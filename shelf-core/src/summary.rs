//! Plain-text renderings of records

use crate::record::{Availability, Record};

/// Label for the availability status column
pub fn status_label(availability: &Availability) -> &'static str {
    availability.known_status().unwrap_or("unknown")
}

/// One-line availability description
pub fn format_availability(availability: &Availability) -> String {
    match availability {
        Availability::Available { location } => format!("Available at {location}"),
        Availability::CheckedOut { due_date } => format!("Checked out (Due: {due_date})"),
        Availability::Absent | Availability::Unknown { .. } => "Status unknown".to_string(),
    }
}

/// `"{title} by {author} ({year}) - {availability}"`
///
/// Undated records render the year as `n.d.`.
pub fn record_summary(record: &Record) -> String {
    let year = record
        .year
        .map_or_else(|| "n.d.".to_string(), |year| year.to_string());

    format!(
        "{} by {} ({}) - {}",
        record.title,
        record.author,
        year,
        format_availability(&record.availability)
    )
}

/// Lift a per-record formatter to a whole slice
pub fn formatter<T, F>(format: F) -> impl Fn(&[Record]) -> Vec<T>
where
    F: Fn(&Record) -> T,
{
    move |records: &[Record]| records.iter().map(&format).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::demo_records;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_availability() {
        let records = demo_records();

        assert_eq!(format_availability(&records[0].availability), "Available at A1-23");
        assert_eq!(
            format_availability(&records[1].availability),
            "Checked out (Due: 2024-12-01)"
        );
        assert_eq!(format_availability(&records[2].availability), "Status unknown");

        let malformed = Availability::from_parts(Some("available".to_string()), None, None);
        assert_eq!(format_availability(&malformed), "Status unknown");
        assert_eq!(status_label(&malformed), "unknown");
    }

    #[test]
    fn test_record_summary() {
        let records = demo_records();

        assert_eq!(
            record_summary(&records[0]),
            "The Clean Coder by Robert C. Martin (2011) - Available at A1-23"
        );

        let undated = records[2].clone().without_year();
        assert_eq!(
            record_summary(&undated),
            "Design Patterns by Gang of Four (n.d.) - Status unknown"
        );
    }

    #[test]
    fn test_formatter_maps_every_record() {
        let titles = formatter(|record: &Record| record.title.to_uppercase());
        let records = demo_records();

        assert_eq!(
            titles(&records[..2]),
            vec!["THE CLEAN CODER".to_string(), "YOU DON'T KNOW JS".to_string()]
        );
        assert!(titles(&[]).is_empty());
    }
}
