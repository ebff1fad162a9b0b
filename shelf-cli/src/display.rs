//! Terminal rendering of catalog data

use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use shelf_core::summary::{format_availability, status_label};
use shelf_core::{CatalogAnalysis, CategoryDescriptions, GenreGroups, Record, SearchCriteria, Statistics};

/// Table row for a single record
#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Year")]
    year: String,
    #[tabled(rename = "Genre")]
    genre: String,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Availability")]
    availability: String,
}

impl From<&Record> for RecordRow {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id,
            title: record.title.clone(),
            author: record.author.clone(),
            year: record
                .year
                .map_or_else(|| "-".to_string(), |year| year.to_string()),
            genre: record.genre.clone(),
            status: status_label(&record.availability),
            availability: format_availability(&record.availability),
        }
    }
}

/// Table row for a genre count
#[derive(Tabled)]
struct GenreRow {
    #[tabled(rename = "Genre")]
    genre: String,
    #[tabled(rename = "Books")]
    count: usize,
    #[tabled(rename = "Description")]
    description: String,
}

fn render<T: Tabled>(rows: &[T]) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

pub fn print_statistics(stats: &Statistics) {
    println!("Total books:  {}", stats.total);
    println!("Available:    {}", stats.available);
    println!("Checked out:  {}", stats.checked_out);
    println!("Unknown:      {}", stats.unknown());
    println!("Genres:       {}", stats.genres);
}

pub fn print_records(records: &[&Record], heading: &str) {
    println!("\n=== {} ===", heading.to_uppercase());

    if records.is_empty() {
        println!("No books.");
        return;
    }

    let rows: Vec<RecordRow> = records.iter().map(|record| RecordRow::from(*record)).collect();
    println!("{}", render(&rows));
}

pub fn print_search_results(results: &[&Record], criteria: &SearchCriteria) {
    let description = criteria.describe();
    if description.is_empty() {
        println!("\nSearch results (all books)");
    } else {
        println!("\nSearch results ({description})");
    }
    println!("Found {} book(s)\n", results.len());

    if results.is_empty() {
        println!("No books found matching your criteria.");
        return;
    }

    for record in results {
        println!(
            "  {} by {} - {}",
            record.title,
            record.author,
            format_availability(&record.availability)
        );
    }
}

pub fn print_genre_groups(groups: &GenreGroups<'_>) {
    for (genre, records) in groups.iter() {
        print_records(records, genre);
    }
}

pub fn print_analysis(analysis: &CatalogAnalysis, descriptions: &CategoryDescriptions) {
    println!("\n=== BOOK ANALYSIS ===");

    let rows: Vec<GenreRow> = analysis
        .genre_distribution
        .iter()
        .map(|entry| GenreRow {
            genre: entry.genre.clone(),
            count: entry.count,
            description: descriptions
                .describe(&entry.genre)
                .unwrap_or_default()
                .to_string(),
        })
        .collect();

    if rows.is_empty() {
        println!("\nNo books to analyze.");
        return;
    }
    println!("\nBooks by genre:\n{}", render(&rows));

    if let Some(top) = &analysis.most_common_genre {
        println!("\nMost common genre: {} ({} books)", top.genre, top.count);
    }

    println!("\nAvailability status:");
    println!("  Available:   {}", analysis.available);
    println!("  Checked out: {}", analysis.checked_out);

    match (analysis.oldest_year, analysis.newest_year, analysis.average_year) {
        (Some(oldest), Some(newest), Some(average)) => {
            println!("\nPublication range: {oldest} - {newest}");
            println!("Average publication year: {average}");
        }
        _ => println!("\nNo publication years recorded."),
    }
}
