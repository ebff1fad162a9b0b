//! Shelf - query and summarize an in-memory book catalog

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use shelf_core::summary::{formatter, record_summary};
use shelf_core::{
    filter_by_status, group_by_genre, title_sequence, unique_authors, CatalogFile,
    CatalogManager, Memoize, RecordUpdate, SearchCriteria, STATUS_AVAILABLE, STATUS_CHECKED_OUT,
};

mod display;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Availability status filter
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatusFilter {
    Available,
    CheckedOut,
}

impl StatusFilter {
    fn as_status(self) -> &'static str {
        match self {
            StatusFilter::Available => STATUS_AVAILABLE,
            StatusFilter::CheckedOut => STATUS_CHECKED_OUT,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "shelf",
    about = "Query and summarize an in-memory book catalog",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Catalog file to seed from (YAML, or JSON with a .json extension)
    #[clap(long, global = true)]
    catalog: Option<PathBuf>,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,
}

#[derive(Parser, Debug)]
enum Command {
    /// Walk through every catalog feature on the seeded records
    Demo,

    /// Show catalog statistics
    Stats {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// List books
    List {
        /// Only show books with this availability status
        #[clap(long, value_enum)]
        status: Option<StatusFilter>,

        /// Group the listing by genre
        #[clap(long)]
        by_genre: bool,
    },

    /// Search books by title, author and genre
    Search {
        /// Substring of the title
        #[clap(long)]
        title: Option<String>,

        /// Substring of the author
        #[clap(long)]
        author: Option<String>,

        /// Exact genre
        #[clap(long)]
        genre: Option<String>,

        /// Match title and author case-sensitively
        #[clap(long)]
        case_sensitive: bool,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Genre distribution, availability and publication years
    Analyze {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Print book titles one at a time
    Titles {
        /// Stop after this many titles
        #[clap(long)]
        take: Option<usize>,
    },

    /// List distinct authors
    Authors,

    /// Print the loaded catalog as a seed file
    Export {
        /// Output as JSON instead of YAML
        #[clap(long)]
        json: bool,
    },
}

/// Initialize tracing from the --log-level flag, writing to stderr
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(path: Option<&Path>) -> Result<CatalogFile> {
    match path {
        Some(path) => CatalogFile::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => {
            debug!("No catalog file given, using built-in demo catalog");
            Ok(CatalogFile::builtin())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    let catalog = load_catalog(cli.catalog.as_deref())?;
    let manager = CatalogManager::new(&catalog.records);

    match cli.command {
        Command::Demo => demo_command(&catalog, manager),
        Command::Stats { json } => stats_command(&manager, json),
        Command::List { status, by_genre } => {
            list_command(&manager, status, by_genre);
            Ok(())
        }
        Command::Search {
            title,
            author,
            genre,
            case_sensitive,
            json,
        } => {
            let criteria = SearchCriteria {
                title,
                author,
                genre,
            };
            search_command(&manager, &criteria, case_sensitive, json)
        }
        Command::Analyze { json } => analyze_command(&catalog, &manager, json),
        Command::Titles { take } => {
            titles_command(&manager, take);
            Ok(())
        }
        Command::Authors => {
            for author in unique_authors(manager.records()) {
                println!("{author}");
            }
            Ok(())
        }
        Command::Export { json } => {
            print!("{}", export_catalog(&catalog, json)?);
            Ok(())
        }
    }
}

/// Serialize a catalog in the format `CatalogFile::load` reads back
fn export_catalog(catalog: &CatalogFile, json: bool) -> Result<String> {
    if json {
        let mut output = serde_json::to_string_pretty(catalog)?;
        output.push('\n');
        Ok(output)
    } else {
        catalog
            .to_yaml()
            .context("Failed to serialize catalog as YAML")
    }
}

fn stats_command(manager: &CatalogManager, json: bool) -> Result<()> {
    let stats = manager.get_statistics();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        display::print_statistics(&stats);
    }
    Ok(())
}

fn list_command(manager: &CatalogManager, status: Option<StatusFilter>, by_genre: bool) {
    let records: Vec<_> = match status {
        Some(status) => filter_by_status(manager.records(), status.as_status()),
        None => manager.records().iter().collect(),
    };

    if by_genre {
        let owned: Vec<_> = records.into_iter().cloned().collect();
        display::print_genre_groups(&group_by_genre(&owned));
    } else {
        let heading = status.map_or("All books", |status| status.as_status());
        display::print_records(&records, heading);
    }
}

fn search_command(
    manager: &CatalogManager,
    criteria: &SearchCriteria,
    case_sensitive: bool,
    json: bool,
) -> Result<()> {
    let results = manager.search_records(criteria, case_sensitive);
    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        display::print_search_results(&results, criteria);
    }
    Ok(())
}

fn analyze_command(catalog: &CatalogFile, manager: &CatalogManager, json: bool) -> Result<()> {
    let analysis = manager.analyze();
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        display::print_analysis(&analysis, catalog.descriptions());
    }
    Ok(())
}

fn titles_command(manager: &CatalogManager, take: Option<usize>) {
    let mut titles = manager.titles();
    let limit = take.unwrap_or(usize::MAX);

    let mut position = 0;
    while position < limit && titles.has_next() {
        if let Some(title) = titles.next_title() {
            position += 1;
            println!("{position}. {title}");
        }
    }
}

/// Full walkthrough over an explicitly constructed manager
fn demo_command(catalog: &CatalogFile, mut manager: CatalogManager) -> Result<()> {
    println!("Starting Shelf catalog demo");
    println!("{}", "=".repeat(50));

    let records = catalog.records.as_slice();

    if let [first, second, rest @ ..] = records {
        println!("\n=== FIRST BOOKS ===");
        println!("First book:  {}", record_summary(first));
        println!("Second book: {}", record_summary(second));
        println!("Remaining:   {} book(s)", rest.len());
    }

    println!("\n=== CATALOG STATISTICS ===");
    display::print_statistics(&manager.get_statistics());

    let all: Vec<_> = manager.records().iter().collect();
    display::print_records(&all, "All books");

    display::print_records(&filter_by_status(records, STATUS_AVAILABLE), "Available");

    let clean = SearchCriteria::new().title("Clean");
    display::print_search_results(&manager.search_records(&clean, false), &clean);

    display::print_analysis(&manager.analyze(), catalog.descriptions());

    println!("\n=== TITLES ===");
    let mut titles = title_sequence(records);
    for position in 1..=3 {
        match titles.next_title() {
            Some(title) => println!("{position}. {title}"),
            None => break,
        }
    }

    println!("\n=== SUMMARIES ===");
    let summarize = formatter(record_summary);
    for line in summarize(manager.records()) {
        println!("  {line}");
    }

    println!("\n=== CACHED SEARCH ===");
    let mut count_matches = Memoize::new(|criteria: &SearchCriteria| {
        manager.search_records(criteria, false).len()
    });
    for _ in 0..2 {
        let hits = count_matches.call(&clean)?;
        println!("Books matching {}: {hits}", clean.describe());
    }
    println!("Cached results: {}", count_matches.len());
    drop(count_matches);

    println!("\n=== MISSING DATA ===");
    let status = records
        .first()
        .and_then(|record| record.status())
        .unwrap_or("unknown");
    println!("First book status: {status}");

    let missing = records
        .get(999)
        .and_then(|record| record.status())
        .unwrap_or("Not found");
    println!("Missing book: {missing}");

    match manager.update_record(999, &RecordUpdate::new().with_title("Test")) {
        Some(record) => println!("Updated: {}", record_summary(record)),
        None => println!("Cannot update missing book 999"),
    }

    println!("\nDemo completed!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_flags() {
        let cli = Cli::parse_from([
            "shelf",
            "search",
            "--title",
            "Clean",
            "--genre",
            "Programming",
            "--case-sensitive",
        ]);

        match cli.command {
            Command::Search {
                title,
                author,
                genre,
                case_sensitive,
                json,
            } => {
                assert_eq!(title.as_deref(), Some("Clean"));
                assert_eq!(author, None);
                assert_eq!(genre.as_deref(), Some("Programming"));
                assert!(case_sensitive);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "shelf",
            "list",
            "--status",
            "checked-out",
            "--catalog",
            "books.yaml",
            "--log-level",
            "debug",
        ]);

        assert_eq!(cli.catalog, Some(PathBuf::from("books.yaml")));
        assert!(matches!(cli.log_level, LogLevel::Debug));
        assert!(matches!(
            cli.command,
            Command::List {
                status: Some(StatusFilter::CheckedOut),
                by_genre: false
            }
        ));
    }

    #[test]
    fn test_builtin_catalog_when_no_file_given() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.records.len(), 4);
    }

    #[test]
    fn test_export_reloads_as_the_same_catalog() {
        let catalog = CatalogFile::builtin();

        let yaml = export_catalog(&catalog, false).unwrap();
        assert!(yaml.contains("status: checked_out"));
        assert_eq!(CatalogFile::from_yaml(&yaml).unwrap(), catalog);

        let json = export_catalog(&catalog, true).unwrap();
        assert!(json.contains("\"dueDate\": \"2024-12-01\""));
        assert_eq!(CatalogFile::from_json(&json).unwrap(), catalog);
    }

    #[test]
    fn test_parse_export_flags() {
        let cli = Cli::parse_from(["shelf", "export", "--json"]);
        assert!(matches!(cli.command, Command::Export { json: true }));
    }

    #[test]
    fn test_missing_catalog_file_is_reported() {
        let err = load_catalog(Some(Path::new("/nonexistent/books.yaml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/books.yaml"));
    }
}
