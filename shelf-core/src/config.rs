//! Catalog seed files
//!
//! A catalog file lists the initial records and optional genre descriptions:
//!
//! ```yaml
//! records:
//!   - id: 1
//!     title: The Clean Coder
//!     author: Robert C. Martin
//!     year: 2011
//!     genre: Programming
//!     availability:
//!       status: available
//!       location: A1-23
//! categories:
//!   Programming: Books about programming languages and techniques
//! ```
//!
//! Files ending in `.json` are parsed as JSON, everything else as YAML.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::record::Record;
use crate::store::{demo_records, CategoryDescriptions};

/// Contents of a catalog seed file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Initial records, in order
    #[serde(default)]
    pub records: Vec<Record>,

    /// Genre → description
    #[serde(default)]
    pub categories: CategoryDescriptions,
}

impl CatalogFile {
    /// The built-in demo catalog
    pub fn builtin() -> Self {
        Self {
            records: demo_records(),
            categories: CategoryDescriptions::builtin(),
        }
    }

    /// Load a catalog file, choosing the parser by extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!(
                "Failed to read catalog file {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_yaml(&content)?
        };

        debug!(
            path = %path.display(),
            records = catalog.records.len(),
            categories = catalog.categories.len(),
            "Loaded catalog file"
        );
        Ok(catalog)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    pub fn descriptions(&self) -> &CategoryDescriptions {
        &self.categories
    }
}
