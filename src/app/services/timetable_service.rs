//! Timetable loading across all configured documents
//!
//! Expands glob patterns, fetches every document concurrently, concatenates
//! the parsed items in configured order and groups them into modules. A
//! failing document contributes nothing; the others are unaffected.

use crate::app::models::{Module, ScheduleItem};
use crate::app::services::document_source::{AnySource, DocumentSource, FileSource, is_glob_pattern, is_remote};
use crate::app::services::module_aggregator::{ModuleCatalog, aggregate};
use crate::app::services::timetable_parser::{ParsingContract, StandardContract, TimetableParser};
use crate::config::Config;
use crate::Result;
use futures::future::join_all;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Loads modules from a fixed, ordered set of timetable documents
#[derive(Debug, Clone)]
pub struct TimetableService<S, C = StandardContract> {
    parser: TimetableParser<C>,
    source: S,
    documents: Vec<String>,
}

impl TimetableService<AnySource> {
    /// Service reading the documents named in the configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = AnySource::new(
            config.sources.data_root.clone(),
            Duration::from_secs(config.sources.http_timeout_secs),
        )?;
        let documents = expand_documents(source.files(), &config.sources.documents)?;

        Ok(Self::new(
            TimetableParser::from_format(config.format.clone()),
            source,
            documents,
        ))
    }
}

impl<S: DocumentSource, C: ParsingContract> TimetableService<S, C> {
    pub fn new(parser: TimetableParser<C>, source: S, documents: Vec<String>) -> Self {
        Self {
            parser,
            source,
            documents,
        }
    }

    /// Document locations in load order
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// Fetch and parse every document, concatenated in document order
    pub async fn load_items(&self) -> Vec<ScheduleItem> {
        let fetches = self
            .documents
            .iter()
            .map(|location| self.parser.fetch_and_parse(&self.source, location));

        let per_document = join_all(fetches).await;

        let mut items = Vec::new();
        for (location, parsed) in self.documents.iter().zip(per_document) {
            if parsed.is_empty() {
                warn!("No schedule items loaded from {}", location);
            }
            items.extend(parsed);
        }

        items
    }

    /// Load every document and group the items into a module catalog
    pub async fn load_catalog(&self) -> ModuleCatalog {
        let catalog = aggregate(self.load_items().await);
        info!(
            "Loaded {} modules with {} schedule items from {} documents",
            catalog.len(),
            catalog.item_count(),
            self.documents.len()
        );
        catalog
    }

    /// Load every document and return the modules in first-seen order
    pub async fn load_modules(&self) -> Vec<Module> {
        self.load_catalog().await.into_modules()
    }
}

/// Replace glob patterns by their sorted matches; other locations pass through
pub fn expand_documents(files: &FileSource, documents: &[String]) -> Result<Vec<String>> {
    let mut expanded = Vec::with_capacity(documents.len());

    for location in documents {
        let location = location.trim();
        if !is_remote(location) && is_glob_pattern(location) {
            let matches = files.expand_glob(location)?;
            if matches.is_empty() {
                warn!("Document pattern '{}' matched no files", location);
            }
            expanded.extend(matches);
        } else {
            expanded.push(location.to_string());
        }
    }

    debug!("Timetable documents: {:?}", expanded);
    Ok(expanded)
}
