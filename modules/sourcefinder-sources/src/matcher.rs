use std::collections::HashSet;

use sourcefinder_common::SourceRecord;
use tracing::debug;

use crate::catalog::{Catalog, CATALOG};
use crate::topic::normalize_topic;

/// Which form of the topic the tables are matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Lowercased raw input. Question phrases stay in place.
    #[default]
    Raw,
    /// Output of [`normalize_topic`], with a leading question phrase removed.
    Normalized,
}

impl MatchMode {
    fn prepare(self, topic: &str) -> String {
        match self {
            MatchMode::Raw => topic.to_lowercase(),
            MatchMode::Normalized => normalize_topic(topic),
        }
    }
}

pub fn institutional_sources(topic: &str) -> Vec<SourceRecord> {
    CATALOG.institutional.matches(&topic.to_lowercase())
}

pub fn academic_sources(topic: &str) -> Vec<SourceRecord> {
    CATALOG.academic.matches(&topic.to_lowercase())
}

pub fn historical_figures(topic: &str) -> Vec<SourceRecord> {
    CATALOG.figures.matches(&topic.to_lowercase())
}

/// All sources for a topic from the shipped catalog, deduplicated by URL.
pub fn collect_sources(topic: &str) -> Vec<SourceRecord> {
    collect_sources_with(&CATALOG, topic, MatchMode::Raw)
}

/// Institutional, then academic, then figures; first record per URL wins.
pub fn collect_sources_with(catalog: &Catalog, topic: &str, mode: MatchMode) -> Vec<SourceRecord> {
    let prepared = mode.prepare(topic);

    let mut sources = Vec::new();
    for table in catalog.tables() {
        let matched = table.matches(&prepared);
        if !matched.is_empty() {
            debug!(table = table.name, count = matched.len(), "Table matched");
        }
        sources.extend(matched);
    }

    let unique = dedup_by_url(sources);
    debug!(count = unique.len(), ?mode, "Collected sources");
    unique
}

/// Order-preserving dedup keyed on URL.
pub fn dedup_by_url(records: Vec<SourceRecord>) -> Vec<SourceRecord> {
    let mut seen = HashSet::new();
    records.into_iter().filter(|s| seen.insert(s.url)).collect()
}
