use sourcefinder_common::Lookup;
use tracing::debug;

use crate::catalog::{Catalog, CATALOG};
use crate::matcher::{collect_sources_with, MatchMode};
use crate::topic::is_question;

/// Classify one submitted topic against the shipped catalog.
pub fn lookup(topic: &str, mode: MatchMode) -> Lookup {
    lookup_with(&CATALOG, topic, mode)
}

pub fn lookup_with(catalog: &Catalog, topic: &str, mode: MatchMode) -> Lookup {
    let topic = topic.trim();

    if is_question(topic) {
        debug!("Rejected question-like input");
        return Lookup::Question;
    }
    if topic.is_empty() {
        return Lookup::Idle;
    }

    let sources = collect_sources_with(catalog, topic, mode);
    if sources.is_empty() {
        Lookup::NoSources
    } else {
        Lookup::Found(sources)
    }
}
