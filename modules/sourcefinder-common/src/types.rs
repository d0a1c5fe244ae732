use serde::Serialize;

/// Warning shown when the input reads like a direct question rather than a topic.
pub const QUESTION_WARNING: &str = "⚠️ Please enter a research topic, not a direct question.";

/// Informational message shown when a valid topic matched nothing.
pub const NO_SOURCES_MESSAGE: &str = "No sources found. Try a different research topic.";

/// A titled external reference. Identity is the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourceRecord {
    pub title: &'static str,
    pub url: &'static str,
}

impl SourceRecord {
    pub const fn new(title: &'static str, url: &'static str) -> Self {
        Self { title, url }
    }
}

/// Outcome of looking up one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Nothing was entered.
    Idle,
    /// The input starts with an interrogative word.
    Question,
    /// A topic was entered but no table matched it.
    NoSources,
    /// Deduplicated result set, in matcher-then-rule order.
    Found(Vec<SourceRecord>),
}

impl Lookup {
    /// User-facing warning for this outcome, if any.
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            Lookup::Question => Some(QUESTION_WARNING),
            Lookup::NoSources => Some(NO_SOURCES_MESSAGE),
            Lookup::Idle | Lookup::Found(_) => None,
        }
    }

    pub fn sources(&self) -> &[SourceRecord] {
        match self {
            Lookup::Found(records) => records,
            _ => &[],
        }
    }

    pub fn is_question(&self) -> bool {
        matches!(self, Lookup::Question)
    }
}

/// JSON body describing a lookup, shared by the HTTP API and the CLI `--json` mode.
#[derive(Debug, Clone, Serialize)]
pub struct SourcesResponse {
    pub topic: String,
    pub question: bool,
    pub warning: String,
    pub sources: Vec<SourceRecord>,
}

impl SourcesResponse {
    pub fn new(topic: &str, lookup: &Lookup) -> Self {
        Self {
            topic: topic.to_string(),
            question: lookup.is_question(),
            warning: lookup.warning().unwrap_or_default().to_string(),
            sources: lookup.sources().to_vec(),
        }
    }
}
