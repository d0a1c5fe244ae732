pub mod catalog;
pub mod lookup;
pub mod matcher;
pub mod topic;

pub use catalog::{Catalog, CategoryRule, CategoryTable, CATALOG};
pub use lookup::{lookup, lookup_with};
pub use matcher::{
    academic_sources, collect_sources, collect_sources_with, dedup_by_url, historical_figures,
    institutional_sources, MatchMode,
};
pub use topic::{is_question, normalize_topic};
