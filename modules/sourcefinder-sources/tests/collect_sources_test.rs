//! End-to-end checks of the shipped catalog through `collect_sources`.

use std::collections::HashSet;

use sourcefinder_common::SourceRecord;
use sourcefinder_sources::{collect_sources, is_question};

const RACE_URLS: [&str; 3] = [
    "https://www.ohchr.org/en/treaty-bodies/cerd",
    "https://www.justice.gov/crt/case-summaries",
    "https://www.apa.org/about/policy/guidelines-race-ethnicity.pdf",
];

const MIGRATION_URLS: [&str; 3] = [
    "https://www.unhcr.org/refugee-statistics/",
    "https://worldmigrationreport.iom.int/",
    "https://www.un.org/development/desa/pd/content/international-migrant-stock",
];

fn urls(records: &[SourceRecord]) -> Vec<&'static str> {
    records.iter().map(|r| r.url).collect()
}

fn assert_unique(records: &[SourceRecord]) {
    let mut seen = HashSet::new();
    for record in records {
        assert!(seen.insert(record.url), "duplicate url {}", record.url);
    }
}

#[test]
fn race_keywords_pull_rights_bodies() {
    for topic in [
        "Racism in sports",
        "RACE relations",
        "racial profiling",
        "school segregation",
        "Apartheid",
        "housing discrimination",
    ] {
        let found = urls(&collect_sources(topic));
        for url in RACE_URLS {
            assert!(found.contains(&url), "{topic:?} missing {url}");
        }
    }
}

#[test]
fn racism_also_pulls_figures_after_institutions() {
    let found = urls(&collect_sources("racism"));
    assert_eq!(&found[..3], &RACE_URLS);
    assert_eq!(
        &found[3..],
        &[
            "https://kinginstitute.stanford.edu/papers",
            "https://credo.library.harvard.edu/view/fulltext?doc=DuBois",
        ]
    );
}

#[test]
fn unrelated_topics_find_nothing() {
    for topic in ["", "knitting", "jazz music", "quantum chromodynamics"] {
        assert!(collect_sources(topic).is_empty(), "{topic:?} should find nothing");
    }
}

#[test]
fn collect_is_idempotent() {
    for topic in ["migration", "rome", "world war 2 pollution", "inequality and class"] {
        assert_eq!(collect_sources(topic), collect_sources(topic));
    }
}

#[test]
fn migration_pulls_refugee_data_and_arendt() {
    let records = collect_sources("migration");
    let found = urls(&records);

    assert_eq!(&found[..3], &MIGRATION_URLS);
    assert!(found.contains(&"https://hac.bard.edu/"));
    assert_eq!(found.len(), 4);
    assert_unique(&records);
}

#[test]
fn rome_pulls_roman_archives_only() {
    let records = collect_sources("rome");

    assert!(records.contains(&SourceRecord::new(
        "British Museum Romans",
        "https://www.britishmuseum.org/collection/romans"
    )));
    assert!(records.iter().any(|r| r.title == "LacusCurtius Roman Texts"));
    for url in MIGRATION_URLS.iter().chain(["https://hac.bard.edu/"].iter()) {
        assert!(!urls(&records).contains(url));
    }
}

#[test]
fn overlapping_pollution_rules_keep_one_copy_each() {
    let records = collect_sources("air pollution");
    assert_eq!(records.len(), 6);
    assert_unique(&records);
}

#[test]
fn multi_theme_topic_keeps_table_order() {
    let records = collect_sources("world war refugee inequality");
    let titles: Vec<_> = records.iter().map(|r| r.title).collect();

    let pos = |title: &str| titles.iter().position(|t| *t == title).unwrap();
    // institutional rules in declaration order, then academic, then figures
    assert!(pos("World Bank Gini Data") < pos("UNHCR Refugee Data"));
    assert!(pos("UNHCR Refugee Data") < pos("USHMM Document Archive"));
    assert!(pos("USHMM Document Archive") < pos("US Army WWII Records"));
    assert!(pos("US Army WWII Records") < pos("Marx Collected Works"));
    assert_unique(&records);
}

#[test]
fn interrogative_examples_are_questions() {
    assert!(is_question("Who is Karl Marx"));
    assert!(is_question("What is inequality"));
    assert!(is_question("How does climate change work"));
    assert!(!is_question("karl marx"));
    assert!(!is_question("inequality"));
}
