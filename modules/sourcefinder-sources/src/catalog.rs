//! Curated source tables.
//!
//! Each table is plain data: a rule fires when any of its keywords is a
//! substring of the lowercased topic, contributing all of its records.
//! Adding a source means adding a record literal here and nothing else.

use sourcefinder_common::SourceRecord;

/// Keywords mapped to the records they pull in.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub keywords: &'static [&'static str],
    pub records: &'static [SourceRecord],
}

impl CategoryRule {
    /// Unanchored substring containment against an already-lowercased topic.
    pub fn triggers(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// A named, ordered set of rules evaluated by one matcher.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTable {
    pub name: &'static str,
    pub rules: &'static [CategoryRule],
}

impl CategoryTable {
    /// Records of every triggered rule, in declaration order. Duplicates are kept.
    pub fn matches(&self, lowered: &str) -> Vec<SourceRecord> {
        self.rules
            .iter()
            .filter(|rule| rule.triggers(lowered))
            .flat_map(|rule| rule.records.iter().copied())
            .collect()
    }
}

/// The three tables in matcher order.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub institutional: CategoryTable,
    pub academic: CategoryTable,
    pub figures: CategoryTable,
}

impl Catalog {
    pub fn tables(&self) -> [&CategoryTable; 3] {
        [&self.institutional, &self.academic, &self.figures]
    }
}

pub static CATALOG: Catalog = Catalog {
    institutional: CategoryTable {
        name: "institutional",
        rules: INSTITUTIONAL,
    },
    academic: CategoryTable {
        name: "academic",
        rules: ACADEMIC,
    },
    figures: CategoryTable {
        name: "figures",
        rules: FIGURES,
    },
};

const fn r(title: &'static str, url: &'static str) -> SourceRecord {
    SourceRecord::new(title, url)
}

// ---------------------------------------------------------------------------
// Institutional: official statistics, treaty bodies, government archives
// ---------------------------------------------------------------------------

const INSTITUTIONAL: &[CategoryRule] = &[
    // Racism, discrimination, identity
    CategoryRule {
        keywords: &["racism", "race", "racial", "segregation", "apartheid", "discrimination"],
        records: &[
            r("UN CERD Committee Reports", "https://www.ohchr.org/en/treaty-bodies/cerd"),
            r("US DOJ Civil Rights Cases", "https://www.justice.gov/crt/case-summaries"),
            r(
                "APA Race Guidelines PDF",
                "https://www.apa.org/about/policy/guidelines-race-ethnicity.pdf",
            ),
        ],
    },
    // Inequality & economics
    CategoryRule {
        keywords: &["inequality", "poverty", "economy", "class"],
        records: &[
            r("World Bank Gini Data", "https://data.worldbank.org/indicator/SI.POV.GINI"),
            r("OECD Inequality Stats", "https://stats.oecd.org/Index.aspx?DataSetCode=IDD"),
            r(
                "UNDP Inequality HDI",
                "https://hdr.undp.org/data-center/inequality-adjusted-human-development-index",
            ),
        ],
    },
    // Migration & refugees
    CategoryRule {
        keywords: &[
            "migration",
            "migrate",
            "immigration",
            "emigration",
            "refugee",
            "asylum",
            "border",
            "displacement",
        ],
        records: &[
            r("UNHCR Refugee Data", "https://www.unhcr.org/refugee-statistics/"),
            r("IOM Migration Report 2024", "https://worldmigrationreport.iom.int/"),
            r(
                "UN Migrant Stock Data",
                "https://www.un.org/development/desa/pd/content/international-migrant-stock",
            ),
        ],
    },
    // Politics & governance
    CategoryRule {
        keywords: &["government", "policy", "politics", "democracy"],
        records: &[
            r("Freedom House 2025 Report", "https://freedomhouse.org/report/freedom-world"),
            r(
                "World Bank Governance Data",
                "https://www.worldbank.org/en/publication/worldwide-governance-indicators",
            ),
            r("V-Dem Democracy Dataset", "https://v-dem.net/"),
        ],
    },
    // Climate & environment
    CategoryRule {
        keywords: &[
            "climate",
            "climate change",
            "climate crisis",
            "global warming",
            "environment",
            "carbon",
            "pollution",
        ],
        records: &[
            r("IPCC AR6 Climate Report", "https://www.ipcc.ch/report/ar6/syr/"),
            r("World Bank Climate Data", "https://climateknowledgeportal.worldbank.org/"),
            r("UNEP Emissions Gap Report", "https://www.unep.org/emissions-gap-report-2024"),
        ],
    },
    // Pollution
    CategoryRule {
        keywords: &["pollution", "air pollution", "water pollution", "soil pollution", "pm2.5"],
        records: &[
            r(
                "World Bank PM2.5 Pollution Data",
                "https://data.worldbank.org/indicator/EN.ATM.PM25.MC.M3",
            ),
            r("WHO Air Quality Database", "https://www.who.int/data/gho/data/themes/air-pollution"),
            r(
                "World Bank Pollution Management",
                "https://ieg.worldbankgroup.org/evaluations/pollution",
            ),
        ],
    },
    // Population & demographics
    CategoryRule {
        keywords: &["population", "mortality", "fertility", "birth", "death", "aging"],
        records: &[
            r(
                "UN Population Prospects CSV",
                "https://population.un.org/wpp/Download/Standard/CSV_WPP/",
            ),
            r("World Bank Birth Rates", "https://data.worldbank.org/indicator/SP.DYN.CBRT.IN"),
            r("World Bank Death Rates", "https://data.worldbank.org/indicator/SP.DYN.CDRT.IN"),
        ],
    },
    // War & genocide
    CategoryRule {
        keywords: &["war", "genocide", "holocaust"],
        records: &[
            r("USHMM Document Archive", "https://www.ushmm.org/online/hsv/source_view.php"),
            r("Uppsala Conflict Database", "https://ucdp.uu.se/downloads/index.html"),
            r("UN Genocide Documents", "https://www.un.org/en/genocideprevention/documents"),
        ],
    },
];

// ---------------------------------------------------------------------------
// Academic: digital libraries and archives by civilization or period
// ---------------------------------------------------------------------------

const ACADEMIC: &[CategoryRule] = &[
    CategoryRule {
        keywords: &["ancient"],
        records: &[
            r("Perseus Digital Library", "http://www.perseus.tufts.edu/hopper/"),
            r("Fordham Ancient Texts", "https://sourcebooks.fordham.edu/ancient/asbook.asp"),
        ],
    },
    CategoryRule {
        keywords: &["sumer"],
        records: &[
            r("Electronic Text Corpus Sumerian", "https://etcsl.orinst.ox.ac.uk/"),
            r("CDLI Cuneiform Digital Library", "https://cdli.ucla.edu/"),
        ],
    },
    CategoryRule {
        keywords: &["rome"],
        records: &[
            r("British Museum Romans", "https://www.britishmuseum.org/collection/romans"),
            r(
                "LacusCurtius Roman Texts",
                "https://penelope.uchicago.edu/Thayer/E/Roman/home.html",
            ),
        ],
    },
    CategoryRule {
        keywords: &["1700s"],
        records: &[
            r(
                "Enlightenment Documents - Yale Avalon",
                "https://avalon.law.yale.edu/subject_menus/18th.asp",
            ),
            r("French Revolution Primary Sources", "https://revolution.chnm.org/"),
        ],
    },
    CategoryRule {
        keywords: &["world war"],
        records: &[
            r(
                "US Army WWII Records",
                "https://www.history.army.mil/html/reference/wwII/index.html",
            ),
            r("Imperial War Museum WWII", "https://www.iwm.org.uk/history/second-world-war"),
        ],
    },
    CategoryRule {
        keywords: &["cold war"],
        records: &[
            r("Wilson Cold War Archive", "https://digitalarchive.wilsoncenter.org/"),
            r(
                "Cold War History Project",
                "https://www.wilsoncenter.org/program/cold-war-international-history-project",
            ),
        ],
    },
    CategoryRule {
        keywords: &["gulf war"],
        records: &[
            r(
                "Gulf War Documents - National Security Archive",
                "https://nsarchive2.gwu.edu/project/gulf-war-files",
            ),
            r(
                "British National Archives Gulf War",
                "https://www.nationalarchives.gov.uk/education/resources/gulf-war/",
            ),
            r(
                "US Army Gulf War Official History",
                "https://history.army.mil/html/bookshelves/collect/72-29.html",
            ),
        ],
    },
];

// ---------------------------------------------------------------------------
// Historical figures: collected papers of thinkers tied to a theme
// ---------------------------------------------------------------------------

const FIGURES: &[CategoryRule] = &[
    CategoryRule {
        keywords: &["racism"],
        records: &[
            r("MLK Papers Project", "https://kinginstitute.stanford.edu/papers"),
            r(
                "Du Bois Papers Edition",
                "https://credo.library.harvard.edu/view/fulltext?doc=DuBois",
            ),
        ],
    },
    CategoryRule {
        keywords: &["inequality"],
        records: &[
            r("Marx Collected Works", "https://www.marxists.org/archive/marx/works/"),
            r("Weber Economy Society", "https://www.maxweberstiftung.de/en"),
        ],
    },
    CategoryRule {
        keywords: &["psychology"],
        records: &[
            r("Freud Complete Works", "https://www.freud.org.uk/learn-discover/freud-online/"),
            r(
                "Jung Collected Works",
                "https://press.princeton.edu/series/collected-works-of-c-g-jung",
            ),
        ],
    },
    CategoryRule {
        keywords: &["migration"],
        records: &[r("Hannah Arendt Papers", "https://hac.bard.edu/")],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_rule_has_keywords_and_records() {
        for table in CATALOG.tables() {
            for rule in table.rules {
                assert!(!rule.keywords.is_empty(), "{} rule without keywords", table.name);
                assert!(!rule.records.is_empty(), "{} rule without records", table.name);
            }
        }
    }

    #[test]
    fn keywords_are_lowercase() {
        for table in CATALOG.tables() {
            for keyword in table.rules.iter().flat_map(|r| r.keywords) {
                assert_eq!(*keyword, keyword.to_lowercase(), "{} keyword {keyword}", table.name);
            }
        }
    }

    #[test]
    fn academic_and_figure_rules_have_single_keyword() {
        for rule in CATALOG.academic.rules.iter().chain(CATALOG.figures.rules) {
            assert_eq!(rule.keywords.len(), 1);
        }
    }

    #[test]
    fn urls_are_unique_within_each_table() {
        for table in CATALOG.tables() {
            let mut seen = HashSet::new();
            for record in table.rules.iter().flat_map(|r| r.records) {
                assert!(seen.insert(record.url), "{} repeats {}", table.name, record.url);
            }
        }
    }

    #[test]
    fn urls_are_http() {
        for table in CATALOG.tables() {
            for record in table.rules.iter().flat_map(|r| r.records) {
                assert!(record.url.starts_with("http://") || record.url.starts_with("https://"));
            }
        }
    }

    #[test]
    fn rule_fires_on_any_keyword() {
        let rule = &CATALOG.institutional.rules[0];
        assert!(rule.triggers("apartheid in south africa"));
        assert!(rule.triggers("workplace discrimination"));
        assert!(!rule.triggers("rome"));
    }

    #[test]
    fn overlapping_rules_both_fire() {
        // "pollution" sits in both the climate and the pollution rule.
        let records = CATALOG.institutional.matches("pollution");
        assert_eq!(records.len(), 6);
        assert_eq!(records[0].title, "IPCC AR6 Climate Report");
        assert_eq!(records[3].title, "World Bank PM2.5 Pollution Data");
    }
}
