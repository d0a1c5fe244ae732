//! Terminal rendering of lookups and the interactive prompt loop.

use std::io::{BufRead, Write};

use anyhow::Context;
use sourcefinder_common::{Lookup, SourceFinderError, SourcesResponse, QUESTION_WARNING};
use sourcefinder_sources::{lookup, MatchMode};
use tracing::{debug, info};

const EXIT_WORDS: [&str; 3] = ["exit", "quit", "q"];
const PROMPT: &str = "Enter research topic (or 'exit'): ";
const NO_SOURCES_HINT: &str =
    "❌ No sources found. Try: rome, world war 2, cold war, birth, climate, migration";

pub fn print_banner<W: Write>(out: &mut W) -> Result<(), SourceFinderError> {
    writeln!(out, "🌍 Reliable Research Sources - SPECIFIC LINKS")?;
    writeln!(out, "Background info only, no direct questions")?;
    writeln!(out, "{}", "-".repeat(70))?;
    Ok(())
}

/// Prompt for topics until an exit word or end of input.
pub fn run_interactive<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    mode: MatchMode,
) -> Result<(), SourceFinderError> {
    print_banner(out)?;

    let mut line = String::new();
    loop {
        write!(out, "\n{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            debug!("Input closed");
            return Ok(());
        }

        let topic = line.trim();
        if EXIT_WORDS.contains(&topic.to_lowercase().as_str()) {
            writeln!(out, "Goodbye!")?;
            return Ok(());
        }
        if topic.is_empty() {
            continue;
        }

        print_lookup(out, topic, &lookup(topic, mode))?;
    }
}

/// Look up a single topic, printed as text or as the JSON API body.
pub fn run_once<W: Write>(
    out: &mut W,
    topic: &str,
    mode: MatchMode,
    json: bool,
) -> Result<(), SourceFinderError> {
    let topic = topic.trim();
    let result = lookup(topic, mode);
    info!(count = result.sources().len(), "One-shot lookup");

    if json {
        let body = serde_json::to_string_pretty(&SourcesResponse::new(topic, &result))
            .context("Failed to serialize lookup")?;
        writeln!(out, "{body}")?;
    } else {
        print_lookup(out, topic, &result)?;
    }
    Ok(())
}

pub fn print_lookup<W: Write>(
    out: &mut W,
    topic: &str,
    result: &Lookup,
) -> Result<(), SourceFinderError> {
    match result {
        Lookup::Idle => {}
        Lookup::Question => writeln!(out, "{QUESTION_WARNING}")?,
        Lookup::NoSources => writeln!(out, "{NO_SOURCES_HINT}")?,
        Lookup::Found(sources) => {
            writeln!(
                out,
                "\n✅ {} RELIABLE SOURCES for '{}':\n",
                sources.len(),
                title_case(topic)
            )?;
            for (i, s) in sources.iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, s.title)?;
                writeln!(out, "   {}\n", s.url)?;
            }
        }
    }
    Ok(())
}

/// Capitalize the first letter of every alphabetic run, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if in_word {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        in_word = c.is_alphabetic();
    }
    out
}
