use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sourcefinder_sources::MatchMode;

mod session;

#[derive(Parser)]
#[command(name = "sourcefinder", about = "Curated research sources for a topic")]
struct Cli {
    /// Topic to look up once; omit for an interactive session
    topic: Option<String>,

    /// Print the lookup as JSON (one-shot only)
    #[arg(long, requires = "topic")]
    json: bool,

    /// Strip leading question phrases ("tell me about ...") before matching
    #[arg(long)]
    normalize: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sourcefinder=warn".parse()?))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mode = if cli.normalize {
        MatchMode::Normalized
    } else {
        MatchMode::Raw
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.topic {
        Some(topic) => session::run_once(&mut out, &topic, mode, cli.json)?,
        None => {
            let stdin = io::stdin();
            session::run_interactive(stdin.lock(), &mut out, mode)?;
        }
    }

    Ok(())
}
