//! Command-line portfolio screener.
//!
//! Reads a portfolio file (reference date, record count, one trade per
//! line) and prints one risk category label per trade, in input order.
//!
//! ```bash
//! screener Portfolio1.txt
//! screener Portfolio1.txt --skip-bad-records
//! screener Portfolio1.txt --json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use screener_core::{ParseErrorPolicy, RunConfig};
use screener_ingestion::screen_portfolio;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "screener", version, about = "Classify portfolio trades into risk categories")]
struct Cli {
    /// Portfolio file to screen.
    input: PathBuf,

    /// Skip malformed trade lines instead of aborting on the first one.
    #[arg(long)]
    skip_bad_records: bool,

    /// Emit the full screening report as JSON instead of one label per line.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = RunConfig {
        on_parse_error: if cli.skip_bad_records {
            ParseErrorPolicy::Skip
        } else {
            ParseErrorPolicy::Abort
        },
    };

    let file = File::open(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;
    let report = screen_portfolio(BufReader::new(file), &config)
        .with_context(|| format!("failed to screen {}", cli.input.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for label in &report.labels {
            println!("{label}");
        }
    }

    Ok(())
}
