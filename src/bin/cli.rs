//! resolve-dates CLI
//!
//! Command-line front end for the placeholder engine. Resolves a single token
//! or a whole JSON fixture file, with an optional pinned "today" so output is
//! reproducible in scripts and CI logs.

use anyhow::Context;
use booking_testdata::{Clock, FixedClock, PlaceholderResolver, SystemClock, TestDataLoader, DATE_FORMAT};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resolve-dates")]
#[command(version)]
#[command(about = "Resolve date placeholders used in booking test fixtures", long_about = None)]
struct Cli {
    /// Pin "today" to a fixed date (yyyy-MM-dd) for reproducible output
    #[arg(long, global = true, value_name = "DATE")]
    today: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a single placeholder token or literal date
    Resolve {
        /// Token to resolve, e.g. '<NEXT_FRIDAY>' or '2025-09-26'
        token: String,

        /// Reference date for relative placeholders (yyyy-MM-dd)
        #[arg(long, short = 'r', value_name = "DATE")]
        reference: Option<String>,
    },

    /// Resolve every record in a JSON fixture file and print the result
    Fixture {
        /// Path to the fixture file (a JSON array of booking records)
        path: PathBuf,
    },
}

fn parse_date(value: &str, what: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .with_context(|| format!("invalid {} '{}', expected yyyy-MM-dd", what, value))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // A single snapshot of "today" for the whole invocation, so two
    // resolutions cannot straddle midnight
    let today = match cli.today {
        Some(ref value) => parse_date(value, "--today value")?,
        None => SystemClock.today(),
    };
    let clock = FixedClock::new(today);

    match cli.command {
        Command::Resolve { token, reference } => {
            let reference = reference
                .as_deref()
                .map(|value| parse_date(value, "--reference value"))
                .transpose()?;

            let resolver = PlaceholderResolver::with_clock(clock);
            let resolved = resolver
                .resolve(&token, reference)
                .with_context(|| format!("failed to resolve '{}'", token))?;

            println!("{}", resolved);
        }
        Command::Fixture { path } => {
            let loader = TestDataLoader::with_clock(clock);
            let records = loader
                .load_path(&path)
                .with_context(|| format!("failed to load fixture {}", path.display()))?;

            eprintln!("Resolved {} record(s) against today={}", records.len(), today);
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    Ok(())
}
