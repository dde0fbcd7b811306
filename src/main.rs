//! event-paths - copy canonical artist paths onto matching events
//!
//! Reads the scraped artist list, indexes it by exact artist name, sets `path`
//! on every event whose title names an artist, and rewrites the events file.

mod config;
mod core;
mod errors;
mod models;
mod stores;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

/// Copy artist paths onto matching events
#[derive(Parser, Debug)]
#[command(name = "event-paths")]
#[command(version)]
#[command(about = "Copy canonical artist paths onto events whose title matches an artist name")]
struct Args {
    /// Artist list to read names and hrefs from
    #[arg(long)]
    artists: Option<PathBuf>,

    /// Events document to enrich in place
    #[arg(long)]
    events: Option<PathBuf>,

    /// Run the pass without writing the events document
    #[arg(long)]
    dry_run: bool,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // logs go to stderr; stdout only carries the confirmation line
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    let paths = config::Paths::new(args.artists, args.events);
    info!("Artist source: {:?}", paths.artists_file());
    info!("Events document: {:?}", paths.events_file());

    let report = core::enrich_files(&paths, args.dry_run).with_context(|| {
        format!(
            "Failed to update event paths in {}",
            paths.events_file().display()
        )
    })?;

    println!(
        "{}",
        confirmation_message(&report, paths.events_file(), args.dry_run)
    );

    Ok(())
}

/// The single line printed on success
fn confirmation_message(
    report: &core::EnrichReport,
    events_file: &Path,
    dry_run: bool,
) -> String {
    if dry_run {
        format!(
            "Dry run: {} of {} events would change, nothing written",
            report.changed, report.scanned
        )
    } else {
        format!(
            "Updated event paths in {} ({} matched, {} changed)",
            events_file.display(),
            report.matched,
            report.changed
        )
    }
}
