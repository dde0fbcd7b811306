//! Copy artist paths onto events whose title names an artist

use tracing::{debug, info, warn};

use crate::config::Paths;
use crate::errors::Result;
use crate::models::{Artist, Event, EventsDocument};
use crate::stores::ArtistPathIndex;
use crate::utils::filesystem::{read_json, write_json};

/// Counts from one enrichment pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EnrichReport {
    /// Events visited
    pub scanned: usize,
    /// Events whose title matched an artist name
    pub matched: usize,
    /// Matched events whose `path` actually changed
    pub changed: usize,
}

/// Set `path` on every event whose title is an indexed artist name
///
/// Events are mutated in place; none are added, removed or reordered, and
/// nothing but `path` is touched.
pub fn enrich(events: &mut [Event], index: &ArtistPathIndex) -> EnrichReport {
    let mut report = EnrichReport {
        scanned: events.len(),
        ..Default::default()
    };

    for event in events.iter_mut() {
        let Some(href) = event.title().and_then(|title| index.get(title)) else {
            continue;
        };

        report.matched += 1;
        if event.set_path(href) {
            report.changed += 1;
        }
    }

    report
}

/// Run the whole pass against the files in `paths`
///
/// Both inputs are read before anything is written; with `dry_run` the
/// events document is left untouched.
pub fn enrich_files(paths: &Paths, dry_run: bool) -> Result<EnrichReport> {
    let artists: Vec<Artist> = read_json(paths.artists_file())?;
    info!("Loaded {} artists from {:?}", artists.len(), paths.artists_file());

    let mut document: EventsDocument = read_json(paths.events_file())?;
    info!(
        "Loaded {} events from {:?}",
        document.events.len(),
        paths.events_file()
    );

    let index = ArtistPathIndex::build(&artists);
    if index.is_empty() {
        warn!("No artists loaded, no event will match");
    }
    debug!(
        "Indexed {} artist names ({} duplicates)",
        index.len(),
        index.duplicates()
    );

    let report = enrich(&mut document.events, &index);
    info!(
        "Matched {} of {} events, {} changed",
        report.matched, report.scanned, report.changed
    );

    if dry_run {
        info!("Dry run, not writing {:?}", paths.events_file());
    } else {
        write_json(paths.events_file(), &document)?;
    }

    Ok(report)
}
