//! Configuration module
//!
//! Resolves the locations of the artist source and the events document.

mod paths;

pub use paths::Paths;

/// Default artist source, relative to the working directory
pub const DEFAULT_ARTISTS_FILE: &str = "scraped-artists.json";

/// Default events document, relative to the working directory
pub const DEFAULT_EVENTS_FILE: &str = "server/events.json";
