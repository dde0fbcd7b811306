//! Path management for a single run

use std::path::{Path, PathBuf};

use super::{DEFAULT_ARTISTS_FILE, DEFAULT_EVENTS_FILE};

/// File locations used by one enrichment run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Artist source (read-only)
    artists_file: PathBuf,
    /// Events document (read, then rewritten in place)
    events_file: PathBuf,
}

impl Paths {
    /// Build from optional overrides, falling back to the fixed defaults
    pub fn new(artists: Option<PathBuf>, events: Option<PathBuf>) -> Self {
        Self {
            artists_file: artists.unwrap_or_else(|| PathBuf::from(DEFAULT_ARTISTS_FILE)),
            events_file: events.unwrap_or_else(|| PathBuf::from(DEFAULT_EVENTS_FILE)),
        }
    }

    // ========== Getters ==========

    /// Get the artist source path
    pub fn artists_file(&self) -> &Path {
        &self.artists_file
    }

    /// Get the events document path
    pub fn events_file(&self) -> &Path {
        &self.events_file
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new(None, None)
    }
}
