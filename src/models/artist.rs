//! Artist model

use serde::{Deserialize, Serialize};

/// An artist from the scraped artist list
///
/// Any other fields present in the source are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Display name, matched exactly against event titles
    pub name: String,
    /// Canonical path/slug, e.g. `/artists/aphex-twin`
    #[serde(default)]
    pub href: Option<String>,
}
