//! Artist path index - artist name to canonical path

use std::collections::HashMap;

use tracing::warn;

use crate::models::Artist;

/// Lookup table from exact artist name to `href`
///
/// A `None` value means the artist was listed without an `href`; matching
/// events still receive it (as `null`).
#[derive(Debug, Default, Clone)]
pub struct ArtistPathIndex {
    paths: HashMap<String, Option<String>>,
    /// Number of entries overwritten by a later artist with the same name
    duplicates: usize,
}

impl ArtistPathIndex {
    /// Build the index in a single pass; the last artist with a given name wins
    pub fn build(artists: &[Artist]) -> Self {
        let mut paths = HashMap::with_capacity(artists.len());
        let mut duplicates = 0;

        for artist in artists {
            if let Some(previous) = paths.insert(artist.name.clone(), artist.href.clone()) {
                duplicates += 1;
                warn!(
                    "Duplicate artist name {:?}: {:?} replaced by {:?}",
                    artist.name, previous, artist.href
                );
            }
        }

        Self { paths, duplicates }
    }

    /// Get the path for an exact artist name
    ///
    /// Outer `None`: unknown name. Inner `None`: known name without `href`.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.paths.get(name).map(Option::as_deref)
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of artists whose name repeated an earlier one
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist(name: &str, href: Option<&str>) -> Artist {
        Artist {
            name: name.to_string(),
            href: href.map(str::to_string),
        }
    }

    #[test]
    fn test_build_and_lookup() {
        let index = ArtistPathIndex::build(&[
            artist("Aphex Twin", Some("/artists/aphex-twin")),
            artist("Autechre", Some("/artists/autechre")),
        ]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("Aphex Twin"), Some(Some("/artists/aphex-twin")));
        assert_eq!(index.get("Boards of Canada"), None);
    }

    #[test]
    fn test_last_write_wins() {
        let index = ArtistPathIndex::build(&[
            artist("Aphex Twin", Some("/artists/first")),
            artist("Aphex Twin", Some("/artists/second")),
        ]);

        assert_eq!(index.len(), 1);
        assert_eq!(index.duplicates(), 1);
        assert_eq!(index.get("Aphex Twin"), Some(Some("/artists/second")));
    }

    #[test]
    fn test_missing_href_is_indexed() {
        let index = ArtistPathIndex::build(&[artist("Aphex Twin", None)]);
        assert_eq!(index.get("Aphex Twin"), Some(None));
    }

    #[test]
    fn test_exact_match_only() {
        let index = ArtistPathIndex::build(&[artist("Aphex Twin", Some("/artists/aphex-twin"))]);
        assert_eq!(index.get("aphex twin"), None);
        assert_eq!(index.get(" Aphex Twin"), None);
        assert_eq!(index.get("AphexTwin"), None);
    }

    #[test]
    fn test_empty() {
        let index = ArtistPathIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.duplicates(), 0);
    }
}
