//! In-memory lookup tables built once per run

mod artist_store;

pub use artist_store::ArtistPathIndex;
