//! Core enrichment logic

pub mod enricher;

pub use enricher::{enrich, enrich_files, EnrichReport};
