//! Data models
//!
//! Artist records are decoded into typed structs; event records stay ordered
//! JSON objects so fields this tool never touches survive a rewrite as-is.

mod artist;
mod event;

pub use artist::Artist;
pub use event::{Event, EventsDocument};
