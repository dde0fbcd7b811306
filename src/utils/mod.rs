//! Utility modules

pub mod filesystem;
