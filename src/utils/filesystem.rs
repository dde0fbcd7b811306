//! Filesystem utilities for JSON documents

use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::errors::{EnrichError, Result};

/// Read a whole UTF-8 file and decode it as JSON
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|source| EnrichError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {:?}", content.len(), path);

    serde_json::from_str(&content).map_err(|source| EnrichError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Render JSON with 2-space indentation and unescaped non-ASCII text
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(EnrichError::Serialize)
}

/// Replace `path` with `contents` via a temp file in the same directory
///
/// The destination is either fully replaced or left as it was. A symlinked
/// destination is followed so the link survives and its target is updated;
/// an existing file keeps its permissions.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let to_write_error = |source| EnrichError::Write {
        path: path.to_path_buf(),
        source,
    };

    let existing = match std::fs::metadata(path) {
        Ok(metadata) => Some(metadata),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(to_write_error(e)),
    };

    let target = if existing.is_some() {
        std::fs::canonicalize(path).map_err(to_write_error)?
    } else {
        path.to_path_buf()
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(to_write_error)?;
    tmp.write_all(contents.as_bytes()).map_err(to_write_error)?;
    if let Some(metadata) = existing {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(to_write_error)?;
    }
    tmp.as_file().sync_all().map_err(to_write_error)?;
    tmp.persist(&target).map_err(|e| to_write_error(e.error))?;

    debug!("Wrote {} bytes to {:?}", contents.len(), target);
    Ok(())
}

/// Serialize `value` and atomically write it to `path`
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = to_pretty_json(value)?;
    write_atomic(path, &content)
}
