//! Typed error enums for the storage layer.
//!
//! `LoadError` covers catalog fetch/parse failures; the caller shows a degraded
//! state instead of a catalog. `PersistenceError` covers bookmark save/restore
//! failures, which never block the in-memory bookmark state.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Catalog could not be fetched or decoded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Local catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Network transport failure.
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("catalog request returned HTTP {code}")]
    HttpStatus { code: u16 },

    /// Payload is not valid JSON.
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Payload is valid JSON but not a list of records.
    #[error("catalog must be a JSON array, found {found}")]
    NotAList { found: &'static str },
}

/// Bookmark state could not be written to or read from external storage.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backing file exists but does not hold a key-value object.
    #[error("data corruption in {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// Storage refused the write (disabled, read-only, full).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
