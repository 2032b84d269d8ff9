//! Typed error enum for the service layer.

use api_explorer_storage::{LoadError, PersistenceError};
use thiserror::Error;

/// Service-layer error unifying catalog and persistence failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Catalog fetch or decode failed.
    #[error("catalog: {0}")]
    Load(#[from] LoadError),

    /// Bookmark storage failed.
    #[error("bookmarks: {0}")]
    Persistence(#[from] PersistenceError),

    /// Catalog has not finished loading yet.
    #[error("catalog is still loading")]
    NotReady,

    /// Catalog load ended in the failed state.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),
}
