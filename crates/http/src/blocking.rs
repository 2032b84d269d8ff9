//! Helper for running blocking explorer operations in async handlers.
//!
//! Bookmark toggles write to disk; they run on the blocking pool so the
//! async workers never wait on file I/O.

use tokio::task::spawn_blocking;

use crate::api_error::ApiError;

/// Runs a blocking closure, mapping a join failure to `ApiError::Internal`.
pub async fn blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("spawn_blocking join error: {e}")))
}
