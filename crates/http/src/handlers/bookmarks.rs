use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use crate::AppState;
use crate::api_error::ApiError;
use crate::blocking::blocking;
use crate::response_types::ToggleResponse;

pub async fn toggle_bookmark(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ToggleResponse>, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::BadRequest("bookmark id must not be empty".to_owned()));
    }

    // Flip under the lock; the file write runs on a blocking thread with the
    // lock released so other handlers are not stalled on disk I/O.
    let pending = state.explorer().begin_toggle(&id);
    blocking(move || {
        let persisted = pending.commit();
        let explorer = state.explorer();
        let outcome = explorer.finish_toggle(pending, persisted);
        ToggleResponse {
            id,
            bookmarked: outcome.is_bookmarked,
            persisted: outcome.persisted,
            stats: explorer.stats(),
        }
    })
    .await
    .map(Json)
}
