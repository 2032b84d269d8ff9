use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use api_explorer_service::ViewSnapshot;

use crate::AppState;
use crate::query_types::{BookmarksOnlyRequest, CategoryRequest, SearchRequest};
use crate::response_types::SearchScheduledResponse;

pub async fn set_category(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CategoryRequest>,
) -> Json<ViewSnapshot> {
    let mut explorer = state.explorer();
    explorer.set_category(&req.category);
    Json(explorer.snapshot())
}

/// Debounced unless `immediate` is set; a scheduled update answers `202`.
pub async fn set_search(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> Response {
    if req.immediate {
        state.search_debouncer.cancel();
        let mut explorer = state.explorer();
        explorer.set_search_query(&req.query);
        return Json(explorer.snapshot()).into_response();
    }

    let target = Arc::clone(&state);
    let query = req.query;
    state.search_debouncer.schedule(async move {
        target.explorer().set_search_query(&query);
    });
    let delay_ms = u64::try_from(state.search_debouncer.delay().as_millis()).unwrap_or(u64::MAX);
    (StatusCode::ACCEPTED, Json(SearchScheduledResponse { scheduled: true, delay_ms }))
        .into_response()
}

/// Escape-key behavior: drop any pending input and clear the query.
pub async fn clear_search(State(state): State<Arc<AppState>>) -> Json<ViewSnapshot> {
    state.search_debouncer.cancel();
    let mut explorer = state.explorer();
    explorer.clear_search();
    Json(explorer.snapshot())
}

pub async fn set_bookmarks_only(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookmarksOnlyRequest>,
) -> Json<ViewSnapshot> {
    let mut explorer = state.explorer();
    explorer.set_bookmarks_only(req.enabled);
    Json(explorer.snapshot())
}
