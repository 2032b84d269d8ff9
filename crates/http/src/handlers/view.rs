use axum::{Json, extract::State};
use std::sync::Arc;

use api_explorer_core::{CategoryCount, EntryView, LoadStatus, Stats};
use api_explorer_service::ViewSnapshot;

use crate::AppState;
use crate::api_error::ApiError;

pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<LoadStatus> {
    Json(state.explorer().status().clone())
}

pub async fn get_view(State(state): State<Arc<AppState>>) -> Json<ViewSnapshot> {
    Json(state.explorer().snapshot())
}

pub async fn get_entries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EntryView>>, ApiError> {
    let explorer = state.explorer();
    explorer.require_ready()?;
    Ok(Json(explorer.visible_entries()))
}

pub async fn get_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CategoryCount>>, ApiError> {
    let explorer = state.explorer();
    explorer.require_ready()?;
    Ok(Json(explorer.category_summary()))
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Result<Json<Stats>, ApiError> {
    let explorer = state.explorer();
    explorer.require_ready()?;
    Ok(Json(explorer.stats()))
}
