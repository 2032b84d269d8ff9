//! HTTP adapter for api-explorer.
//!
//! Exposes the explorer entrypoints as a JSON API, owns the search debounce
//! timer and forwards state-change notifications over SSE.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::shadow_reuse, reason = "Shadowing for Arc clones is idiomatic")]

pub mod api_error;
mod blocking;
pub mod debounce;
mod handlers;
mod query_types;
mod response_types;

use axum::{
    Json, Router,
    routing::{get, post, put},
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;

use api_explorer_service::Explorer;
use api_explorer_storage::CatalogSource;

pub use debounce::Debouncer;
pub use response_types::{SearchScheduledResponse, ToggleResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
///
/// The explorer sits behind one mutex: every event handler runs to completion
/// before the next one touches the state.
pub struct AppState {
    explorer: Arc<Mutex<Explorer>>,
    /// Coalesces search input; owned here, not by the explorer.
    pub search_debouncer: Debouncer,
}

impl AppState {
    #[must_use]
    pub fn new(explorer: Explorer, search_debounce: Duration) -> Self {
        Self {
            explorer: Arc::new(Mutex::new(explorer)),
            search_debouncer: Debouncer::new(search_debounce),
        }
    }

    /// Lock the explorer. Do not hold the guard across an `.await`.
    pub fn explorer(&self) -> MutexGuard<'_, Explorer> {
        // Explorer mutators never leave it half-updated, so a poisoned lock is still usable.
        self.explorer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Fetch the catalog in the background and settle the explorer's load status.
///
/// The fetch runs without holding the explorer lock; only the final
/// status transition takes it.
pub fn spawn_catalog_load(state: Arc<AppState>, source: Box<dyn CatalogSource>) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!(source = %source.describe(), "loading catalog");
        let result = source.load().await;
        state.explorer().finish_load(result);
    })
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/status", get(handlers::view::get_status))
        .route("/api/view", get(handlers::view::get_view))
        .route("/api/entries", get(handlers::view::get_entries))
        .route("/api/categories", get(handlers::view::get_categories))
        .route("/api/stats", get(handlers::view::get_stats))
        .route("/api/criteria/category", put(handlers::criteria::set_category))
        .route(
            "/api/criteria/search",
            put(handlers::criteria::set_search).delete(handlers::criteria::clear_search),
        )
        .route("/api/criteria/bookmarks-only", put(handlers::criteria::set_bookmarks_only))
        .route("/api/bookmarks/{id}/toggle", post(handlers::bookmarks::toggle_bookmark))
        .route("/events", get(handlers::events::sse_events))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
