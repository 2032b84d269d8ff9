use anyhow::Result;
use api_explorer_http::{AppState, create_router, spawn_catalog_load};
use api_explorer_service::Explorer;
use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;

pub(crate) async fn run(
    config: &AppConfig,
    port: u16,
    host: String,
    debounce_ms: Option<u64>,
) -> Result<()> {
    let debounce = debounce_ms.map_or(config.search_debounce, Duration::from_millis);
    let explorer = Explorer::new(config.bookmark_store());
    let state = Arc::new(AppState::new(explorer, debounce));

    match &config.storage_path {
        Some(path) => tracing::info!("Persisting bookmarks to {}", path.display()),
        None => tracing::info!("Bookmark persistence disabled for this run"),
    }

    // Status reports `loading` until this settles.
    spawn_catalog_load(Arc::clone(&state), config.catalog.clone().into_source());

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
