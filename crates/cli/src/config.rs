//! Runtime configuration: CLI flags first, then environment, then defaults.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use api_explorer_core::env_config::{
    CATALOG_ENV, DATA_DIR_ENV, DEBOUNCE_MS_ENV, env_non_empty, env_parse_with_default,
};
use api_explorer_core::{DEFAULT_CATALOG_PATH, DEFAULT_SEARCH_DEBOUNCE_MS};
use api_explorer_storage::{
    BookmarkStore, CatalogLocation, JsonFileStore, KeyValueStore, MemoryStore,
};

const APP_DIR: &str = "api-explorer";
const STORAGE_FILE: &str = "storage.json";

pub(crate) struct AppConfig {
    pub catalog: CatalogLocation,
    /// `None` keeps bookmarks in memory for this run only.
    pub storage_path: Option<PathBuf>,
    pub search_debounce: Duration,
}

impl AppConfig {
    pub fn resolve(catalog: Option<String>, data_dir: Option<PathBuf>, no_persist: bool) -> Self {
        let catalog = catalog
            .or_else(|| env_non_empty(CATALOG_ENV))
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_owned());
        // CatalogLocation parsing is infallible.
        let catalog = match catalog.parse::<CatalogLocation>() {
            Ok(location) => location,
            Err(never) => match never {},
        };

        let storage_path = if no_persist {
            None
        } else {
            Some(
                data_dir
                    .or_else(|| env_non_empty(DATA_DIR_ENV).map(PathBuf::from))
                    .unwrap_or_else(default_data_dir)
                    .join(STORAGE_FILE),
            )
        };

        let debounce_ms = env_parse_with_default(DEBOUNCE_MS_ENV, DEFAULT_SEARCH_DEBOUNCE_MS);

        Self { catalog, storage_path, search_debounce: Duration::from_millis(debounce_ms) }
    }

    pub fn key_value_store(&self) -> Arc<dyn KeyValueStore> {
        match &self.storage_path {
            Some(path) => Arc::new(JsonFileStore::new(path)),
            None => Arc::new(MemoryStore::new()),
        }
    }

    pub fn bookmark_store(&self) -> BookmarkStore {
        BookmarkStore::restore(self.key_value_store())
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}
