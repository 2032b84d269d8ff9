//! Shared constants for api-explorer.

/// Sentinel category that disables the category stage.
pub const ALL_CATEGORY: &str = "All";

/// Storage key holding the serialized bookmark list.
pub const BOOKMARKS_STORAGE_KEY: &str = "bookmarkedAPIs";

/// Default search-input debounce delay in milliseconds.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Default catalog location, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "./data/apis.json";

/// Title shown in place of the catalog when loading failed.
pub const LOAD_ERROR_TITLE: &str = "Error Loading APIs";

/// Body text shown in place of the catalog when loading failed.
pub const LOAD_ERROR_TEXT: &str = "Please check your connection and try again";

/// Title shown when the current criteria match nothing.
pub const NO_RESULTS_TITLE: &str = "No APIs found";

/// Body text shown when the current criteria match nothing.
pub const NO_RESULTS_TEXT: &str = "Try adjusting your search or filters";
