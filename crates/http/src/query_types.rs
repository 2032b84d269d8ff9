//! Request body types (Deserialize)

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    /// Skip the debounce and apply right away.
    #[serde(default)]
    pub immediate: bool,
}

#[derive(Debug, Deserialize)]
pub struct BookmarksOnlyRequest {
    pub enabled: bool,
}
