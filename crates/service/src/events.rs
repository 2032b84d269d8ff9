//! State-change notifications broadcast to presentation adapters.

use api_explorer_core::FilterCriteria;
use serde::Serialize;

/// Something changed; subscribers re-derive whatever they render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExplorerEvent {
    CatalogLoaded { count: usize },
    CatalogFailed { reason: String },
    CriteriaChanged { criteria: FilterCriteria },
    BookmarkToggled { id: String, bookmarked: bool, persisted: bool },
}

impl ExplorerEvent {
    /// SSE event name for this notification.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CatalogLoaded { .. } => "catalog_loaded",
            Self::CatalogFailed { .. } => "catalog_failed",
            Self::CriteriaChanged { .. } => "criteria_changed",
            Self::BookmarkToggled { .. } => "bookmark_toggled",
        }
    }
}
