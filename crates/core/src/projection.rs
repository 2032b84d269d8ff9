//! View projection: display-ready aggregates recomputed on every state change.
//!
//! Nothing here is cached. Callers pass the current catalog, bookmarks and
//! visible set and get plain serializable values back.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bookmarks::BookmarkSet;
use crate::constants::{
    ALL_CATEGORY, LOAD_ERROR_TEXT, LOAD_ERROR_TITLE, NO_RESULTS_TEXT, NO_RESULTS_TITLE,
};
use crate::criteria::CategoryFilter;
use crate::entry::Entry;

/// One category pill: name, entry count and whether it is the active filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Catalog size.
    pub total: usize,
    /// Bookmark set size, stale ids included.
    pub bookmarked: usize,
    /// Current visible-result count.
    pub visible: usize,
}

/// Visual state of an entry's bookmark toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkMarker {
    Marked,
    Unmarked,
}

impl BookmarkMarker {
    #[must_use]
    pub const fn from_flag(bookmarked: bool) -> Self {
        if bookmarked { Self::Marked } else { Self::Unmarked }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Marked => "★",
            Self::Unmarked => "☆",
        }
    }

    /// Accessible label describing what activating the toggle will do.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Marked => "Remove from bookmarks",
            Self::Unmarked => "Add to bookmarks",
        }
    }
}

/// Entry plus its per-render bookmark state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryView {
    #[serde(flatten)]
    pub entry: Entry,
    pub bookmarked: bool,
    pub marker: BookmarkMarker,
    pub symbol: String,
    pub label: String,
}

/// Catalog load lifecycle. Leaves `Loading` exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed {
        reason: String,
    },
}

impl LoadStatus {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

/// What the results area should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum RenderState {
    Loading,
    Failed { title: String, text: String },
    Empty { title: String, text: String },
    Results { entries: Vec<EntryView> },
}

/// Category counts with `All` first, then categories in lexicographic order.
#[must_use]
pub fn category_summary(catalog: &[Entry], active: &CategoryFilter) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for entry in catalog {
        *counts.entry(entry.category.as_str()).or_default() += 1;
    }

    let mut summary = Vec::with_capacity(counts.len() + 1);
    summary.push(CategoryCount {
        name: ALL_CATEGORY.to_owned(),
        count: catalog.len(),
        active: active.is_all(),
    });
    // A real category literally named "All" is shadowed by the sentinel.
    summary.extend(counts.into_iter().filter(|(name, _)| *name != ALL_CATEGORY).map(
        |(name, count)| CategoryCount {
            name: name.to_owned(),
            count,
            active: active.as_str() == name && !active.is_all(),
        },
    ));
    summary
}

#[must_use]
pub fn stats(catalog: &[Entry], bookmarks: &BookmarkSet, visible: &[&Entry]) -> Stats {
    Stats { total: catalog.len(), bookmarked: bookmarks.len(), visible: visible.len() }
}

#[must_use]
pub fn entry_view(entry: &Entry, bookmarks: &BookmarkSet) -> EntryView {
    let bookmarked = bookmarks.contains(&entry.id);
    let marker = BookmarkMarker::from_flag(bookmarked);
    EntryView {
        entry: entry.clone(),
        bookmarked,
        marker,
        symbol: marker.symbol().to_owned(),
        label: marker.label().to_owned(),
    }
}

#[must_use]
pub fn render_state(status: &LoadStatus, bookmarks: &BookmarkSet, visible: &[&Entry]) -> RenderState {
    match status {
        LoadStatus::Loading => RenderState::Loading,
        LoadStatus::Failed { .. } => RenderState::Failed {
            title: LOAD_ERROR_TITLE.to_owned(),
            text: LOAD_ERROR_TEXT.to_owned(),
        },
        LoadStatus::Ready if visible.is_empty() => RenderState::Empty {
            title: NO_RESULTS_TITLE.to_owned(),
            text: NO_RESULTS_TEXT.to_owned(),
        },
        LoadStatus::Ready => RenderState::Results {
            entries: visible.iter().map(|entry| entry_view(entry, bookmarks)).collect(),
        },
    }
}
