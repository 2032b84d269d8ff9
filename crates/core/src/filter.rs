//! Filter engine: derives the visible subset of the catalog.
//!
//! Three stages run in a fixed order, each a plain intersection filter:
//! category (exact, case-sensitive), search (case-insensitive substring over
//! name, description or category) and bookmarks-only. No stage can fail; an
//! empty result is the "no results" state.

use crate::bookmarks::BookmarkSet;
use crate::criteria::{CategoryFilter, FilterCriteria};
use crate::entry::Entry;

/// Apply `criteria` to `catalog`, preserving catalog order.
#[must_use]
pub fn apply<'a>(
    catalog: &'a [Entry],
    bookmarks: &BookmarkSet,
    criteria: &FilterCriteria,
) -> Vec<&'a Entry> {
    let needle = normalize_query(&criteria.search_query);

    catalog
        .iter()
        .filter(|entry| matches_category(entry, &criteria.category))
        .filter(|entry| needle.as_deref().is_none_or(|n| matches_query(entry, n)))
        .filter(|entry| !criteria.bookmarks_only || bookmarks.contains(&entry.id))
        .collect()
}

/// Lowercased, trimmed query, or `None` when nothing is left to match.
#[must_use]
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_lowercase()) }
}

#[must_use]
pub fn matches_category(entry: &Entry, category: &CategoryFilter) -> bool {
    match category {
        CategoryFilter::All => true,
        CategoryFilter::Named(name) => entry.category == *name,
    }
}

/// `needle` must already be normalized (see [`normalize_query`]).
#[must_use]
pub fn matches_query(entry: &Entry, needle: &str) -> bool {
    [&entry.name, &entry.description, &entry.category]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}
