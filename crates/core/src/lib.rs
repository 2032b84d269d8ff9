//! Core types for api-explorer
//!
//! Catalog entries, the bookmark set, filter criteria and the pure derivations
//! (filter engine and view projection) shared by every other crate.

mod bookmarks;
pub mod constants;
mod criteria;
pub mod env_config;
mod entry;
mod filter;
mod projection;

pub use bookmarks::BookmarkSet;
pub use constants::*;
pub use criteria::{CategoryFilter, FilterCriteria};
pub use entry::Entry;
pub use filter::{apply, matches_category, matches_query, normalize_query};
pub use projection::{
    BookmarkMarker, CategoryCount, EntryView, LoadStatus, RenderState, Stats, category_summary,
    entry_view, render_state, stats,
};
