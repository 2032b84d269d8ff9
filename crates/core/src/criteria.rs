use serde::{Deserialize, Serialize};

use crate::constants::ALL_CATEGORY;

/// Category stage selector: the `All` sentinel or one exact category name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Interpret a category name as sent by the presentation layer.
    ///
    /// The literal `"All"` always selects the sentinel.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        if name == ALL_CATEGORY { Self::All } else { Self::Named(name.to_owned()) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORY,
            Self::Named(name) => name,
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<String> for CategoryFilter {
    fn from(name: String) -> Self {
        if name == ALL_CATEGORY { Self::All } else { Self::Named(name) }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL_CATEGORY.to_owned(),
            CategoryFilter::Named(name) => name,
        }
    }
}

/// Current combination of category filter, search text and bookmarks-only toggle.
///
/// Held in memory only. `search_query` keeps the raw text as typed; the filter
/// engine normalizes it on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub search_query: String,
    pub bookmarks_only: bool,
}

impl FilterCriteria {
    #[must_use]
    pub fn new(category: CategoryFilter, search_query: impl Into<String>, bookmarks_only: bool) -> Self {
        Self { category, search_query: search_query.into(), bookmarks_only }
    }

    #[must_use]
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    #[must_use]
    pub fn with_bookmarks_only(mut self, bookmarks_only: bool) -> Self {
        self.bookmarks_only = bookmarks_only;
        self
    }
}
