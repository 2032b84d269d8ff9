//! Storage layer for api-explorer
//!
//! Catalog sources (file, HTTP, in-memory) and the key-value backed bookmark
//! store.

mod bookmark_store;
mod catalog;
pub mod error;
mod kv;

pub use bookmark_store::{
    BookmarkStore, PendingWrite, ToggleOutcome, persist_bookmarks, restore_bookmarks,
};
pub use catalog::{
    CatalogLocation, CatalogSource, FileCatalog, HttpCatalog, StaticCatalog, parse_catalog,
};
pub use error::{LoadError, PersistenceError};
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
