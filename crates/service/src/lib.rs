//! Service layer for api-explorer
//!
//! Owns the explorer state (catalog, bookmarks, criteria, load status) and
//! exposes the entrypoints a presentation layer drives.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(let_underscore_drop, reason = "Intentionally dropping values")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod events;
mod explorer;
#[cfg(test)]
mod explorer_tests;

pub use error::ServiceError;
pub use events::ExplorerEvent;
pub use explorer::{Explorer, PendingToggle, ViewSnapshot};
