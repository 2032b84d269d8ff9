use anyhow::Result;
use serde::Serialize;

use crate::config::AppConfig;

#[derive(Serialize)]
struct ToggleReport<'a> {
    id: &'a str,
    bookmarked: bool,
    persisted: bool,
}

pub(crate) fn run_toggle(config: &AppConfig, id: &str) -> Result<()> {
    let mut store = config.bookmark_store();
    let outcome = store.toggle(id);
    // A memory-only store accepts the write but nothing outlives this run.
    let persisted = outcome.persisted && config.storage_path.is_some();
    if config.storage_path.is_none() {
        eprintln!("Note: --no-persist is set, bookmark change only applies to this run");
    } else if !persisted {
        eprintln!("Warning: bookmark change could not be saved and only applies to this run");
    }
    let report = ToggleReport { id, bookmarked: outcome.is_bookmarked, persisted };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub(crate) fn run_bookmarks(config: &AppConfig) -> Result<()> {
    let store = config.bookmark_store();
    println!("{}", serde_json::to_string_pretty(store.bookmarks())?);
    Ok(())
}
