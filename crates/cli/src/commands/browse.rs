use anyhow::{Result, bail};
use api_explorer_core::{LOAD_ERROR_TEXT, LOAD_ERROR_TITLE};
use api_explorer_service::Explorer;

use crate::FilterArgs;
use crate::config::AppConfig;

/// Load the catalog, or print the degraded-state message and fail.
async fn load_explorer(config: &AppConfig) -> Result<Explorer> {
    let mut explorer = Explorer::new(config.bookmark_store());
    let source = config.catalog.clone().into_source();
    if let Err(e) = explorer.load_from(source.as_ref()).await {
        eprintln!("{LOAD_ERROR_TITLE}: {LOAD_ERROR_TEXT}");
        bail!("{e}");
    }
    Ok(explorer)
}

fn apply_filters(explorer: &mut Explorer, filter: &FilterArgs) {
    explorer.set_category(&filter.category);
    explorer.set_search_query(&filter.query);
    explorer.set_bookmarks_only(filter.bookmarks_only);
}

pub(crate) async fn run_list(config: &AppConfig, filter: &FilterArgs) -> Result<()> {
    let mut explorer = load_explorer(config).await?;
    apply_filters(&mut explorer, filter);
    println!("{}", serde_json::to_string_pretty(&explorer.visible_entries())?);
    Ok(())
}

pub(crate) async fn run_categories(config: &AppConfig) -> Result<()> {
    let explorer = load_explorer(config).await?;
    println!("{}", serde_json::to_string_pretty(&explorer.category_summary())?);
    Ok(())
}

pub(crate) async fn run_stats(config: &AppConfig, filter: &FilterArgs) -> Result<()> {
    let mut explorer = load_explorer(config).await?;
    apply_filters(&mut explorer, filter);
    println!("{}", serde_json::to_string_pretty(&explorer.stats())?);
    Ok(())
}
