//! Tests for the explorer controller.

use std::sync::Arc;

use api_explorer_core::{BOOKMARKS_STORAGE_KEY, Entry, LoadStatus, RenderState};
use api_explorer_storage::{
    BookmarkStore, FileCatalog, KeyValueStore, LoadError, MemoryStore, PersistenceError,
    StaticCatalog,
};

use crate::{Explorer, ExplorerEvent, ServiceError};

fn sample_catalog() -> Vec<Entry> {
    vec![
        Entry::new("a", "Weather API", "Weather", "Current forecasts", "https://a"),
        Entry::new("b", "Cats", "Fun", "Cat facts", "https://b"),
        Entry::new("c", "Jokes", "Fun", "Dad jokes", "https://c"),
    ]
}

fn memory_bookmarks() -> (Arc<MemoryStore>, BookmarkStore) {
    let kv = Arc::new(MemoryStore::new());
    let store = BookmarkStore::restore(kv.clone());
    (kv, store)
}

fn ready_explorer() -> Explorer {
    let (_, store) = memory_bookmarks();
    Explorer::with_catalog(sample_catalog(), store)
}

fn visible_ids(explorer: &Explorer) -> Vec<String> {
    explorer.visible_entries().into_iter().map(|v| v.entry.id).collect()
}

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(Some("{corrupted".to_owned()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PersistenceError> {
        Err(PersistenceError::Unavailable("disk full".to_owned()))
    }
}

#[test]
fn starts_loading_with_nothing_visible() {
    let (_, store) = memory_bookmarks();
    let explorer = Explorer::new(store);
    assert_eq!(explorer.status(), &LoadStatus::Loading);
    assert_eq!(explorer.render_state(), RenderState::Loading);
    assert!(explorer.visible_entries().is_empty());
    assert!(matches!(explorer.require_ready(), Err(ServiceError::NotReady)));
}

#[test]
fn load_settles_exactly_once() {
    let (_, store) = memory_bookmarks();
    let mut explorer = Explorer::new(store);
    assert!(explorer.finish_load(Ok(sample_catalog())));
    assert_eq!(explorer.status(), &LoadStatus::Ready);

    let late = LoadError::NotAList { found: "object" };
    assert!(!explorer.finish_load(Err(late)));
    assert_eq!(explorer.status(), &LoadStatus::Ready);
    assert_eq!(explorer.catalog().len(), 3);
}

#[test]
fn failed_load_reports_error_state_with_empty_catalog() {
    let (_, store) = memory_bookmarks();
    let mut explorer = Explorer::new(store);
    explorer.finish_load(Err(LoadError::HttpStatus { code: 404 }));

    assert!(matches!(explorer.status(), LoadStatus::Failed { .. }));
    assert!(explorer.catalog().is_empty());
    assert!(matches!(explorer.render_state(), RenderState::Failed { .. }));
    assert!(matches!(explorer.require_ready(), Err(ServiceError::CatalogUnavailable(_))));
    assert_eq!(explorer.category_summary().len(), 1);

    assert!(!explorer.finish_load(Ok(sample_catalog())));
    assert!(explorer.catalog().is_empty());
}

#[test]
fn search_scenario_matches_name_only() {
    let mut explorer = ready_explorer();
    explorer.set_search_query("cat");
    assert_eq!(visible_ids(&explorer), vec!["b"]);
    assert_eq!(explorer.stats().visible, 1);
}

#[test]
fn category_and_query_combine() {
    let mut explorer = ready_explorer();
    explorer.set_category("Fun");
    assert_eq!(visible_ids(&explorer), vec!["b", "c"]);
    explorer.set_search_query("dad");
    assert_eq!(visible_ids(&explorer), vec!["c"]);
    explorer.set_category("All");
    assert_eq!(visible_ids(&explorer), vec!["c"]);
    explorer.clear_search();
    assert_eq!(visible_ids(&explorer), vec!["a", "b", "c"]);
}

#[test]
fn unchanged_criteria_report_no_change() {
    let mut explorer = ready_explorer();
    assert!(!explorer.set_category("All"));
    assert!(!explorer.set_search_query(""));
    assert!(!explorer.set_bookmarks_only(false));
    assert!(explorer.set_bookmarks_only(true));
    assert!(!explorer.set_bookmarks_only(true));
}

#[test]
fn toggling_off_in_bookmarks_view_hides_entry() {
    let mut explorer = ready_explorer();
    explorer.toggle_bookmark("a");
    explorer.toggle_bookmark("c");
    explorer.set_bookmarks_only(true);
    assert_eq!(visible_ids(&explorer), vec!["a", "c"]);

    let outcome = explorer.toggle_bookmark("a");
    assert!(!outcome.is_bookmarked);
    assert_eq!(visible_ids(&explorer), vec!["c"]);
    assert_eq!(explorer.stats().bookmarked, 1);
}

#[test]
fn toggle_twice_is_identity() {
    let mut explorer = ready_explorer();
    let before = explorer.is_bookmarked("b");
    explorer.toggle_bookmark("b");
    explorer.toggle_bookmark("b");
    assert_eq!(explorer.is_bookmarked("b"), before);
}

#[test]
fn toggle_persists_through_store() {
    let (kv, store) = memory_bookmarks();
    let mut explorer = Explorer::with_catalog(sample_catalog(), store);
    explorer.toggle_bookmark("b");
    assert_eq!(kv.get(BOOKMARKS_STORAGE_KEY).unwrap().as_deref(), Some(r#"["b"]"#));

    let restored = Explorer::with_catalog(sample_catalog(), BookmarkStore::restore(kv));
    assert!(restored.is_bookmarked("b"));
}

#[test]
fn broken_storage_degrades_to_memory_only() {
    let store = BookmarkStore::restore(Arc::new(BrokenStore));
    let mut explorer = Explorer::with_catalog(sample_catalog(), store);
    assert!(explorer.bookmarks().is_empty());

    let outcome = explorer.toggle_bookmark("a");
    assert!(outcome.is_bookmarked);
    assert!(!outcome.persisted);
    assert!(explorer.is_bookmarked("a"));
    let views = explorer.visible_entries();
    assert!(views[0].bookmarked);
}

#[test]
fn empty_catalog_scenario() {
    let (_, store) = memory_bookmarks();
    let explorer = Explorer::with_catalog(Vec::new(), store);
    let summary = explorer.category_summary();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].name, "All");
    assert_eq!(summary[0].count, 0);
    assert!(explorer.visible_entries().is_empty());
    let stats = explorer.stats();
    assert_eq!((stats.total, stats.bookmarked, stats.visible), (0, 0, 0));
    assert!(matches!(explorer.render_state(), RenderState::Empty { .. }));
}

#[test]
fn independent_instances_do_not_share_state() {
    let mut first = ready_explorer();
    let second = ready_explorer();
    first.set_category("Fun");
    first.toggle_bookmark("a");
    assert!(second.criteria().category.is_all());
    assert!(!second.is_bookmarked("a"));
}

#[test]
fn snapshot_is_consistent_with_getters() {
    let mut explorer = ready_explorer();
    explorer.set_category("Fun");
    explorer.toggle_bookmark("b");
    let snapshot = explorer.snapshot();
    assert_eq!(snapshot.stats, explorer.stats());
    assert_eq!(snapshot.categories, explorer.category_summary());
    assert_eq!(snapshot.view, explorer.render_state());

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["criteria"]["category"], "Fun");
    assert_eq!(json["view"]["state"], "results");
}

#[test]
fn mutations_broadcast_events() {
    let (_, store) = memory_bookmarks();
    let mut explorer = Explorer::new(store);
    let mut rx = explorer.subscribe();

    explorer.finish_load(Ok(sample_catalog()));
    explorer.set_search_query("cat");
    explorer.set_search_query("cat");
    explorer.toggle_bookmark("b");

    assert_eq!(rx.try_recv().unwrap(), ExplorerEvent::CatalogLoaded { count: 3 });
    assert!(matches!(rx.try_recv().unwrap(), ExplorerEvent::CriteriaChanged { .. }));
    assert_eq!(
        rx.try_recv().unwrap(),
        ExplorerEvent::BookmarkToggled { id: "b".to_owned(), bookmarked: true, persisted: true }
    );
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn load_from_static_source() {
    let (_, store) = memory_bookmarks();
    let mut explorer = Explorer::new(store);
    explorer.load_from(&StaticCatalog::new(sample_catalog())).await.unwrap();
    assert_eq!(explorer.stats().total, 3);
}

#[tokio::test]
async fn load_from_missing_file_settles_failed() {
    let (_, store) = memory_bookmarks();
    let mut explorer = Explorer::new(store);
    let err = explorer
        .load_from(&FileCatalog::new("/nonexistent/api-explorer/apis.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Load(LoadError::Io { .. })));
    assert!(matches!(explorer.status(), LoadStatus::Failed { .. }));
    assert!(matches!(explorer.require_ready(), Err(ServiceError::CatalogUnavailable(_))));
}

#[test]
fn explicit_save_surfaces_storage_failure() {
    let store = BookmarkStore::restore(Arc::new(BrokenStore));
    let explorer = Explorer::with_catalog(sample_catalog(), store);
    assert!(matches!(
        explorer.save_bookmarks(),
        Err(ServiceError::Persistence(PersistenceError::Unavailable(_)))
    ));

    let (kv, store) = memory_bookmarks();
    let explorer = Explorer::with_catalog(sample_catalog(), store);
    explorer.save_bookmarks().unwrap();
    assert_eq!(kv.get(BOOKMARKS_STORAGE_KEY).unwrap().as_deref(), Some("[]"));
}

#[tokio::test]
async fn late_failed_load_keeps_ready_catalog() {
    let mut explorer = ready_explorer();
    explorer.load_from(&FileCatalog::new("/nonexistent/api-explorer/apis.json")).await.unwrap();
    assert_eq!(explorer.status(), &LoadStatus::Ready);
    assert_eq!(explorer.stats().total, 3);
}

#[test]
fn deferred_toggle_is_visible_before_write() {
    let (kv, store) = memory_bookmarks();
    let mut explorer = Explorer::with_catalog(sample_catalog(), store);
    let mut rx = explorer.subscribe();

    let pending = explorer.begin_toggle("b");
    assert_eq!(pending.id(), "b");
    assert!(pending.is_bookmarked());
    assert!(explorer.is_bookmarked("b"));
    assert_eq!(explorer.stats().bookmarked, 1);
    assert_eq!(kv.get(BOOKMARKS_STORAGE_KEY).unwrap(), None);
    assert!(rx.try_recv().is_err());

    let persisted = pending.commit();
    let outcome = explorer.finish_toggle(pending, persisted);
    assert!(outcome.persisted);
    assert_eq!(kv.get(BOOKMARKS_STORAGE_KEY).unwrap().as_deref(), Some(r#"["b"]"#));
    assert_eq!(
        rx.try_recv().unwrap(),
        ExplorerEvent::BookmarkToggled { id: "b".to_owned(), bookmarked: true, persisted: true }
    );
}
