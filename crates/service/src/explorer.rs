use api_explorer_core::{
    BookmarkSet, CategoryCount, CategoryFilter, Entry, EntryView, FilterCriteria, LoadStatus,
    RenderState, Stats, apply, category_summary, entry_view, render_state, stats,
};
use api_explorer_storage::{BookmarkStore, CatalogSource, LoadError, PendingWrite, ToggleOutcome};
use serde::Serialize;
use tokio::sync::broadcast;

use crate::ServiceError;
use crate::events::ExplorerEvent;

const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Everything a view needs for one render, derived in a single pass.
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub status: LoadStatus,
    pub criteria: FilterCriteria,
    pub categories: Vec<CategoryCount>,
    pub stats: Stats,
    pub view: RenderState,
}

/// Bookmark flipped in memory whose storage write has not run yet.
///
/// Produced by [`Explorer::begin_toggle`]; commit it outside any lock around
/// the explorer, then hand it to [`Explorer::finish_toggle`].
pub struct PendingToggle {
    id: String,
    is_bookmarked: bool,
    write: PendingWrite,
}

impl PendingToggle {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn is_bookmarked(&self) -> bool {
        self.is_bookmarked
    }

    /// Write the snapshot to storage. `false` when the write failed.
    #[must_use]
    pub fn commit(&self) -> bool {
        self.write.commit_best_effort()
    }
}

/// Explorer state: catalog, bookmark store, filter criteria and load status.
///
/// Each instance is independent. Mutators run to completion synchronously and
/// broadcast an [`ExplorerEvent`]; getters re-derive from scratch every call.
pub struct Explorer {
    catalog: Vec<Entry>,
    bookmarks: BookmarkStore,
    criteria: FilterCriteria,
    status: LoadStatus,
    events: broadcast::Sender<ExplorerEvent>,
}

impl Explorer {
    /// New explorer waiting for its catalog.
    #[must_use]
    pub fn new(bookmarks: BookmarkStore) -> Self {
        // Initial receiver dropped - subscribers use subscribe()
        let (events, _initial_rx) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            catalog: Vec::new(),
            bookmarks,
            criteria: FilterCriteria::default(),
            status: LoadStatus::Loading,
            events,
        }
    }

    /// Explorer with an already available catalog.
    #[must_use]
    pub fn with_catalog(catalog: Vec<Entry>, bookmarks: BookmarkStore) -> Self {
        let mut explorer = Self::new(bookmarks);
        explorer.finish_load(Ok(catalog));
        explorer
    }

    /// Load from `source` and settle the load status.
    ///
    /// The failed state is recorded before the error is returned. Once the
    /// status has settled, later results are ignored and this returns `Ok`.
    pub async fn load_from(&mut self, source: &dyn CatalogSource) -> Result<(), ServiceError> {
        tracing::info!(source = %source.describe(), "loading catalog");
        match source.load().await {
            Ok(catalog) => {
                self.finish_load(Ok(catalog));
                Ok(())
            },
            // A failure that arrives after the load settled changes nothing.
            Err(e) if self.settle_failed(&e) => Err(e.into()),
            Err(_) => Ok(()),
        }
    }

    /// Settle the load status with the fetch result.
    ///
    /// Only the first call takes effect; returns `false` for later ones.
    pub fn finish_load(&mut self, result: Result<Vec<Entry>, LoadError>) -> bool {
        match result {
            Ok(catalog) => self.settle_ready(catalog),
            Err(e) => self.settle_failed(&e),
        }
    }

    fn settle_ready(&mut self, catalog: Vec<Entry>) -> bool {
        if !self.can_settle() {
            return false;
        }
        let count = catalog.len();
        tracing::info!(count, "catalog loaded");
        self.catalog = catalog;
        self.status = LoadStatus::Ready;
        self.notify(ExplorerEvent::CatalogLoaded { count });
        true
    }

    fn settle_failed(&mut self, error: &LoadError) -> bool {
        if !self.can_settle() {
            return false;
        }
        tracing::error!(error = %error, "error loading catalog");
        let reason = error.to_string();
        self.catalog.clear();
        self.status = LoadStatus::Failed { reason: reason.clone() };
        self.notify(ExplorerEvent::CatalogFailed { reason });
        true
    }

    fn can_settle(&self) -> bool {
        if self.status.is_terminal() {
            tracing::warn!(status = ?self.status, "catalog load already settled, ignoring result");
            return false;
        }
        true
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ExplorerEvent> {
        self.events.subscribe()
    }

    // ── Accessors ──────────────────────────────────────────────────────

    #[must_use]
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// `Ok` once the catalog is loaded, otherwise why it is not.
    pub fn require_ready(&self) -> Result<(), ServiceError> {
        match &self.status {
            LoadStatus::Ready => Ok(()),
            LoadStatus::Loading => Err(ServiceError::NotReady),
            LoadStatus::Failed { reason } => Err(ServiceError::CatalogUnavailable(reason.clone())),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &[Entry] {
        &self.catalog
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn bookmarks(&self) -> &BookmarkSet {
        self.bookmarks.bookmarks()
    }

    #[must_use]
    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.contains(id)
    }

    // ── Derivations ────────────────────────────────────────────────────

    /// Current visible set, in catalog order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Entry> {
        apply(&self.catalog, self.bookmarks.bookmarks(), &self.criteria)
    }

    /// Visible entries with their bookmark render state.
    #[must_use]
    pub fn visible_entries(&self) -> Vec<EntryView> {
        let bookmarks = self.bookmarks.bookmarks();
        self.visible().into_iter().map(|entry| entry_view(entry, bookmarks)).collect()
    }

    #[must_use]
    pub fn category_summary(&self) -> Vec<CategoryCount> {
        category_summary(&self.catalog, &self.criteria.category)
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        stats(&self.catalog, self.bookmarks.bookmarks(), &self.visible())
    }

    #[must_use]
    pub fn render_state(&self) -> RenderState {
        render_state(&self.status, self.bookmarks.bookmarks(), &self.visible())
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        let visible = self.visible();
        let bookmarks = self.bookmarks.bookmarks();
        ViewSnapshot {
            status: self.status.clone(),
            criteria: self.criteria.clone(),
            categories: self.category_summary(),
            stats: stats(&self.catalog, bookmarks, &visible),
            view: render_state(&self.status, bookmarks, &visible),
        }
    }

    // ── Mutators ───────────────────────────────────────────────────────

    /// Select a category (`"All"` clears the category stage).
    ///
    /// Returns `false` when the criteria did not change.
    pub fn set_category(&mut self, name: &str) -> bool {
        let category = CategoryFilter::parse(name);
        if self.criteria.category == category {
            return false;
        }
        self.criteria.category = category;
        self.criteria_changed()
    }

    /// Store the raw search text; normalization happens at filter time.
    pub fn set_search_query(&mut self, text: &str) -> bool {
        if self.criteria.search_query == text {
            return false;
        }
        text.clone_into(&mut self.criteria.search_query);
        self.criteria_changed()
    }

    pub fn clear_search(&mut self) -> bool {
        self.set_search_query("")
    }

    pub fn set_bookmarks_only(&mut self, enabled: bool) -> bool {
        if self.criteria.bookmarks_only == enabled {
            return false;
        }
        self.criteria.bookmarks_only = enabled;
        self.criteria_changed()
    }

    /// Flip the bookmark on `id`. Never fails; persistence problems are
    /// reported through [`ToggleOutcome::persisted`].
    pub fn toggle_bookmark(&mut self, id: &str) -> ToggleOutcome {
        let pending = self.begin_toggle(id);
        let persisted = pending.commit();
        self.finish_toggle(pending, persisted)
    }

    /// Flip the bookmark on `id` in memory. Derivations see the change
    /// immediately; the storage write is left to the caller.
    pub fn begin_toggle(&mut self, id: &str) -> PendingToggle {
        let (is_bookmarked, write) = self.bookmarks.toggle_deferred(id);
        tracing::debug!(id, bookmarked = is_bookmarked, "bookmark toggled");
        PendingToggle { id: id.to_owned(), is_bookmarked, write }
    }

    /// Report a toggle whose write has been attempted.
    pub fn finish_toggle(&self, pending: PendingToggle, persisted: bool) -> ToggleOutcome {
        let PendingToggle { id, is_bookmarked, write } = pending;
        self.notify(ExplorerEvent::BookmarkToggled { id, bookmarked: is_bookmarked, persisted });
        ToggleOutcome { bookmarks: write.bookmarks().clone(), is_bookmarked, persisted }
    }

    /// Write the current bookmark set to storage now.
    pub fn save_bookmarks(&self) -> Result<(), ServiceError> {
        Ok(self.bookmarks.persist()?)
    }

    fn criteria_changed(&self) -> bool {
        tracing::debug!(criteria = ?self.criteria, "criteria changed");
        self.notify(ExplorerEvent::CriteriaChanged { criteria: self.criteria.clone() });
        true
    }

    fn notify(&self, event: ExplorerEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}
