//! List view-model
//!
//! The recurring presentation pattern of every dashboard view: fetch
//! the full collection, keep a filtered view of it, slice the visible
//! page locally, and replace everything wholesale on each reload.

use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use shared::dto::{InvoiceFilter, RequestFilter};
use tokio_util::sync::CancellationToken;

/// Filter criteria usable by a list view
pub trait Criteria: Send + Sync {
    /// True when at least one field is set; empty criteria behave like
    /// clearing the filter.
    fn is_active(&self) -> bool;
}

impl Criteria for InvoiceFilter {
    fn is_active(&self) -> bool {
        !self.is_empty()
    }
}

impl Criteria for RequestFilter {
    fn is_active(&self) -> bool {
        !self.is_empty()
    }
}

/// Criteria for collections without a server-side filter endpoint
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl Criteria for NoFilter {
    fn is_active(&self) -> bool {
        false
    }
}

/// Server-backed source of one entity collection
#[async_trait]
pub trait CollectionSource: Send + Sync {
    type Item: Clone + Send + Sync;
    type Filter: Criteria;

    /// Fetch the full collection
    async fn fetch_all(&self) -> ClientResult<Vec<Self::Item>>;

    /// Fetch a server-side filtered collection
    async fn fetch_filtered(&self, filter: &Self::Filter) -> ClientResult<Vec<Self::Item>>;
}

/// View-model lifecycle states
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    Empty,
    Loading,
    Loaded,
    Filtering,
    Error(String),
}

/// Pagination window over the filtered view
///
/// Invariant: `1 <= current_page <= max(total_pages, 1)`. The source
/// dashboard left the index stale when the set shrank; here it clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page_size: usize,
    current_page: usize,
}

impl PageWindow {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size)
    }

    /// Move to page `i`, clamped into `[1, max(total_pages, 1)]`
    pub fn set_page(&mut self, i: usize, count: usize) {
        self.current_page = i.clamp(1, self.total_pages(count).max(1));
    }

    /// Change the page size and reset to the first page
    pub fn set_page_size(&mut self, n: usize) {
        self.page_size = n.max(1);
        self.current_page = 1;
    }

    fn reset(&mut self) {
        self.current_page = 1;
    }

    fn clamp(&mut self, count: usize) {
        self.current_page = self.current_page.clamp(1, self.total_pages(count).max(1));
    }

    /// Half-open index range of the visible slice
    pub fn bounds(&self, count: usize) -> (usize, usize) {
        let start = (self.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(count);
        (start.min(count), end)
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(10)
    }
}

/// Per-entity list view-model
///
/// Holds the last fully fetched collection and a filtered view of it;
/// the visible page is a pure slice of the filtered view. All copies
/// are transient: every reload replaces them wholesale.
pub struct ListViewModel<S: CollectionSource> {
    source: S,
    state: ListState,
    collection: Vec<S::Item>,
    filtered: Vec<S::Item>,
    page: PageWindow,
    cancel: CancellationToken,
    load_fallback: String,
}

impl<S: CollectionSource> ListViewModel<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: ListState::Empty,
            collection: Vec::new(),
            filtered: Vec::new(),
            page: PageWindow::default(),
            cancel: CancellationToken::new(),
            load_fallback: "No se pudieron cargar los datos.".to_string(),
        }
    }

    /// Localized fallback shown when a load fails without a server message
    pub fn with_load_fallback(mut self, message: impl Into<String>) -> Self {
        self.load_fallback = message.into();
        self
    }

    /// Initial page size (the views used 5, 10 or 15)
    pub fn with_page_size(mut self, n: usize) -> Self {
        self.page.set_page_size(n);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn filtered(&self) -> &[S::Item] {
        &self.filtered
    }

    pub fn collection_len(&self) -> usize {
        self.collection.len()
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page()
    }

    pub fn page_size(&self) -> usize {
        self.page.page_size()
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages(self.filtered.len())
    }

    /// The visible slice: `filtered[(page-1)*size .. page*size]`
    pub fn visible(&self) -> &[S::Item] {
        let (start, end) = self.page.bounds(self.filtered.len());
        &self.filtered[start..end]
    }

    /// Stop applying results; fetches resolving after this are discarded
    pub fn abort(&self) {
        self.cancel.cancel();
    }

    /// Fetch the full collection and replace both the stored collection
    /// and the filtered view. On failure the previous data stays
    /// visible behind the error state.
    pub async fn load(&mut self) -> ClientResult<()> {
        self.state = ListState::Loading;
        let result = self.source.fetch_all().await;
        if self.cancel.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        match result {
            Ok(items) => {
                self.collection = items;
                self.filtered = self.collection.clone();
                self.page.clamp(self.filtered.len());
                self.state = ListState::Loaded;
                tracing::debug!(count = self.collection.len(), "Collection loaded");
                Ok(())
            }
            Err(err) => {
                self.state = ListState::Error(err.user_message(&self.load_fallback));
                Err(err)
            }
        }
    }

    /// Apply filter criteria via the server-side filtered fetch. Empty
    /// criteria reduce to [`clear_filter`](Self::clear_filter). The
    /// unfiltered collection is never touched.
    pub async fn apply_filter(&mut self, filter: &S::Filter) -> ClientResult<()> {
        if !filter.is_active() {
            self.clear_filter();
            return Ok(());
        }

        self.state = ListState::Filtering;
        let result = self.source.fetch_filtered(filter).await;
        if self.cancel.is_cancelled() {
            return Err(ClientError::Cancelled);
        }
        match result {
            Ok(items) => {
                self.filtered = items;
                self.page.reset();
                self.state = ListState::Loaded;
                tracing::debug!(count = self.filtered.len(), "Filter applied");
                Ok(())
            }
            Err(err) => {
                self.state = ListState::Error(err.user_message(&self.load_fallback));
                Err(err)
            }
        }
    }

    /// Reset the filtered view to the last loaded full collection
    pub fn clear_filter(&mut self) {
        self.filtered = self.collection.clone();
        self.page.reset();
        if self.state != ListState::Empty {
            self.state = ListState::Loaded;
        }
    }

    pub fn set_page(&mut self, i: usize) {
        self.page.set_page(i, self.filtered.len());
    }

    pub fn set_page_size(&mut self, n: usize) {
        self.page.set_page_size(n);
    }
}
