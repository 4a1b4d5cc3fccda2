//! Catalog state, pagination and genre filtering
//!
//! The catalog tracks two cursors: the *committed* one (what is on screen)
//! and an optional *pending* one (the latest request in flight). Controls
//! always act on the target cursor (pending if any, else committed), and the
//! committed cursor only moves when a response for the latest request lands.
//! A failed request drops the pending cursor and leaves everything on screen
//! untouched.

use crate::models::{CatalogCursor, CatalogFilter, CatalogPage, GenreId, Movie};
use crate::state::sequence::{Delivery, RequestSeq};

/// Highest page the provider will serve
pub const MAX_PAGES: u32 = 500;

/// Highest addressable page for a raw provider page count
pub fn displayed_max(total_pages: u32) -> u32 {
    total_pages.clamp(1, MAX_PAGES)
}

/// A catalog request tagged with its sequence number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    pub seq: u64,
    pub cursor: CatalogCursor,
}

/// Genre selection before and after a filter change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub previous: Option<GenreId>,
    pub current: Option<GenreId>,
}

/// What a catalog control did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogChange {
    /// Nothing to fetch (at a page bound, or filter already in place)
    Unchanged,
    /// A new page must be fetched
    Refetch {
        request: CatalogRequest,
        /// Present when the active genre changed
        selection: Option<SelectionChange>,
    },
}

impl CatalogChange {
    pub fn request(&self) -> Option<&CatalogRequest> {
        match self {
            CatalogChange::Refetch { request, .. } => Some(request),
            CatalogChange::Unchanged => None,
        }
    }

    pub fn into_request(self) -> Option<CatalogRequest> {
        match self {
            CatalogChange::Refetch { request, .. } => Some(request),
            CatalogChange::Unchanged => None,
        }
    }
}

/// Current query/genre/page plus the movies on screen
#[derive(Debug, Clone)]
pub struct CatalogState {
    committed: CatalogCursor,
    total_pages: u32,
    movies: Vec<Movie>,
    pending: Option<CatalogRequest>,
    seq: RequestSeq,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            committed: CatalogCursor::default(),
            total_pages: 1,
            movies: Vec::new(),
            pending: None,
            seq: RequestSeq::new(),
        }
    }
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Cursor of the catalog on screen
    pub fn committed(&self) -> &CatalogCursor {
        &self.committed
    }

    /// Cursor controls act on: the pending request if any, else the committed one
    pub fn target(&self) -> &CatalogCursor {
        self.pending
            .as_ref()
            .map(|r| &r.cursor)
            .unwrap_or(&self.committed)
    }

    pub fn pending(&self) -> Option<&CatalogRequest> {
        self.pending.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Target query ("popular" unless searching)
    pub fn query(&self) -> &str {
        self.target().filter.query()
    }

    /// Target genre (never set while searching)
    pub fn genre(&self) -> Option<&GenreId> {
        self.target().filter.genre()
    }

    /// Page on screen
    pub fn page(&self) -> u32 {
        self.committed.page
    }

    /// Raw provider page count of the catalog on screen
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Highest page reachable from the catalog on screen
    pub fn max_page(&self) -> u32 {
        displayed_max(self.total_pages)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Page bound for the target cursor. A pending filter switch has only page 1
    /// until its own page count is known.
    fn target_max(&self) -> u32 {
        if self.target().filter == self.committed.filter {
            self.max_page()
        } else {
            1
        }
    }

    // -------------------------------------------------------------------------
    // Controls
    // -------------------------------------------------------------------------

    fn issue(&mut self, cursor: CatalogCursor, selection: Option<SelectionChange>) -> CatalogChange {
        let request = CatalogRequest {
            seq: self.seq.issue(),
            cursor,
        };
        self.pending = Some(request.clone());
        CatalogChange::Refetch { request, selection }
    }

    fn switch_filter(&mut self, filter: CatalogFilter) -> CatalogChange {
        let target = self.target();
        if target.filter == filter && target.page == 1 {
            return CatalogChange::Unchanged;
        }

        let previous = target.filter.genre().cloned();
        let current = filter.genre().cloned();
        let selection = (previous != current).then_some(SelectionChange { previous, current });
        self.issue(CatalogCursor::new(filter, 1), selection)
    }

    /// Apply search box text. Clears any genre; blank text returns to popular.
    pub fn set_query(&mut self, text: &str) -> CatalogChange {
        self.switch_filter(CatalogFilter::from_query(text))
    }

    /// Toggle a genre: the active genre turns the filter off, any other replaces it.
    /// Clears any search text.
    pub fn toggle_genre(&mut self, id: GenreId) -> CatalogChange {
        let filter = if self.genre() == Some(&id) {
            CatalogFilter::Popular
        } else {
            CatalogFilter::Genre(id)
        };
        self.switch_filter(filter)
    }

    /// Select a genre without toggling (category row "see all")
    pub fn show_genre(&mut self, id: GenreId) -> CatalogChange {
        self.switch_filter(CatalogFilter::Genre(id))
    }

    /// Advance one page if not at the last reachable page
    pub fn next_page(&mut self) -> CatalogChange {
        let target = self.target().clone();
        if target.page >= self.target_max() {
            return CatalogChange::Unchanged;
        }
        self.issue(CatalogCursor::new(target.filter, target.page + 1), None)
    }

    /// Go back one page if not on the first
    pub fn prev_page(&mut self) -> CatalogChange {
        let target = self.target().clone();
        if target.page <= 1 {
            return CatalogChange::Unchanged;
        }
        self.issue(CatalogCursor::new(target.filter, target.page - 1), None)
    }

    /// Jump to a page, silently clamped into range
    pub fn go_to_page(&mut self, page: u32) -> CatalogChange {
        let target = self.target().clone();
        let page = page.clamp(1, self.target_max());
        if page == target.page {
            return CatalogChange::Unchanged;
        }
        self.issue(CatalogCursor::new(target.filter, page), None)
    }

    /// Re-issue the target request (initial load, manual retry)
    pub fn reload(&mut self) -> CatalogChange {
        let target = self.target().clone();
        self.issue(target, None)
    }

    // -------------------------------------------------------------------------
    // Responses
    // -------------------------------------------------------------------------

    /// Commit a fetched page if it answers the latest request.
    ///
    /// A response reporting fewer pages than the requested page number pulls
    /// the committed page back to the last reachable one.
    pub fn apply(&mut self, seq: u64, page: CatalogPage) -> Delivery {
        if !self.seq.is_current(seq) {
            return Delivery::Stale;
        }
        let Some(request) = self.pending.take() else {
            return Delivery::Stale;
        };

        self.total_pages = page.total_pages.max(1);
        self.committed = request.cursor;
        self.committed.page = self.committed.page.min(self.max_page());
        self.movies = page.movies;
        Delivery::Applied
    }

    /// Drop the latest request after a failure; the committed catalog stays
    pub fn fail(&mut self, seq: u64) -> Delivery {
        if !self.seq.is_current(seq) || self.pending.is_none() {
            return Delivery::Stale;
        }
        self.pending = None;
        Delivery::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total_pages: u32) -> CatalogPage {
        CatalogPage {
            movies: Vec::new(),
            total_pages,
        }
    }

    fn loaded(total_pages: u32) -> CatalogState {
        let mut state = CatalogState::new();
        let seq = state.reload().into_request().unwrap().seq;
        state.apply(seq, page(total_pages));
        state
    }

    #[test]
    fn test_displayed_max_caps_at_500() {
        assert_eq!(displayed_max(0), 1);
        assert_eq!(displayed_max(42), 42);
        assert_eq!(displayed_max(38_000), 500);
    }

    #[test]
    fn test_next_page_stops_at_max() {
        let mut state = loaded(2);
        let seq = state.next_page().into_request().unwrap().seq;
        state.apply(seq, page(2));
        assert_eq!(state.page(), 2);
        assert_eq!(state.next_page(), CatalogChange::Unchanged);
    }

    #[test]
    fn test_prev_page_stops_at_one() {
        let mut state = loaded(10);
        assert_eq!(state.prev_page(), CatalogChange::Unchanged);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut state = loaded(700);
        let request = state.go_to_page(9999).into_request().unwrap();
        assert_eq!(request.cursor.page, 500);

        let mut state = loaded(3);
        let request = state.go_to_page(0).into_request();
        assert!(request.is_none(), "page 0 clamps to the current page 1");
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = loaded(10);
        let seq = state.go_to_page(4).into_request().unwrap().seq;
        state.apply(seq, page(10));
        assert_eq!(state.page(), 4);

        let request = state.set_query("alien").into_request().unwrap();
        assert_eq!(request.cursor.page, 1);
        assert_eq!(request.cursor.filter, CatalogFilter::Search("alien".into()));
    }

    #[test]
    fn test_shrinking_page_count_clamps_committed_page() {
        let mut state = loaded(10);
        let seq = state.go_to_page(5).into_request().unwrap().seq;
        state.apply(seq, page(10));

        let seq = state.reload().into_request().unwrap().seq;
        state.apply(seq, page(3));
        assert_eq!(state.page(), 3);
        assert_eq!(state.max_page(), 3);

        let request = state.prev_page().into_request().unwrap();
        assert_eq!(request.cursor.page, 2);
    }

    #[test]
    fn test_popular_sentinel_is_not_a_search() {
        let mut state = loaded(10);
        assert_eq!(state.set_query("popular"), CatalogChange::Unchanged);
        assert_eq!(state.target().filter, CatalogFilter::Popular);
    }

    #[test]
    fn test_pending_filter_switch_blocks_paging_until_loaded() {
        let mut state = loaded(10);
        state.toggle_genre("28".into());
        assert_eq!(state.next_page(), CatalogChange::Unchanged);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = loaded(10);
        let old = state.set_query("bat").into_request().unwrap().seq;
        let new = state.set_query("batman").into_request().unwrap().seq;

        assert_eq!(state.apply(old, page(3)), Delivery::Stale);
        assert_eq!(state.query(), "batman");
        assert_eq!(state.apply(new, page(3)), Delivery::Applied);
        assert_eq!(state.committed().filter, CatalogFilter::Search("batman".into()));
    }

    #[test]
    fn test_failure_keeps_committed_state() {
        let mut state = loaded(10);
        let seq = state.next_page().into_request().unwrap().seq;
        assert_eq!(state.fail(seq), Delivery::Applied);
        assert_eq!(state.page(), 1);
        assert_eq!(state.total_pages(), 10);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_toggle_reports_selection_change() {
        let mut state = loaded(10);
        match state.toggle_genre("28".into()) {
            CatalogChange::Refetch { selection, .. } => assert_eq!(
                selection,
                Some(SelectionChange {
                    previous: None,
                    current: Some("28".into()),
                })
            ),
            CatalogChange::Unchanged => panic!("expected refetch"),
        }
    }
}
