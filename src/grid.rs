//! Paginated Grid State
//!
//! The state machine behind every remote grid: `Idle -> Loading ->
//! {Loaded, Errored}`, re-entering `Loading` whenever the query changes.
//!
//! Each fetch is issued as a [`FetchTicket`] carrying a request id. Only an
//! outcome whose id still equals the current pending id is applied, so a
//! late response can never overwrite a newer one. Detaching the state (on
//! unmount) makes every outstanding ticket stale.

use crate::error::FetchError;
use crate::models::{QuerySpec, ResultPage};
use crate::query::{clamp_page, page_count};

pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPhase {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// One fetch to perform: the id it must be applied under and the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub id: RequestId,
    pub query: QuerySpec,
}

/// What the grid should render
#[derive(Debug, PartialEq, Eq)]
pub enum GridView<'a> {
    Loading,
    Rows(&'a ResultPage),
    Error(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    query: QuerySpec,
    last_delivered: Option<ResultPage>,
    error_message: Option<String>,
    pending_request_id: RequestId,
    phase: GridPhase,
    /// Total reported for the current filter/sort/page size
    known_total: Option<usize>,
    detached: bool,
}

impl GridState {
    pub fn new(query: QuerySpec) -> Self {
        Self {
            query,
            last_delivered: None,
            error_message: None,
            pending_request_id: 0,
            phase: GridPhase::Idle,
            known_total: None,
            detached: false,
        }
    }

    pub fn query(&self) -> &QuerySpec {
        &self.query
    }

    pub fn phase(&self) -> GridPhase {
        self.phase
    }

    pub fn pending_request_id(&self) -> RequestId {
        self.pending_request_id
    }

    pub fn last_delivered(&self) -> Option<&ResultPage> {
        self.last_delivered.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == GridPhase::Loading
    }

    pub fn page_count(&self) -> usize {
        page_count(self.known_total.unwrap_or(0), self.query.page_size)
    }

    /// The error banner replaces the whole grid until a later fetch succeeds
    pub fn view(&self) -> GridView<'_> {
        if let Some(message) = &self.error_message {
            GridView::Error(message)
        } else if let Some(page) = &self.last_delivered {
            GridView::Rows(page)
        } else {
            GridView::Loading
        }
    }

    /// First fetch for the default query. Only valid from `Idle`.
    pub fn mount(&mut self) -> Option<FetchTicket> {
        if self.phase != GridPhase::Idle || self.detached {
            return None;
        }
        Some(self.begin_fetch())
    }

    /// Apply a fetch outcome. Returns false when the outcome was superseded.
    pub fn apply(&mut self, id: RequestId, outcome: Result<ResultPage, FetchError>) -> bool {
        if self.detached || id != self.pending_request_id || self.phase != GridPhase::Loading {
            log::debug!(
                target: "grid",
                "[GRID] dropping response {} (current {}, detached {})",
                id,
                self.pending_request_id,
                self.detached
            );
            return false;
        }

        match outcome {
            Ok(page) => {
                self.known_total = Some(page.total_results);
                self.last_delivered = Some(page);
                self.error_message = None;
                self.phase = GridPhase::Loaded;
            }
            Err(err) => {
                log::warn!(target: "grid", "[GRID] request {} failed: {}", id, err);
                // Previously loaded rows stay in memory; the banner hides them
                self.error_message = Some(err.user_message().to_string());
                self.phase = GridPhase::Errored;
            }
        }
        true
    }

    /// New filter string. Unchanged filters issue nothing.
    pub fn set_filter(&mut self, filter: String) -> Option<FetchTicket> {
        if self.detached || filter == self.query.filter {
            return None;
        }
        self.query.filter = filter;
        self.reset_paging();
        Some(self.begin_fetch())
    }

    /// Header click: same column toggles direction, another column sorts
    /// ascending on it.
    pub fn click_header(&mut self, column: &str) -> Option<FetchTicket> {
        if self.detached {
            return None;
        }
        if self.query.sort_column == column {
            self.query.sort_ascending = !self.query.sort_ascending;
        } else {
            self.query.sort_column = column.to_string();
            self.query.sort_ascending = true;
        }
        self.reset_paging();
        Some(self.begin_fetch())
    }

    /// Navigate to `page`, clamped to the last page of the known total.
    /// Navigating to the page already requested issues nothing.
    pub fn go_to_page(&mut self, page: usize) -> Option<FetchTicket> {
        if self.detached {
            return None;
        }
        let page = clamp_page(page, self.known_total.unwrap_or(0), self.query.page_size);
        if page == self.query.page {
            return None;
        }
        self.query.page = page;
        Some(self.begin_fetch())
    }

    pub fn next_page(&mut self) -> Option<FetchTicket> {
        self.go_to_page(self.query.page + 1)
    }

    pub fn previous_page(&mut self) -> Option<FetchTicket> {
        self.go_to_page(self.query.page.saturating_sub(1))
    }

    /// Offsets change meaning with the page size, so this restarts at page 0
    pub fn set_page_size(&mut self, page_size: usize) -> Option<FetchTicket> {
        let page_size = page_size.max(1);
        if self.detached || page_size == self.query.page_size {
            return None;
        }
        self.query.page_size = page_size;
        self.reset_paging();
        Some(self.begin_fetch())
    }

    /// Unmount: every outstanding and future outcome is discarded
    pub fn detach(&mut self) {
        self.detached = true;
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    fn reset_paging(&mut self) {
        self.query.page = 0;
        self.known_total = None;
    }

    fn begin_fetch(&mut self) -> FetchTicket {
        self.pending_request_id += 1;
        self.phase = GridPhase::Loading;
        FetchTicket {
            id: self.pending_request_id,
            query: self.query.clone(),
        }
    }
}


#[cfg(test)]
mod driven_tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::stream::{FuturesUnordered, StreamExt};

    use super::*;
    use crate::api::DataSource;
    use crate::models::RowRecord;

    /// Answers each filter once its gate opens
    struct GatedSource {
        gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
    }

    #[async_trait(?Send)]
    impl DataSource for GatedSource {
        async fn fetch_page(&self, query: &QuerySpec) -> Result<ResultPage, FetchError> {
            let gate = self.gates.borrow_mut().remove(&query.filter);
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            Ok(ResultPage {
                rows: vec![RowRecord::new().text("Filter", query.filter.clone())],
                total_results: 1,
                page_size: query.page_size,
            })
        }
    }

    async fn fetch(source: &GatedSource, ticket: FetchTicket) -> (RequestId, Result<ResultPage, FetchError>) {
        (ticket.id, source.fetch_page(&ticket.query).await)
    }

    #[tokio::test]
    async fn test_newer_response_wins_regardless_of_arrival() {
        let (open_first, first_gate) = oneshot::channel();
        let (open_second, second_gate) = oneshot::channel();
        let source = GatedSource {
            gates: RefCell::new(HashMap::from([
                ("first".to_string(), first_gate),
                ("second".to_string(), second_gate),
            ])),
        };

        let mut state = GridState::new(QuerySpec::new("Path", 25));
        state.mount();
        let r1 = state.set_filter("first".into()).unwrap();
        let r2 = state.set_filter("second".into()).unwrap();

        let mut pending = FuturesUnordered::new();
        pending.push(fetch(&source, r1.clone()));
        pending.push(fetch(&source, r2.clone()));

        // R2 resolves first
        let _ = open_second.send(());
        let (id, outcome) = pending.next().await.unwrap();
        assert_eq!(id, r2.id);
        assert!(state.apply(id, outcome));

        let _ = open_first.send(());
        let (id, outcome) = pending.next().await.unwrap();
        assert_eq!(id, r1.id);
        assert!(!state.apply(id, outcome));

        match state.view() {
            GridView::Rows(page) => assert_eq!(page.rows[0].get("Filter").unwrap().label(), "second"),
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unmount_discards_inflight_response() {
        let source = GatedSource {
            gates: RefCell::new(HashMap::new()),
        };
        let mut state = GridState::new(QuerySpec::new("Path", 25));
        let ticket = state.mount().unwrap();
        let (id, outcome) = fetch(&source, ticket).await;
        state.detach();
        assert!(!state.apply(id, outcome));
        assert_eq!(state.last_delivered(), None);
    }
}
