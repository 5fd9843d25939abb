use crate::history::TagHistory;
use crate::view_model::AppViewModel;

/// Identifier of an issued search; strictly increasing, first id is 1.
pub type RequestId = u64;

/// One entry of a search response, carried through to the UI untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultItem {
    pub id: String,
    pub title: String,
    pub url: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    history: TagHistory,
    results: Vec<ResultItem>,
    results_query: Option<String>,
    last_issued: RequestId,
    latest_query: String,
    awaiting_response: bool,
    last_error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            history: self.history.snapshot(),
            results: self.results.clone(),
            results_query: self.results_query.clone(),
            searching: self.awaiting_response,
            last_error: self.last_error.clone(),
        }
    }

    pub fn history(&self) -> &TagHistory {
        &self.history
    }

    pub fn results(&self) -> &[ResultItem] {
        &self.results
    }

    /// True while the latest issued search has not been answered.
    pub fn is_searching(&self) -> bool {
        self.awaiting_response
    }

    /// Id of the most recently issued search, `None` before the first one.
    pub fn latest_request(&self) -> Option<RequestId> {
        (self.last_issued > 0).then_some(self.last_issued)
    }

    /// Returns whether state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn load_history(&mut self, tags: Vec<String>) {
        self.history.replace(tags);
        self.mark_dirty();
    }

    pub(crate) fn record_tag(&mut self, raw: &str) {
        self.history.record(raw);
        self.mark_dirty();
    }

    /// Allocates the id for a new search on `query`.
    pub(crate) fn begin_search(&mut self, query: &str) -> RequestId {
        self.last_issued += 1;
        self.latest_query = query.to_string();
        self.awaiting_response = true;
        self.mark_dirty();
        self.last_issued
    }

    pub(crate) fn is_latest(&self, request_id: RequestId) -> bool {
        self.awaiting_response && request_id == self.last_issued
    }

    pub(crate) fn apply_results(&mut self, items: Vec<ResultItem>) {
        self.results = items;
        self.results_query = Some(std::mem::take(&mut self.latest_query));
        self.awaiting_response = false;
        self.last_error = None;
        self.mark_dirty();
    }

    pub(crate) fn apply_failure(&mut self, reason: String) {
        self.awaiting_response = false;
        self.last_error = Some(reason);
        self.mark_dirty();
    }
}
