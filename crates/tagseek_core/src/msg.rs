#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User submitted a raw tag from the search box.
    TagSubmitted(String),
    /// User picked an entry from the history list (0 = most recent).
    HistoryEntrySelected(usize),
    /// History read from persistent storage at startup.
    HistoryLoaded(Vec<String>),
    /// Re-run the most recent history entry, if any.
    ReplayLastSearch,
    /// Search service answered a request.
    SearchSucceeded {
        request_id: crate::RequestId,
        items: Vec<crate::ResultItem>,
    },
    /// Search request failed in transport or was rejected by the service.
    SearchFailed {
        request_id: crate::RequestId,
        reason: String,
    },
}
