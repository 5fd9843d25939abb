use crate::RequestId;

/// Side effects requested by [`crate::update`], executed by the app in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Rewrite the persisted history slot with `tags`.
    PersistHistory { tags: Vec<String> },
    /// Query the search service with the original-case `query`.
    Search { request_id: RequestId, query: String },
}
