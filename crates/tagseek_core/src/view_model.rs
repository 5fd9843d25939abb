use crate::ResultItem;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub history: Vec<String>,
    pub results: Vec<ResultItem>,
    /// Query the current results belong to.
    pub results_query: Option<String>,
    pub searching: bool,
    pub last_error: Option<String>,
}
