//! Tagseek core: pure tag-history state machine and view-model helpers.
mod effect;
mod history;
mod msg;
mod state;
mod store;
mod update;
mod view_model;

pub use effect::Effect;
pub use history::{normalize_tag, TagHistory, HISTORY_LIMIT};
pub use msg::Msg;
pub use state::{AppState, RequestId, ResultItem};
pub use store::Store;
pub use update::update;
pub use view_model::AppViewModel;

/// Number of results requested per search.
pub const RESULT_LIMIT: u32 = 10;
