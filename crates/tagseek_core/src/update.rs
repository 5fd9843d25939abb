use tagseek_logging::{seek_debug, seek_info};

use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TagSubmitted(raw) => search_tag(&mut state, raw),
        Msg::HistoryEntrySelected(index) => {
            match state.history().get(index).map(ToOwned::to_owned) {
                Some(tag) => search_tag(&mut state, tag),
                None => Vec::new(),
            }
        }
        Msg::HistoryLoaded(tags) => {
            state.load_history(tags);
            Vec::new()
        }
        Msg::ReplayLastSearch => {
            match state.history().most_recent().map(ToOwned::to_owned) {
                Some(tag) => {
                    seek_info!("Replaying last search tag={}", tag);
                    search_tag(&mut state, tag)
                }
                None => Vec::new(),
            }
        }
        Msg::SearchSucceeded { request_id, items } => {
            if state.is_latest(request_id) {
                state.apply_results(items);
            } else {
                seek_debug!(
                    "Discarding stale response request_id={} latest={:?}",
                    request_id,
                    state.latest_request()
                );
            }
            Vec::new()
        }
        Msg::SearchFailed { request_id, reason } => {
            if state.is_latest(request_id) {
                state.apply_failure(reason);
            } else {
                seek_debug!(
                    "Discarding stale failure request_id={} reason={}",
                    request_id,
                    reason
                );
            }
            Vec::new()
        }
    };

    (state, effects)
}

/// Records `raw` and issues a search for it. Zero-length input is ignored.
fn search_tag(state: &mut AppState, raw: String) -> Vec<Effect> {
    if raw.is_empty() {
        return Vec::new();
    }
    state.record_tag(&raw);
    let request_id = state.begin_search(&raw);
    // History is written before the request goes out.
    vec![
        Effect::PersistHistory {
            tags: state.history().snapshot(),
        },
        Effect::Search {
            request_id,
            query: raw,
        },
    ]
}
