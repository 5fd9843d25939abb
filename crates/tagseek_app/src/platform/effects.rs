use std::sync::Arc;
use std::time::Duration;

use tagseek_core::{Effect, Msg, ResultItem};
use tagseek_engine::{EngineEvent, EngineHandle, GifItem, KeyValueStore};
use tagseek_logging::{seek_info, seek_warn};

use super::persistence;

/// Executes core effects against the engine and the history slot, and turns
/// engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    store: Arc<dyn KeyValueStore>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, store: Arc<dyn KeyValueStore>) -> Self {
        Self { engine, store }
    }

    pub fn load_history(&self) -> Vec<String> {
        persistence::load_history(self.store.as_ref())
    }

    /// Runs `effects` in order. History writes finish before this returns.
    ///
    /// Returns messages that must be dispatched right away, such as the
    /// failure of a search the engine refused to start.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::PersistHistory { tags } => {
                    persistence::save_history(self.store.as_ref(), &tags);
                }
                Effect::Search { request_id, query } => {
                    seek_info!("Search request_id={} q_len={}", request_id, query.len());
                    if let Err(err) = self.engine.search(request_id, query) {
                        seek_warn!("Search request_id={} not started: {}", request_id, err);
                        follow_ups.push(Msg::SearchFailed {
                            request_id,
                            reason: err.to_string(),
                        });
                    }
                }
            }
        }
        follow_ups
    }

    pub fn shutdown(&self) {
        self.engine.shutdown();
    }

    /// Messages for every engine event that is already available.
    pub fn poll(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(event_to_msg)
            .collect()
    }

    /// Waits up to `timeout` for the next engine event.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(event_to_msg)
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { request_id, result } => match result {
            Ok(items) => {
                seek_info!(
                    "Search request_id={} returned {} items",
                    request_id,
                    items.len()
                );
                Msg::SearchSucceeded {
                    request_id,
                    items: items.into_iter().map(to_result_item).collect(),
                }
            }
            Err(err) => {
                seek_warn!("Search request_id={} failed: {}", request_id, err);
                Msg::SearchFailed {
                    request_id,
                    reason: err.to_string(),
                }
            }
        },
    }
}

fn to_result_item(item: GifItem) -> ResultItem {
    ResultItem {
        id: item.id,
        title: item.title,
        url: item.url,
        image_url: item.image_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_limit_and_ids_agree_across_crates() {
        assert_eq!(tagseek_core::RESULT_LIMIT, tagseek_engine::DEFAULT_LIMIT);

        let issued: tagseek_core::RequestId = u64::MAX;
        let echoed: tagseek_engine::RequestId = issued;
        let msg = event_to_msg(EngineEvent::SearchCompleted {
            request_id: echoed,
            result: Ok(Vec::new()),
        });
        assert_eq!(
            msg,
            Msg::SearchSucceeded {
                request_id: issued,
                items: Vec::new(),
            }
        );
    }
}
