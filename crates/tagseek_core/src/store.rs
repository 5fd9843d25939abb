use crate::{update, AppState, AppViewModel, Effect, Msg};

type Subscriber = Box<dyn FnMut(&AppViewModel)>;

/// Owns the [`AppState`] and notifies subscribers after each change.
///
/// Every mutation goes through [`Store::dispatch`]. Subscribers run only when
/// the message actually changed state, so no-op submissions stay silent.
#[derive(Default)]
pub struct Store {
    state: AppState,
    subscribers: Vec<Subscriber>,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&AppViewModel) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Applies `msg` and returns the effects the caller must execute.
    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let changed = state.consume_dirty();
        self.state = state;

        if changed {
            let view = self.state.view();
            for subscriber in &mut self.subscribers {
                subscriber(&view);
            }
        }
        effects
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }
}
