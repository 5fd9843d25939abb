use std::cell::RefCell;
use std::rc::Rc;

use tagseek_core::{AppState, AppViewModel, Effect, Msg, Store};

fn recording_store() -> (Store, Rc<RefCell<Vec<AppViewModel>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut store = Store::new(AppState::new());
    let sink = Rc::clone(&seen);
    store.subscribe(move |view| sink.borrow_mut().push(view.clone()));
    (store, seen)
}

#[test]
fn subscribers_see_each_change() {
    let (mut store, seen) = recording_store();

    let effects = store.dispatch(Msg::TagSubmitted("Otter".into()));
    assert_eq!(effects.len(), 2);
    assert!(matches!(effects[1], Effect::Search { request_id: 1, .. }));

    let views = seen.borrow();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].history, vec!["otter"]);
    assert!(views[0].searching);
}

#[test]
fn ignored_messages_do_not_notify() {
    let (mut store, seen) = recording_store();

    assert!(store.dispatch(Msg::TagSubmitted(String::new())).is_empty());
    assert!(store.dispatch(Msg::HistoryEntrySelected(0)).is_empty());
    assert!(store.dispatch(Msg::ReplayLastSearch).is_empty());
    assert!(seen.borrow().is_empty());
}

#[test]
fn store_view_matches_state() {
    let (mut store, _seen) = recording_store();
    store.dispatch(Msg::HistoryLoaded(vec!["a".into(), "b".into()]));

    assert_eq!(store.view().history, vec!["a", "b"]);
    assert_eq!(store.state().history().most_recent(), Some("a"));
}

#[test]
fn subscribers_receive_the_same_view_as_readers() {
    let (mut store, seen) = recording_store();
    store.dispatch(Msg::TagSubmitted("cats".into()));
    store.dispatch(Msg::HistoryLoaded(vec!["a".into()]));

    let views = seen.borrow();
    assert_eq!(views.len(), 2);
    assert_eq!(views.last(), Some(&store.view()));
    assert_eq!(views[1].history, vec!["a"]);
}
