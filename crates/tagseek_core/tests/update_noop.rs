use tagseek_core::{update, AppState, Msg};

#[test]
fn empty_tag_is_noop() {
    let state = AppState::new();
    let (mut next, effects) = update(state.clone(), Msg::TagSubmitted(String::new()));

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn replay_with_empty_history_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::ReplayLastSearch);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
