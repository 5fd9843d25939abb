use std::sync::Once;

use pretty_assertions::assert_eq;
use tagseek_core::{update, AppState, Effect, Msg, HISTORY_LIMIT};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(tagseek_logging::initialize_for_tests);
}

fn submit(state: AppState, raw: &str) -> (AppState, Vec<Effect>) {
    update(state, Msg::TagSubmitted(raw.to_string()))
}

fn submit_all(tags: &[&str]) -> AppState {
    tags.iter()
        .fold(AppState::new(), |state, tag| submit(state, tag).0)
}

#[test]
fn mixed_case_duplicate_moves_to_front() {
    init_logging();
    let state = submit_all(&["Cat", "dog", "cat"]);
    assert_eq!(state.view().history, vec!["cat", "dog"]);
}

#[test]
fn resubmitting_existing_tag_keeps_length() {
    init_logging();
    let state = submit_all(&["a", "b", "c"]);
    assert_eq!(state.history().len(), 3);

    let (state, _) = submit(state, "B");
    assert_eq!(state.history().len(), 3);
    assert_eq!(state.view().history, vec!["b", "c", "a"]);
}

#[test]
fn history_keeps_last_ten_distinct_tags() {
    init_logging();
    let tags: Vec<String> = (1..=13).map(|n| format!("tag{n}")).collect();
    let refs: Vec<&str> = tags.iter().map(String::as_str).collect();
    let state = submit_all(&refs);

    let expected: Vec<String> = (4..=13).rev().map(|n| format!("tag{n}")).collect();
    assert_eq!(state.history().len(), HISTORY_LIMIT);
    assert_eq!(state.view().history, expected);
}

#[test]
fn history_has_no_duplicates_for_any_sequence() {
    init_logging();
    let sequence = [
        "Fox", "owl", "FOX", "bear", "Owl", "elk", "yak", "emu", "gnu", "ant", "bee", "cod",
        "eel", "fox",
    ];
    let state = submit_all(&sequence);
    let history = state.view().history;

    let mut distinct = history.clone();
    distinct.sort();
    distinct.dedup();
    assert_eq!(distinct.len(), history.len());
    assert!(history.len() <= HISTORY_LIMIT);
    assert_eq!(history[0], "fox");
    assert!(history.iter().all(|tag| *tag == tag.to_lowercase()));
    assert_eq!(history.last().map(String::as_str), Some("owl"));
    assert!(!history.contains(&"bear".to_string()));
}

#[test]
fn persist_effect_carries_normalized_history() {
    init_logging();
    let (state, _) = submit(AppState::new(), "Dogs");
    let (_, effects) = submit(state, "CATS");

    assert_eq!(
        effects[0],
        Effect::PersistHistory {
            tags: vec!["cats".to_string(), "dogs".to_string()],
        }
    );
}

#[test]
fn loaded_history_is_normalized() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::HistoryLoaded(vec![
            "Cats".to_string(),
            "dogs".to_string(),
            "CATS".to_string(),
        ]),
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().history, vec!["cats", "dogs"]);
}
