//! Walks the refresh state machine through a full paging session

use std::sync::{Arc, Mutex};

use refresher_core::events::refresh_events::{BEGIN, END, END_NO_MORE_DATA, RESET};
use refresher_core::{FooterConfig, MainQueue, RefreshState, StateTransitions};

fn step(state: RefreshState, event: u32) -> RefreshState {
    state.on_event(event).unwrap_or(state)
}

#[test]
fn paging_session() {
    let mut state = RefreshState::default();
    let mut visited = vec![state];

    for event in [BEGIN, END, BEGIN, END_NO_MORE_DATA, BEGIN, END, BEGIN, END_NO_MORE_DATA, RESET] {
        state = step(state, event);
        visited.push(state);
    }

    assert_eq!(
        visited,
        vec![
            RefreshState::Idle,
            RefreshState::Refreshing,
            RefreshState::Idle,
            RefreshState::Refreshing,
            RefreshState::NoMoreData,
            RefreshState::Refreshing,
            RefreshState::Idle,
            RefreshState::Refreshing,
            RefreshState::NoMoreData,
            RefreshState::Idle,
        ]
    );
}

#[test]
fn ignored_events_leave_state_alone() {
    assert_eq!(RefreshState::Idle.on_event(END), None);
    assert_eq!(RefreshState::Idle.on_event(RESET), None);
    assert_eq!(RefreshState::Refreshing.on_event(BEGIN), None);
    assert_eq!(RefreshState::Refreshing.on_event(RESET), None);
    assert_eq!(RefreshState::NoMoreData.on_event(END), None);
    assert_eq!(RefreshState::Idle.on_event(999), None);
}

#[test]
fn only_idle_accepts_pull_triggers() {
    assert!(RefreshState::Idle.accepts_trigger());
    assert!(!RefreshState::Refreshing.accepts_trigger());
    assert!(!RefreshState::NoMoreData.accepts_trigger());
}

#[test]
fn queued_work_applies_config_in_post_order() {
    let queue = MainQueue::new();
    let applied = Arc::new(Mutex::new(Vec::new()));

    for source in ["height = 40.0", "height = 60.0\nhidden = true"] {
        let config = FooterConfig::from_toml_str(source).unwrap();
        let applied = applied.clone();
        queue.post(move || applied.lock().unwrap().push(config));
    }

    assert!(applied.lock().unwrap().is_empty());
    assert_eq!(queue.run_pending(), 2);

    let applied = applied.lock().unwrap();
    assert_eq!(applied[0].height, 40.0);
    assert!(!applied[0].hidden);
    assert_eq!(applied[1].height, 60.0);
    assert!(applied[1].hidden);
}
