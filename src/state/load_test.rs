use super::*;

#[test]
fn default_is_pending() {
    let state = Tracked::<u32>::default();
    assert_eq!(state.load, Load::Pending);
}

#[test]
fn resolve_current_token_updates_value() {
    let mut state = Tracked::default();
    let token = state.begin();
    assert!(state.resolve(token, Ok(7)));
    assert_eq!(state.load, Load::Ready(7));
}

#[test]
fn begin_keeps_previous_snapshot_visible() {
    let mut state = Tracked::default();
    let first = state.begin();
    state.resolve(first, Ok("old"));
    let _second = state.begin();
    assert_eq!(state.load, Load::Ready("old"));
}

#[test]
fn stale_response_is_discarded() {
    let mut state = Tracked::default();
    let slow = state.begin();
    let fast = state.begin();

    assert!(state.resolve(fast, Ok("fresh")));
    assert!(!state.resolve(slow, Ok("stale")));
    assert_eq!(state.load, Load::Ready("fresh"));
}

#[test]
fn stale_failure_does_not_replace_content() {
    let mut state = Tracked::default();
    let slow = state.begin();
    let fast = state.begin();
    state.resolve(fast, Ok(1));

    assert!(!state.resolve(slow, Err("boom".to_owned())));
    assert_eq!(state.load, Load::Ready(1));
}

#[test]
fn failure_replaces_content_with_message() {
    let mut state = Tracked::default();
    let first = state.begin();
    state.resolve(first, Ok(1));
    let second = state.begin();

    assert!(state.resolve(second, Err("Unable to load.".to_owned())));
    assert_eq!(state.load, Load::Failed("Unable to load.".to_owned()));
}

#[test]
fn only_latest_token_is_current() {
    let mut state = Tracked::<()>::default();
    let a = state.begin();
    assert!(state.is_current(a));
    let b = state.begin();
    assert!(!state.is_current(a));
    assert!(state.is_current(b));
}
