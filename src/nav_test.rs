use super::*;

#[test]
fn two_clicks_cycle_closed_open_closed() {
    let mut state = MenuState::default();
    assert!(!state.is_open());
    state.toggle();
    assert!(state.is_open());
    state.toggle();
    assert!(!state.is_open());
}

#[test]
fn close_is_idempotent() {
    let mut state = MenuState::default();
    state.toggle();
    state.close();
    let after_once = state;
    state.close();
    assert_eq!(state, after_once);
    assert!(!state.is_open());
}

#[test]
fn close_forces_closed_regardless_of_history() {
    let mut state = MenuState::default();
    for _ in 0..3 {
        state.toggle();
    }
    assert!(state.is_open());
    state.close();
    assert!(!state.is_open());
}

#[test]
fn scroll_target_clears_the_fixed_header() {
    assert_eq!(scroll_target(100), 30.0);
    assert_eq!(scroll_target(70), 0.0);
    assert_eq!(scroll_target(0), -70.0);
}
