use super::*;

use crate::net::types::ClimbType;

fn dummy_climb(id: i64) -> Climb {
    Climb {
        id,
        user_id: 42,
        climb_type: ClimbType::Indoor,
        climb_date: "2024-03-01T12:00:00Z".to_owned(),
        grade: "V4".to_owned(),
        style: None,
        route_id: None,
        gym_id: None,
        completed: true,
        attempts: 1,
        falls: 0,
        rating: None,
        notes: None,
        created_at: "2024-03-01T18:00:00Z".to_owned(),
        updated_at: "2024-03-01T18:00:00Z".to_owned(),
    }
}

#[test]
fn fresh_store_is_loading_and_empty() {
    let state = ClimbsState::default();
    assert!(state.items.is_empty());
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn fetch_cycle_populates_items() {
    let mut state = ClimbsState::default();
    let token = state.begin_fetch();
    assert!(state.loading);
    state.fetch_succeeded(token, vec![dummy_climb(1), dummy_climb(2)]);
    assert_eq!(state.items.len(), 2);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn fetch_failure_empties_items() {
    let mut state = ClimbsState::default();
    let token = state.begin_fetch();
    state.fetch_succeeded(token, vec![dummy_climb(1)]);

    let token = state.begin_fetch();
    state.fetch_failed(token, "boom".to_owned());
    assert!(state.items.is_empty());
    assert_eq!(state.error.as_deref(), Some("boom"));
    assert!(!state.loading);
}

#[test]
fn begin_fetch_clears_previous_error() {
    let mut state = ClimbsState::default();
    let token = state.begin_fetch();
    state.fetch_failed(token, "boom".to_owned());
    state.begin_fetch();
    assert!(state.error.is_none());
}

#[test]
fn skip_fetch_resolves_without_error() {
    let mut state = ClimbsState::default();
    state.skip_fetch();
    assert!(!state.loading);
    assert!(state.items.is_empty());
    assert!(state.error.is_none());
}

// =============================================================================
// Stale completion handling
// =============================================================================

#[test]
fn stale_success_is_discarded() {
    let mut state = ClimbsState::default();
    let stale = state.begin_fetch();
    let fresh = state.begin_fetch();
    state.fetch_succeeded(fresh, vec![dummy_climb(2)]);
    state.fetch_succeeded(stale, vec![dummy_climb(1)]);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, 2);
}

#[test]
fn stale_failure_is_discarded() {
    let mut state = ClimbsState::default();
    let stale = state.begin_fetch();
    let fresh = state.begin_fetch();
    state.fetch_succeeded(fresh, vec![dummy_climb(2)]);
    state.fetch_failed(stale, "boom".to_owned());
    assert_eq!(state.items.len(), 1);
    assert!(state.error.is_none());
}

#[test]
fn stale_completion_does_not_clear_loading() {
    let mut state = ClimbsState::default();
    let stale = state.begin_fetch();
    let _fresh = state.begin_fetch();
    state.fetch_succeeded(stale, vec![dummy_climb(1)]);
    // The newer fetch is still in flight.
    assert!(state.loading);
    assert!(state.items.is_empty());
}
