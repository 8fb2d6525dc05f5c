use super::*;

fn dummy_session(id: i64) -> TrainingSession {
    TrainingSession {
        id,
        user_id: 42,
        gym_id: 3,
        session_date: "2024-04-02T12:00:00Z".to_owned(),
        description: None,
        gym: None,
        partners: Vec::new(),
        boulders: Vec::new(),
        rope_climbs: Vec::new(),
        total_climbs: 0,
        total_sends: 0,
        created_at: "2024-04-02T20:00:00Z".to_owned(),
        updated_at: "2024-04-02T20:00:00Z".to_owned(),
    }
}

#[test]
fn fresh_store_is_loading_and_empty() {
    let state = TrainingState::default();
    assert!(state.items.is_empty());
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn fetch_cycle_populates_sessions() {
    let mut state = TrainingState::default();
    let token = state.begin_fetch();
    state.fetch_succeeded(token, vec![dummy_session(1)]);
    assert_eq!(state.items.len(), 1);
    assert!(!state.loading);
}

#[test]
fn fetch_failure_empties_sessions() {
    let mut state = TrainingState::default();
    let token = state.begin_fetch();
    state.fetch_succeeded(token, vec![dummy_session(1)]);

    let token = state.begin_fetch();
    state.fetch_failed(token, "boom".to_owned());
    assert!(state.items.is_empty());
    assert_eq!(state.error.as_deref(), Some("boom"));
}

#[test]
fn stale_failure_is_discarded() {
    let mut state = TrainingState::default();
    let stale = state.begin_fetch();
    let fresh = state.begin_fetch();
    state.fetch_succeeded(fresh, vec![dummy_session(2)]);
    state.fetch_failed(stale, "boom".to_owned());
    assert_eq!(state.items.len(), 1);
    assert!(state.error.is_none());
}
