use super::*;

fn test_user() -> User {
    User {
        id: "42".to_owned(),
        email: "alex@example.com".to_owned(),
        username: "alex".to_owned(),
        first_name: None,
        last_name: None,
        profile_picture: None,
        created_at: None,
    }
}

fn request_failed() -> AuthError {
    AuthError {
        message: "Invalid credentials".to_owned(),
        status_code: Some(401),
    }
}

// =============================================================================
// Initial state and session verification
// =============================================================================

#[test]
fn fresh_state_is_unknown_and_loading() {
    let state = AuthState::default();
    assert_eq!(state.session, Session::Unknown);
    assert!(state.loading);
    assert!(state.error.is_none());
    assert!(state.user().is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn verify_success_authenticates() {
    let mut state = AuthState::default();
    state.verify_succeeded(test_user());
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.user().map(|u| u.username.as_str()), Some("alex"));
}

#[test]
fn verify_failure_is_silent() {
    // A fresh visitor has no session cookie; that is not an error.
    let mut state = AuthState::default();
    state.verify_failed();
    assert_eq!(state.session, Session::Unauthenticated);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

// =============================================================================
// Login / register transitions
// =============================================================================

#[test]
fn begin_operation_sets_loading_and_clears_error() {
    let mut state = AuthState::default();
    state.operation_failed(request_failed());
    state.begin_operation();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn signed_in_replaces_session_and_clears_error() {
    let mut state = AuthState::default();
    state.verify_failed();
    state.begin_operation();
    state.signed_in(test_user());
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn operation_failure_keeps_existing_session() {
    let mut state = AuthState::default();
    state.verify_succeeded(test_user());
    state.begin_operation();
    state.operation_failed(request_failed());
    // A failed profile update must not sign the user out.
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.error.as_ref().map(|e| e.status_code), Some(Some(401)));
}

#[test]
fn auth_error_carries_service_status() {
    let err = ServiceError::from(crate::net::error::ApiError::Http {
        status: 409,
        message: "Email already registered".to_owned(),
        errors: None,
    });
    let auth_err = AuthError::from(&err);
    assert_eq!(auth_err.status_code, Some(409));
    assert_eq!(auth_err.message, "Email already registered");
}

// =============================================================================
// Logout
// =============================================================================

#[test]
fn signed_out_always_ends_unauthenticated() {
    let mut state = AuthState::default();
    state.verify_succeeded(test_user());
    state.signed_out();
    assert_eq!(state.session, Session::Unauthenticated);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn login_then_logout_round_trip() {
    let mut state = AuthState::default();
    state.verify_failed();
    state.begin_operation();
    state.signed_in(test_user());
    state.signed_out();
    assert_eq!(state.session, Session::Unauthenticated);
    assert!(state.error.is_none());
}

#[test]
fn clear_error_leaves_session_alone() {
    let mut state = AuthState::default();
    state.verify_succeeded(test_user());
    state.operation_failed(request_failed());
    state.clear_error();
    assert!(state.error.is_none());
    assert!(state.is_authenticated());
}
