//! Session manager: process-wide authentication state.
//!
//! One `RwSignal<AuthState>` is constructed by the application root and
//! provided through context; `init` verifies the cookie session exactly
//! once at mount. The state machine runs over
//! {Unknown, Unauthenticated, Authenticated(User)} with `loading` and
//! `error` orthogonal to the session itself.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::error::ServiceError;
use crate::net::types::{LoginCredentials, RegisterCredentials, UpdateUserFields, User};
use crate::services;

/// Where the client currently stands with respect to authentication.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// Not yet verified against the backend (fresh page load).
    #[default]
    Unknown,
    Unauthenticated,
    Authenticated(User),
}

/// Error surfaced from a failed auth operation; the startup verification
/// never produces one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthError {
    pub message: String,
    pub status_code: Option<u16>,
}

impl From<&ServiceError> for AuthError {
    fn from(err: &ServiceError) -> Self {
        Self {
            message: err.to_string(),
            status_code: err.status_code(),
        }
    }
}

/// Authentication state provided app-wide through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    pub loading: bool,
    pub error: Option<AuthError>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: Session::Unknown,
            loading: true,
            error: None,
        }
    }
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match &self.session {
            Session::Authenticated(user) => Some(user),
            Session::Unknown | Session::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.session, Session::Authenticated(_))
    }

    /// The startup verify confirmed an existing cookie session.
    pub fn verify_succeeded(&mut self, user: User) {
        self.session = Session::Authenticated(user);
        self.loading = false;
    }

    /// The startup verify failed. Expected on a fresh visit with no
    /// session cookie, so no error is recorded.
    pub fn verify_failed(&mut self) {
        self.session = Session::Unauthenticated;
        self.loading = false;
    }

    /// A mutating operation (login/register/update) is starting.
    pub fn begin_operation(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Login, registration, or a profile update resolved with a user.
    pub fn signed_in(&mut self, user: User) {
        self.session = Session::Authenticated(user);
        self.loading = false;
        self.error = None;
    }

    /// A mutating operation failed; the session itself is untouched.
    pub fn operation_failed(&mut self, error: AuthError) {
        self.loading = false;
        self.error = Some(error);
    }

    /// Logout completed. The client-side session is authoritative here:
    /// this runs whatever the server answered.
    pub fn signed_out(&mut self) {
        self.session = Session::Unauthenticated;
        self.loading = false;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Verify the cookie session. Called exactly once, at application mount.
pub async fn init(auth: RwSignal<AuthState>) {
    match services::auth::verify_user().await {
        Ok(user) => auth.update(|a| a.verify_succeeded(user)),
        Err(_) => auth.update(AuthState::verify_failed),
    }
}

/// Sign in; the error also propagates outward so forms can branch.
pub async fn login(
    auth: RwSignal<AuthState>,
    credentials: &LoginCredentials,
) -> Result<User, AuthError> {
    auth.update(AuthState::begin_operation);
    match services::auth::login(credentials).await {
        Ok(user) => {
            auth.update(|a| a.signed_in(user.clone()));
            Ok(user)
        }
        Err(err) => Err(fail(auth, &err)),
    }
}

/// Create an account and sign it in.
pub async fn register(
    auth: RwSignal<AuthState>,
    credentials: &RegisterCredentials,
) -> Result<User, AuthError> {
    auth.update(AuthState::begin_operation);
    match services::auth::register(credentials).await {
        Ok(user) => {
            auth.update(|a| a.signed_in(user.clone()));
            Ok(user)
        }
        Err(err) => Err(fail(auth, &err)),
    }
}

/// Sign out. Always ends Unauthenticated; a server-side failure is logged
/// rather than surfaced, since the user asked to leave either way.
pub async fn logout(auth: RwSignal<AuthState>) {
    auth.update(|a| a.loading = true);
    if let Err(err) = services::auth::logout().await {
        leptos::logging::warn!("logout request failed: {err}");
    }
    auth.update(AuthState::signed_out);
}

/// Update the profile; on success the session carries the updated user.
#[cfg(feature = "hydrate")]
pub async fn update_user(
    auth: RwSignal<AuthState>,
    fields: &UpdateUserFields,
    picture: Option<web_sys::File>,
) -> Result<User, AuthError> {
    auth.update(AuthState::begin_operation);
    match services::auth::update_user(fields, picture).await {
        Ok(user) => {
            auth.update(|a| a.signed_in(user.clone()));
            Ok(user)
        }
        Err(err) => Err(fail(auth, &err)),
    }
}

#[cfg(not(feature = "hydrate"))]
pub async fn update_user(
    auth: RwSignal<AuthState>,
    fields: &UpdateUserFields,
) -> Result<User, AuthError> {
    auth.update(AuthState::begin_operation);
    match services::auth::update_user(fields).await {
        Ok(user) => {
            auth.update(|a| a.signed_in(user.clone()));
            Ok(user)
        }
        Err(err) => Err(fail(auth, &err)),
    }
}

fn fail(auth: RwSignal<AuthState>, err: &ServiceError) -> AuthError {
    let error = AuthError::from(err);
    auth.update(|a| a.operation_failed(error.clone()));
    error
}
