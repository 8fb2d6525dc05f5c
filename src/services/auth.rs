//! Authentication service: cookie-session verification, login,
//! registration, logout, token refresh, and profile updates.
//!
//! Profile updates switch transparently to multipart form encoding when a
//! picture file is attached; callers never build the form themselves.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::Value;

use crate::config::endpoints;
use crate::net::envelope::unwrap_payload;
use crate::net::error::ServiceError;
use crate::net::http;
use crate::net::types::{LoginCredentials, RegisterCredentials, UpdateUserFields, User};

/// Verify the current cookie session via `GET /users`.
///
/// Fails with a 401-carrying [`ServiceError`] when no valid session cookie
/// is present; callers treat that as "not signed in", not as an error.
pub async fn verify_user() -> Result<User, ServiceError> {
    let value = http::get(endpoints::USERS).await?;
    unwrap_payload(value, "user")
}

/// Sign in with email and password. The session cookie is set by the
/// server; the response body only confirms the account.
pub async fn login(credentials: &LoginCredentials) -> Result<User, ServiceError> {
    let value = http::post(endpoints::LOGIN, credentials).await?;
    unwrap_payload(value, "user")
}

/// Create an account via `POST /users`; the server signs the new account
/// in by setting the session cookie on the same response.
pub async fn register(credentials: &RegisterCredentials) -> Result<User, ServiceError> {
    let value = http::post(endpoints::USERS, credentials).await?;
    unwrap_payload(value, "user")
}

/// Sign out. Cookie invalidation is the server's `Set-Cookie` side effect;
/// `clear_auth` runs regardless of the outcome to keep the interface
/// symmetrical for any future client-held credentials.
pub async fn logout() -> Result<(), ServiceError> {
    let result = http::post_empty(endpoints::LOGOUT).await;
    http::clear_auth();
    result?;
    Ok(())
}

/// Ask the server to rotate the session cookie.
pub async fn refresh() -> Result<(), ServiceError> {
    http::post_empty(endpoints::REFRESH).await?;
    Ok(())
}

/// Update the profile via `PUT /users`. Text-only updates go out as JSON;
/// a picture file forces multipart form encoding.
#[cfg(feature = "hydrate")]
pub async fn update_user(
    fields: &UpdateUserFields,
    picture: Option<web_sys::File>,
) -> Result<User, ServiceError> {
    let value = match picture {
        Some(file) => {
            let form = multipart_form(fields, &file)?;
            http::put_form(endpoints::USERS, &form).await?
        }
        None => http::put(endpoints::USERS, &update_user_body(fields)).await?,
    };
    unwrap_payload(value, "user")
}

#[cfg(not(feature = "hydrate"))]
pub async fn update_user(fields: &UpdateUserFields) -> Result<User, ServiceError> {
    let value = http::put(endpoints::USERS, &update_user_body(fields)).await?;
    unwrap_payload(value, "user")
}

/// JSON body for a field-only update: provided fields only, no file parts.
pub(crate) fn update_user_body(fields: &UpdateUserFields) -> Value {
    let mut body = serde_json::Map::new();
    let pairs = [
        ("email", &fields.email),
        ("username", &fields.username),
        ("first_name", &fields.first_name),
        ("last_name", &fields.last_name),
    ];
    for (key, value) in pairs {
        if let Some(value) = value {
            body.insert(key.to_owned(), Value::String(value.clone()));
        }
    }
    Value::Object(body)
}

#[cfg(feature = "hydrate")]
fn multipart_form(
    fields: &UpdateUserFields,
    picture: &web_sys::File,
) -> Result<web_sys::FormData, ServiceError> {
    use crate::net::error::ApiError;

    let form = web_sys::FormData::new()
        .map_err(|_| ServiceError::Api(ApiError::network()))?;
    let pairs = [
        ("email", &fields.email),
        ("username", &fields.username),
        ("first_name", &fields.first_name),
        ("last_name", &fields.last_name),
    ];
    for (key, value) in pairs {
        if let Some(value) = value {
            form.append_with_str(key, value)
                .map_err(|_| ServiceError::Api(ApiError::network()))?;
        }
    }
    form.append_with_blob("profile_picture", picture)
        .map_err(|_| ServiceError::Api(ApiError::network()))?;
    Ok(form)
}
