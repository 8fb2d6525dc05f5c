//! HTTP client for the backend API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending
//! the HTTPOnly session cookie (`credentials: include`). The cookie store
//! is the only credential carrier; the client never reads or stores a
//! token itself.
//!
//! Server-side / native: stubs failing with a transport error, since these
//! requests are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure leaving this module is an [`ApiError`]: non-success
//! statuses are normalized through [`error_from_response`], and requests
//! that produce no response at all become `Transport` with status code 0.

#![allow(clippy::unused_async)]

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use super::error::{ApiError, FieldErrors};

/// `GET` a relative endpoint, returning the parsed JSON body.
#[cfg(feature = "hydrate")]
pub async fn get(endpoint: &str) -> Result<Value, ApiError> {
    send(Method::Get, endpoint, None).await
}

/// `POST` a JSON-serializable body to a relative endpoint.
#[cfg(feature = "hydrate")]
pub async fn post<B: Serialize + ?Sized>(endpoint: &str, body: &B) -> Result<Value, ApiError> {
    let json = serde_json::to_string(body).map_err(|_| ApiError::network())?;
    send(Method::Post, endpoint, Some(json)).await
}

/// `POST` with no body (logout, refresh).
#[cfg(feature = "hydrate")]
pub async fn post_empty(endpoint: &str) -> Result<Value, ApiError> {
    send(Method::Post, endpoint, None).await
}

/// `PUT` a JSON-serializable body to a relative endpoint.
#[cfg(feature = "hydrate")]
pub async fn put<B: Serialize + ?Sized>(endpoint: &str, body: &B) -> Result<Value, ApiError> {
    let json = serde_json::to_string(body).map_err(|_| ApiError::network())?;
    send(Method::Put, endpoint, Some(json)).await
}

/// `PUT` a multipart form (file-bearing profile update). The browser sets
/// the multipart boundary, so no Content-Type header is attached here.
#[cfg(feature = "hydrate")]
pub async fn put_form(endpoint: &str, form: &web_sys::FormData) -> Result<Value, ApiError> {
    use gloo_net::http::Request;

    let url = crate::config::url(endpoint);
    let request = Request::put(&url)
        .credentials(web_sys::RequestCredentials::Include)
        .body(form.clone())
        .map_err(|_| ApiError::network())?;
    let response = request.send().await.map_err(|_| ApiError::network())?;
    into_payload(response).await
}

#[cfg(feature = "hydrate")]
enum Method {
    Get,
    Post,
    Put,
}

#[cfg(feature = "hydrate")]
async fn send(method: Method, endpoint: &str, body: Option<String>) -> Result<Value, ApiError> {
    use gloo_net::http::Request;

    let url = crate::config::url(endpoint);
    let builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
    }
    .credentials(web_sys::RequestCredentials::Include);

    let result = match body {
        Some(json) => {
            let request = builder
                .header("Content-Type", "application/json")
                .body(json)
                .map_err(|_| ApiError::network())?;
            request.send().await
        }
        None => builder.send().await,
    };

    let response = result.map_err(|_| ApiError::network())?;
    into_payload(response).await
}

#[cfg(feature = "hydrate")]
async fn into_payload(response: gloo_net::http::Response) -> Result<Value, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(error_from_response(status, &body));
    }
    response
        .json::<Value>()
        .await
        .map_err(|_| ApiError::network())
}

#[cfg(not(feature = "hydrate"))]
pub async fn get(endpoint: &str) -> Result<Value, ApiError> {
    let _ = endpoint;
    Err(ApiError::unavailable())
}

#[cfg(not(feature = "hydrate"))]
pub async fn post<B: Serialize + ?Sized>(endpoint: &str, body: &B) -> Result<Value, ApiError> {
    let _ = (endpoint, body);
    Err(ApiError::unavailable())
}

#[cfg(not(feature = "hydrate"))]
pub async fn post_empty(endpoint: &str) -> Result<Value, ApiError> {
    let _ = endpoint;
    Err(ApiError::unavailable())
}

#[cfg(not(feature = "hydrate"))]
pub async fn put<B: Serialize + ?Sized>(endpoint: &str, body: &B) -> Result<Value, ApiError> {
    let _ = (endpoint, body);
    Err(ApiError::unavailable())
}

/// Clear client-held credentials after logout.
///
/// Intentionally a no-op: the session lives in HTTPOnly cookies that only
/// the server's `Set-Cookie` on `POST /logout` can invalidate. The method
/// keeps the interface symmetrical should token auth ever be added.
pub fn clear_auth() {}

/// Shape of a structured error body sent by the backend.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(rename = "statusCode")]
    status_code: Option<u16>,
    errors: Option<FieldErrors>,
}

/// Normalize a non-success response into an [`ApiError`].
///
/// A parseable error body contributes its message, optional field errors,
/// and (when present) its own status code; anything else collapses into a
/// generic message carrying the HTTP status.
pub(crate) fn error_from_response(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => ApiError::Http {
            status: parsed.status_code.unwrap_or(status),
            message: parsed.message,
            errors: parsed.errors,
        },
        Err(_) => ApiError::Http {
            status,
            message: "An unexpected error occurred".to_owned(),
            errors: None,
        },
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;
