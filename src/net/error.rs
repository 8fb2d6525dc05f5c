#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::HashMap;

use thiserror::Error;

/// Field-level validation messages keyed by field name, as sent by the
/// backend alongside some 4xx responses.
pub type FieldErrors = HashMap<String, Vec<String>>;

/// The single error shape all network failures are normalized into at the
/// HTTP client boundary. Downstream code matches on this closed set rather
/// than probing response bodies.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response reached the client at all (DNS, connection, CORS).
    #[error("{message}")]
    Transport { message: String },
    /// The server answered with a non-success status.
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        errors: Option<FieldErrors>,
    },
}

impl ApiError {
    /// Connectivity failure with the generic user-facing message.
    pub(crate) fn network() -> Self {
        Self::Transport {
            message: "Network error. Please check your connection.".to_owned(),
        }
    }

    /// Stub error for non-browser builds, where no network stack exists.
    #[cfg(not(feature = "hydrate"))]
    pub(crate) fn unavailable() -> Self {
        Self::Transport {
            message: "not available on server".to_owned(),
        }
    }

    /// Numeric status code; transport failures report `0`.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Transport { .. } => 0,
            Self::Http { status, .. } => *status,
        }
    }
}

/// Error surface of the domain services: either a normalized request
/// failure, or a success response whose envelope lacked the expected
/// resource. The distinction lets callers tell "request failed" apart
/// from "server/client contract mismatch".
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid response format: missing {resource} data")]
    PayloadMissing { resource: &'static str },
}

impl ServiceError {
    /// Status code of the underlying HTTP failure, if there was one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status_code()),
            Self::PayloadMissing { .. } => None,
        }
    }
}
