//! Backend response envelope unwrapping.
//!
//! The backend is inconsistent about where it places the real payload: it
//! may sit at the top level, under `data`, or under a resource-specific
//! key (`user`, ...). The unwrap policy tries those locations in that
//! priority order and the first present, non-null value wins. A success
//! response matching none of them is a contract mismatch and fails with
//! [`ServiceError::PayloadMissing`], never a silently absent value.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ServiceError;

/// Extract the typed payload from a success-response envelope.
pub(crate) fn unwrap_payload<T: DeserializeOwned>(
    value: Value,
    resource: &'static str,
) -> Result<T, ServiceError> {
    if let Ok(payload) = serde_json::from_value::<T>(value.clone()) {
        return Ok(payload);
    }
    for key in ["data", resource] {
        if let Some(inner) = value.get(key) {
            if !inner.is_null() {
                return serde_json::from_value(inner.clone())
                    .map_err(|_| ServiceError::PayloadMissing { resource });
            }
        }
    }
    Err(ServiceError::PayloadMissing { resource })
}
