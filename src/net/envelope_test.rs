use super::*;

use serde::Deserialize;
use serde_json::json;

#[derive(Debug, PartialEq, Deserialize)]
struct Payload {
    name: String,
}

// =============================================================================
// The three envelope shapes resolve to the same payload
// =============================================================================

#[test]
fn top_level_payload() {
    let value = json!({ "name": "El Cap" });
    let payload: Payload = unwrap_payload(value, "route").unwrap();
    assert_eq!(payload.name, "El Cap");
}

#[test]
fn data_keyed_payload() {
    let value = json!({ "data": { "name": "El Cap" } });
    let payload: Payload = unwrap_payload(value, "route").unwrap();
    assert_eq!(payload.name, "El Cap");
}

#[test]
fn resource_keyed_payload() {
    let value = json!({ "route": { "name": "El Cap" } });
    let payload: Payload = unwrap_payload(value, "route").unwrap();
    assert_eq!(payload.name, "El Cap");
}

// =============================================================================
// Priority and null handling
// =============================================================================

#[test]
fn data_key_wins_over_resource_key() {
    let value = json!({
        "data": { "name": "from data" },
        "route": { "name": "from resource" }
    });
    let payload: Payload = unwrap_payload(value, "route").unwrap();
    assert_eq!(payload.name, "from data");
}

#[test]
fn null_data_falls_through_to_resource_key() {
    let value = json!({
        "data": null,
        "route": { "name": "El Cap" }
    });
    let payload: Payload = unwrap_payload(value, "route").unwrap();
    assert_eq!(payload.name, "El Cap");
}

// =============================================================================
// Contract mismatches
// =============================================================================

#[test]
fn missing_payload_is_an_error() {
    let value = json!({ "unrelated": true });
    let result: Result<Payload, _> = unwrap_payload(value, "route");
    assert_eq!(result, Err(ServiceError::PayloadMissing { resource: "route" }));
}

#[test]
fn all_null_keys_is_an_error() {
    let value = json!({ "data": null, "route": null });
    let result: Result<Payload, _> = unwrap_payload(value, "route");
    assert_eq!(result, Err(ServiceError::PayloadMissing { resource: "route" }));
}

#[test]
fn wrong_shape_under_key_is_an_error() {
    // The key is present but its value cannot decode; this is a contract
    // mismatch, not a success.
    let value = json!({ "route": { "title": "El Cap" } });
    let result: Result<Payload, _> = unwrap_payload(value, "route");
    assert_eq!(result, Err(ServiceError::PayloadMissing { resource: "route" }));
}

#[test]
fn real_user_envelope_unwraps() {
    let value = json!({
        "user": {
            "id": "42",
            "email": "alex@example.com",
            "username": "alex"
        }
    });
    let user: crate::net::types::User = unwrap_payload(value, "user").unwrap();
    assert_eq!(user.username, "alex");
    assert!(user.first_name.is_none());
}
