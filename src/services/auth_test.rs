use super::*;

use serde_json::json;

use crate::net::types::UpdateUserFields;

#[test]
fn update_body_contains_only_provided_fields() {
    let fields = UpdateUserFields {
        email: None,
        username: Some("newhandle".to_owned()),
        first_name: Some("Alex".to_owned()),
        last_name: None,
    };
    let body = update_user_body(&fields);
    assert_eq!(
        body,
        json!({ "username": "newhandle", "first_name": "Alex" })
    );
}

#[test]
fn update_body_for_no_changes_is_empty_object() {
    let body = update_user_body(&UpdateUserFields::default());
    assert_eq!(body, json!({}));
}

#[test]
fn update_body_keeps_empty_string_values() {
    // Clearing a field is expressed as an explicit empty string, which
    // must still be sent.
    let fields = UpdateUserFields {
        first_name: Some(String::new()),
        ..UpdateUserFields::default()
    };
    let body = update_user_body(&fields);
    assert_eq!(body, json!({ "first_name": "" }));
}
