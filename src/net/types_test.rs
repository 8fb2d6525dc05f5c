use super::*;

use serde_json::json;

// =============================================================================
// User
// =============================================================================

#[test]
fn display_name_prefers_full_name() {
    let user = user_with(Some("Alex"), Some("Honnold"));
    assert_eq!(user.display_name(), "Alex Honnold");
}

#[test]
fn display_name_trims_missing_last_name() {
    let user = user_with(Some("Alex"), None);
    assert_eq!(user.display_name(), "Alex");
}

#[test]
fn display_name_falls_back_to_username() {
    let user = user_with(None, None);
    assert_eq!(user.display_name(), "alex");
}

#[test]
fn display_name_ignores_empty_first_name() {
    let mut user = user_with(Some(""), Some("Honnold"));
    assert_eq!(user.display_name(), "alex");
    user.username = String::new();
    assert_eq!(user.display_name(), "alex@example.com");
}

#[test]
fn numeric_id_parses_or_rejects() {
    let mut user = user_with(None, None);
    user.id = "42".to_owned();
    assert_eq!(user.numeric_id(), Some(42));
    user.id = "a1b2c3".to_owned();
    assert_eq!(user.numeric_id(), None);
}

#[test]
fn user_created_at_uses_camel_case() {
    let value = json!({
        "id": "7",
        "email": "alex@example.com",
        "username": "alex",
        "createdAt": "2024-01-15T08:30:00Z"
    });
    let user: User = serde_json::from_value(value).unwrap();
    assert_eq!(user.created_at.as_deref(), Some("2024-01-15T08:30:00Z"));
}

#[test]
fn register_credentials_omit_unset_names() {
    let credentials = RegisterCredentials {
        email: "alex@example.com".to_owned(),
        password: "longenough".to_owned(),
        username: "alex".to_owned(),
        first_name: None,
        last_name: None,
    };
    let value = serde_json::to_value(&credentials).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("first_name"));
    assert!(!object.contains_key("last_name"));
}

// =============================================================================
// Climbs
// =============================================================================

#[test]
fn climb_type_serializes_lowercase() {
    assert_eq!(serde_json::to_value(ClimbType::Indoor).unwrap(), json!("indoor"));
    assert_eq!(serde_json::to_value(ClimbType::Outdoor).unwrap(), json!("outdoor"));
}

#[test]
fn climb_deserializes_with_optional_fields_absent() {
    let value = json!({
        "id": 1,
        "user_id": 42,
        "climb_type": "indoor",
        "climb_date": "2024-03-01T12:00:00Z",
        "grade": "V4",
        "completed": true,
        "attempts": 3,
        "falls": 1,
        "created_at": "2024-03-01T18:00:00Z",
        "updated_at": "2024-03-01T18:00:00Z"
    });
    let climb: Climb = serde_json::from_value(value).unwrap();
    assert_eq!(climb.grade, "V4");
    assert!(climb.style.is_none());
    assert!(climb.gym_id.is_none());
    assert!(climb.rating.is_none());
}

#[test]
fn create_climb_request_omits_unset_options() {
    let request = CreateClimbRequest {
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
    };
    let value = serde_json::to_value(&request).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("style"));
    assert!(!object.contains_key("gym_id"));
    assert!(!object.contains_key("notes"));
    assert_eq!(object.get("completed"), Some(&json!(true)));
}

// =============================================================================
// Gyms
// =============================================================================

#[test]
fn gym_type_field_is_named_type() {
    let value = json!({
        "id": 3,
        "name": "Crux Central",
        "type": "bouldering",
        "city": "Boulder",
        "country": "US",
        "active": true,
        "created_at": "2023-06-01T00:00:00Z",
        "updated_at": "2023-06-01T00:00:00Z"
    });
    let gym: Gym = serde_json::from_value(value).unwrap();
    assert_eq!(gym.gym_type, GymType::Bouldering);
    assert!(gym.has_bouldering.is_none());
}

// =============================================================================
// Training sessions
// =============================================================================

#[test]
fn top_rope_serializes_as_tr() {
    assert_eq!(serde_json::to_value(RopeClimbType::TopRope).unwrap(), json!("TR"));
    assert_eq!(serde_json::to_value(RopeClimbType::Lead).unwrap(), json!("Lead"));
}

#[test]
fn session_nested_lists_default_to_empty() {
    let value = json!({
        "id": 10,
        "user_id": 42,
        "gym_id": 3,
        "session_date": "2024-04-02T12:00:00Z",
        "total_climbs": 0,
        "total_sends": 0,
        "created_at": "2024-04-02T20:00:00Z",
        "updated_at": "2024-04-02T20:00:00Z"
    });
    let session: TrainingSession = serde_json::from_value(value).unwrap();
    assert!(session.partners.is_empty());
    assert!(session.boulders.is_empty());
    assert!(session.rope_climbs.is_empty());
    assert!(session.gym.is_none());
}

#[test]
fn create_session_request_omits_empty_record_lists() {
    let request = CreateTrainingSessionRequest {
        gym_id: 3,
        session_date: "2024-04-02T12:00:00Z".to_owned(),
        description: None,
        partner_ids: None,
        boulders: Vec::new(),
        rope_climbs: Vec::new(),
    };
    let value = serde_json::to_value(&request).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("boulders"));
    assert!(!object.contains_key("rope_climbs"));
    assert!(!object.contains_key("partner_ids"));
}

#[test]
fn create_session_request_keeps_populated_records() {
    let request = CreateTrainingSessionRequest {
        gym_id: 3,
        session_date: "2024-04-02T12:00:00Z".to_owned(),
        description: Some("Power endurance".to_owned()),
        partner_ids: Some(vec![7]),
        boulders: vec![BoulderRequest {
            grade: "V5".to_owned(),
            color_tag: Some("red".to_owned()),
            outcome: BoulderOutcome::Flash,
            notes: None,
        }],
        rope_climbs: vec![RopeClimbRequest {
            climb_type: RopeClimbType::Lead,
            grade: "5.11c".to_owned(),
            outcome: RopeClimbOutcome::Hung,
            notes: None,
        }],
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["boulders"][0]["outcome"], json!("Flash"));
    assert_eq!(value["rope_climbs"][0]["climb_type"], json!("Lead"));
    assert_eq!(value["rope_climbs"][0]["outcome"], json!("Hung"));
    assert_eq!(value["partner_ids"], json!([7]));
}

// =============================================================================
// Helpers
// =============================================================================

fn user_with(first: Option<&str>, last: Option<&str>) -> User {
    User {
        id: "42".to_owned(),
        email: "alex@example.com".to_owned(),
        username: "alex".to_owned(),
        first_name: first.map(str::to_owned),
        last_name: last.map(str::to_owned),
        profile_picture: None,
        created_at: None,
    }
}
