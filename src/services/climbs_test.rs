use super::*;

#[test]
fn endpoint_always_scopes_by_user() {
    assert_eq!(climbs_endpoint(42, None, None), "/climbs?user_id=42");
}

#[test]
fn endpoint_appends_start_date() {
    assert_eq!(
        climbs_endpoint(42, Some("2024-01-01T00:00:00Z"), None),
        "/climbs?user_id=42&start_date=2024-01-01T00:00:00Z"
    );
}

#[test]
fn endpoint_appends_end_date_alone() {
    assert_eq!(
        climbs_endpoint(42, None, Some("2024-06-30T00:00:00Z")),
        "/climbs?user_id=42&end_date=2024-06-30T00:00:00Z"
    );
}

#[test]
fn endpoint_appends_both_bounds_in_order() {
    assert_eq!(
        climbs_endpoint(7, Some("2024-01-01T00:00:00Z"), Some("2024-06-30T00:00:00Z")),
        "/climbs?user_id=7&start_date=2024-01-01T00:00:00Z&end_date=2024-06-30T00:00:00Z"
    );
}
