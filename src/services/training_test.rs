use super::*;

#[test]
fn endpoint_without_bounds_has_no_query() {
    assert_eq!(sessions_endpoint(None, None), "/training-sessions");
}

#[test]
fn endpoint_with_start_date_only() {
    assert_eq!(
        sessions_endpoint(Some("2024-01-01T00:00:00Z"), None),
        "/training-sessions?start_date=2024-01-01T00:00:00Z"
    );
}

#[test]
fn endpoint_with_end_date_only() {
    assert_eq!(
        sessions_endpoint(None, Some("2024-06-30T00:00:00Z")),
        "/training-sessions?end_date=2024-06-30T00:00:00Z"
    );
}

#[test]
fn endpoint_with_both_bounds() {
    assert_eq!(
        sessions_endpoint(Some("2024-01-01T00:00:00Z"), Some("2024-06-30T00:00:00Z")),
        "/training-sessions?start_date=2024-01-01T00:00:00Z&end_date=2024-06-30T00:00:00Z"
    );
}
