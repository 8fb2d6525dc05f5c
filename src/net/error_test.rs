use super::*;

#[test]
fn transport_status_code_is_zero() {
    let err = ApiError::network();
    assert_eq!(err.status_code(), 0);
}

#[test]
fn http_status_code_passes_through() {
    let err = ApiError::Http {
        status: 404,
        message: "Not found".to_owned(),
        errors: None,
    };
    assert_eq!(err.status_code(), 404);
}

#[test]
fn network_error_message_is_user_facing() {
    let err = ApiError::network();
    assert_eq!(err.to_string(), "Network error. Please check your connection.");
}

#[test]
fn http_display_is_the_message_alone() {
    let err = ApiError::Http {
        status: 422,
        message: "Email already taken".to_owned(),
        errors: None,
    };
    assert_eq!(err.to_string(), "Email already taken");
}

#[test]
fn service_error_wraps_api_status() {
    let err = ServiceError::from(ApiError::Http {
        status: 401,
        message: "Unauthorized".to_owned(),
        errors: None,
    });
    assert_eq!(err.status_code(), Some(401));
}

#[test]
fn service_error_transport_reports_zero() {
    let err = ServiceError::from(ApiError::network());
    assert_eq!(err.status_code(), Some(0));
}

#[test]
fn payload_missing_has_no_status() {
    let err = ServiceError::PayloadMissing { resource: "user" };
    assert_eq!(err.status_code(), None);
    assert_eq!(err.to_string(), "invalid response format: missing user data");
}

#[test]
fn unavailable_stub_is_transport() {
    let err = ApiError::unavailable();
    assert_eq!(err.status_code(), 0);
    assert_eq!(err.to_string(), "not available on server");
}
