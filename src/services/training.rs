//! Training session service. Sessions belong to the cookie-authenticated
//! user, so no user id travels in the query.

#[cfg(test)]
#[path = "training_test.rs"]
mod training_test;

use crate::config::endpoints;
use crate::net::envelope::unwrap_payload;
use crate::net::error::ServiceError;
use crate::net::http;
use crate::net::types::{
    CreateTrainingSessionRequest, GetTrainingSessionsResponse, TrainingSession,
};

/// Log a training session, with its nested boulders and rope climbs.
pub async fn create_training_session(
    request: &CreateTrainingSessionRequest,
) -> Result<TrainingSession, ServiceError> {
    let value = http::post(endpoints::TRAINING_SESSIONS, request).await?;
    unwrap_payload(value, "training_session")
}

/// Fetch the user's training sessions, optionally bounded by RFC 3339
/// dates.
pub async fn get_training_sessions(
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<GetTrainingSessionsResponse, ServiceError> {
    let endpoint = sessions_endpoint(start_date, end_date);
    let value = http::get(&endpoint).await?;
    unwrap_payload(value, "training_sessions")
}

pub(crate) fn sessions_endpoint(start_date: Option<&str>, end_date: Option<&str>) -> String {
    let mut params = Vec::new();
    if let Some(start) = start_date {
        params.push(format!("start_date={start}"));
    }
    if let Some(end) = end_date {
        params.push(format!("end_date={end}"));
    }
    if params.is_empty() {
        endpoints::TRAINING_SESSIONS.to_owned()
    } else {
        format!("{}?{}", endpoints::TRAINING_SESSIONS, params.join("&"))
    }
}
