//! Gym service: the facility directory used by the training-session form.

#[cfg(test)]
#[path = "gyms_test.rs"]
mod gyms_test;

use crate::config::endpoints;
use crate::net::envelope::unwrap_payload;
use crate::net::error::ServiceError;
use crate::net::http;
use crate::net::types::{GetGymsResponse, Gym};

/// Fetch the full gym directory.
pub async fn get_gyms() -> Result<GetGymsResponse, ServiceError> {
    let value = http::get(endpoints::GYMS).await?;
    unwrap_payload(value, "gyms")
}

/// Fetch a single gym by id.
pub async fn get_gym(gym_id: i64) -> Result<Gym, ServiceError> {
    let value = http::get(&gym_endpoint(gym_id)).await?;
    unwrap_payload(value, "gym")
}

pub(crate) fn gym_endpoint(gym_id: i64) -> String {
    format!("{}?id={gym_id}", endpoints::GYMS)
}
