//! Climb service: logbook entries keyed by user id, with optional date
//! range filtering.

#[cfg(test)]
#[path = "climbs_test.rs"]
mod climbs_test;

use std::fmt::Write as _;

use crate::config::endpoints;
use crate::net::envelope::unwrap_payload;
use crate::net::error::ServiceError;
use crate::net::http;
use crate::net::types::{Climb, CreateClimbRequest, GetClimbsResponse};

/// Log a new climb.
pub async fn create_climb(request: &CreateClimbRequest) -> Result<Climb, ServiceError> {
    let value = http::post(endpoints::CLIMBS, request).await?;
    unwrap_payload(value, "climb")
}

/// Fetch a user's climbs, optionally bounded by RFC 3339 dates.
pub async fn get_climbs(
    user_id: i64,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<GetClimbsResponse, ServiceError> {
    let endpoint = climbs_endpoint(user_id, start_date, end_date);
    let value = http::get(&endpoint).await?;
    unwrap_payload(value, "climbs")
}

pub(crate) fn climbs_endpoint(
    user_id: i64,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> String {
    let mut endpoint = format!("{}?user_id={user_id}", endpoints::CLIMBS);
    if let Some(start) = start_date {
        let _ = write!(endpoint, "&start_date={start}");
    }
    if let Some(end) = end_date {
        let _ = write!(endpoint, "&end_date={end}");
    }
    endpoint
}
