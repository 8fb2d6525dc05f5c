//! Typed domain services over the HTTP client, one per backend resource.
//!
//! Each method issues a fresh request (no retries, no caching) and
//! unwraps the backend's response envelope with the shared policy from
//! `net::envelope`.

pub mod auth;
pub mod climbs;
pub mod gyms;
pub mod training;
