//! Network layer: the HTTP client, normalized errors, envelope unwrapping,
//! and the wire types shared with the backend.
//!
//! DESIGN
//! ======
//! Every failure crossing this layer is one of two closed error types:
//! `ApiError` (transport or HTTP failure, produced only by `http`) and
//! `ServiceError` (adds the payload-missing case raised while unwrapping
//! the backend's response envelope). Nothing above this layer inspects
//! response shapes.

pub mod envelope;
pub mod error;
pub mod http;
pub mod types;
