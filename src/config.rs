//! API endpoint configuration.
//!
//! The base URL is resolved at compile time, mirroring how the build
//! environment injects it:
//! - `CRAGTRACK_API_URL`: full API URL, takes precedence when set
//! - `CRAGTRACK_API_ENVIRONMENT`: environment name (dev, staging, prod)
//! - debug builds default to a local backend

/// Relative endpoint paths consumed by the domain services.
pub mod endpoints {
    pub const LOGIN: &str = "/login";
    pub const LOGOUT: &str = "/logout";
    pub const REFRESH: &str = "/refresh";
    pub const USERS: &str = "/users";
    pub const CLIMBS: &str = "/climbs";
    pub const GYMS: &str = "/gyms";
    pub const TRAINING_SESSIONS: &str = "/training-sessions";
}

/// Deployment environment name, `dev` unless overridden at build time.
pub fn environment() -> &'static str {
    option_env!("CRAGTRACK_API_ENVIRONMENT").unwrap_or("dev")
}

/// Resolve the API base URL.
///
/// An explicit `CRAGTRACK_API_URL` wins; local development falls back to
/// localhost; deployed builds derive the URL from the environment name.
pub fn base_url() -> String {
    if let Some(url) = option_env!("CRAGTRACK_API_URL") {
        return url.trim_end_matches('/').to_owned();
    }
    if cfg!(debug_assertions) {
        return "http://localhost:3000".to_owned();
    }
    format!("https://{}-api.cragtrack.io", environment())
}

/// Absolute URL for a relative endpoint path.
pub fn url(endpoint: &str) -> String {
    format!("{}{endpoint}", base_url())
}
