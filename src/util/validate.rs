//! Client-side form validation, checked before any network call so a
//! validation failure never produces a request.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Registration password rules: confirmation must match and the password
/// must meet the minimum length. The message is the exact line shown in
/// the form banner.
pub fn validate_password(password: &str, confirmation: &str) -> Result<(), &'static str> {
    if password != confirmation {
        return Err("Passwords do not match");
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}
