//! Date handling for form inputs.
//!
//! Date-only values from `<input type="date">` are pinned to midday UTC
//! before transmission so the server-side date never shifts across
//! timezones.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

/// Normalize a `YYYY-MM-DD` input to a midday-UTC RFC 3339 timestamp.
/// Values that already carry a time component pass through unchanged.
pub fn to_midday_utc(date: &str) -> String {
    if date.contains('T') {
        date.to_owned()
    } else {
        format!("{date}T12:00:00Z")
    }
}

/// Today's date in `YYYY-MM-DD`, for date-input defaults. Browser only.
pub fn today() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso = js_sys::Date::new_0().to_iso_string();
        let iso = iso.as_string().unwrap_or_default();
        iso.split('T').next().unwrap_or_default().to_owned()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
