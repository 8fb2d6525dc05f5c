//! Derived dashboard statistics over the climb list. All single-pass; the
//! server owns anything heavier.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use std::collections::HashSet;

use crate::net::types::Climb;

/// Climbs marked completed (sends).
pub fn completed_count(climbs: &[Climb]) -> usize {
    climbs.iter().filter(|c| c.completed).count()
}

/// Distinct calendar days with at least one logged climb. Dates are
/// compared by their day component, so several climbs on one day count
/// once.
pub fn unique_active_days(climbs: &[Climb]) -> usize {
    climbs
        .iter()
        .map(|c| day_of(&c.climb_date))
        .collect::<HashSet<_>>()
        .len()
}

/// The `YYYY-MM-DD` prefix of an RFC 3339 timestamp.
fn day_of(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
