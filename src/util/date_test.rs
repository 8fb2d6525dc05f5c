use super::*;

#[test]
fn date_only_input_is_pinned_to_midday_utc() {
    assert_eq!(to_midday_utc("2024-03-01"), "2024-03-01T12:00:00Z");
}

#[test]
fn timestamped_input_passes_through() {
    assert_eq!(to_midday_utc("2024-03-01T08:15:00Z"), "2024-03-01T08:15:00Z");
}

#[test]
fn empty_input_still_gets_a_time_suffix() {
    // The form never submits an empty date; this just documents the shape.
    assert_eq!(to_midday_utc(""), "T12:00:00Z");
}

#[test]
fn today_is_empty_off_browser() {
    assert_eq!(today(), "");
}
