use super::*;
use time::macros::datetime;

// =============================================================
// parse_datetime_local
// =============================================================

#[test]
fn parses_minutes_precision() {
    let dt = parse_datetime_local("2024-01-01T10:00").unwrap();
    assert_eq!(dt, datetime!(2024-01-01 10:00));
}

#[test]
fn parses_seconds_precision() {
    let dt = parse_datetime_local("2024-01-01T10:00:30").unwrap();
    assert_eq!(dt, datetime!(2024-01-01 10:00:30));
}

#[test]
fn rejects_garbage() {
    assert!(parse_datetime_local("").is_none());
    assert!(parse_datetime_local("not a date").is_none());
    assert!(parse_datetime_local("2024-13-01T10:00").is_none());
}

// =============================================================
// to_rfc3339
// =============================================================

#[test]
fn normalizes_to_canonical_wire_string() {
    let dt = parse_datetime_local("2024-01-01T10:00").unwrap();
    assert_eq!(to_rfc3339(dt).unwrap(), "2024-01-01T10:00:00Z");
}

// =============================================================
// format_table_date
// =============================================================

#[test]
fn formats_for_the_table() {
    assert_eq!(format_table_date("2024-01-01T10:00:00Z"), "01/01/2024 10:00");
}

#[test]
fn falls_back_to_raw_string_on_bad_input() {
    assert_eq!(format_table_date("whenever"), "whenever");
}
