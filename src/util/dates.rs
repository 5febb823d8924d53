//! Date and time handling for voyage schedules.
//!
//! Three representations flow through the app:
//! - `datetime-local` input values (`2024-01-01T10:00`, optional seconds),
//!   what the form's departure/arrival fields hold while editing;
//! - RFC 3339 strings (`2024-01-01T10:00:00Z`), the canonical wire format
//!   sent to and received from the backend;
//! - the fixed table display format, `DD/MM/YYYY HH:mm`, applied uniformly
//!   to departure and arrival in the list view.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Parse a `datetime-local` input value. Browsers emit minutes precision by
/// default but may include seconds, so both forms are accepted.
pub fn parse_datetime_local(value: &str) -> Option<PrimitiveDateTime> {
    let with_seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let minutes_only = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    PrimitiveDateTime::parse(value, with_seconds)
        .or_else(|_| PrimitiveDateTime::parse(value, minutes_only))
        .ok()
}

/// Normalize a parsed local datetime to the canonical RFC 3339 wire string.
pub fn to_rfc3339(datetime: PrimitiveDateTime) -> Option<String> {
    datetime.assume_utc().format(&Rfc3339).ok()
}

/// Format a backend RFC 3339 timestamp for the voyage table.
///
/// Falls back to the raw string when the backend sends something
/// unparseable, so a bad row degrades instead of breaking the table.
pub fn format_table_date(rfc3339: &str) -> String {
    let table_format = format_description!("[day]/[month]/[year] [hour]:[minute]");
    OffsetDateTime::parse(rfc3339, &Rfc3339)
        .ok()
        .and_then(|dt| dt.format(table_format).ok())
        .unwrap_or_else(|| rfc3339.to_owned())
}
