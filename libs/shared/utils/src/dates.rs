use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use tracing::debug;

pub const INVALID_DATE: &str = "Invalid Date";

/// Today's local date in the `YYYY-MM-DD` form the date picker produces.
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Renders a `bookedDate` value as `Www Mmm DD YYYY`, e.g. `Mon Jan 01 2024`.
///
/// Accepts RFC 3339 timestamps (shown on the local calendar), naive
/// date-times and plain dates. Anything else renders as `Invalid Date`.
pub fn format_booked_date(raw: &str) -> String {
    match parse_date(raw.trim()) {
        Some(date) => date.format("%a %b %d %Y").to_string(),
        None => {
            debug!("Unparsable booking date: {:?}", raw);
            INVALID_DATE.to_string()
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Local).date_naive());
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(ts.date());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain_date() {
        assert_eq!(format_booked_date("2024-01-01"), "Mon Jan 01 2024");
    }

    #[test]
    fn test_format_timestamps() {
        assert_eq!(format_booked_date("2024-03-15T12:00:00.000Z"), "Fri Mar 15 2024");
        assert_eq!(format_booked_date("2024-03-15T09:30:00"), "Fri Mar 15 2024");
        assert_eq!(format_booked_date("2024-03-15 09:30:00"), "Fri Mar 15 2024");
    }

    #[test]
    fn test_offset_timestamp_uses_local_calendar() {
        let raw = "2024-03-15T23:30:00.000Z";
        let local = DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Local);

        assert_eq!(format_booked_date(raw), local.format("%a %b %d %Y").to_string());
    }

    #[test]
    fn test_format_garbage() {
        assert_eq!(format_booked_date("next tuesday"), INVALID_DATE);
        assert_eq!(format_booked_date(""), INVALID_DATE);
    }

    #[test]
    fn test_today_shape() {
        let value = today();
        assert_eq!(value.len(), 10);
        assert!(NaiveDate::parse_from_str(&value, "%Y-%m-%d").is_ok());
    }
}
