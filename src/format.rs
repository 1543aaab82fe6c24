//! Date/time wire formatting
//!
//! The API expects UTC timestamps with a literal `Z` suffix and plain ISO
//! dates. The formatting functions here are stateless and therefore safe to
//! call concurrently from multiple filter encoders.

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Wire format for full timestamps: `yyyy-MM-ddTHH:mm:ssZ`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Wire format for date-only values: `yyyy-MM-dd`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a UTC timestamp for the query string (literal `Z`, not a numeric offset)
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Format a date-only value for the query string
pub fn format_date(value: NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

/// Parse a wire-format UTC timestamp
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| Error::invalid_argument(format!("invalid timestamp '{value}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2014, 4, 30, 21, 32, 21).unwrap();
        assert_eq!(format_timestamp(&ts), "2014-04-30T21:32:21Z");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2014, 4, 30).unwrap();
        assert_eq!(format_date(date), "2014-04-30");
    }

    #[test]
    fn test_parse_timestamp_round_trip() {
        let parsed = parse_timestamp("2014-04-30T21:32:21Z").unwrap();
        assert_eq!(format_timestamp(&parsed), "2014-04-30T21:32:21Z");
    }

    #[test]
    fn test_parse_timestamp_rejects_offset() {
        assert!(parse_timestamp("2014-04-30T21:32:21+00:00").is_err());
        assert!(parse_timestamp("not-a-timestamp").is_err());
    }
}
