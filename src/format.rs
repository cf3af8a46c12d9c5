//! Display helpers shared by the browser and terminal renderings.

use crate::api::UserStatus;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const UNKNOWN_DATE: &str = "Unknown";
pub const NO_BIO: &str = "No bio provided";

/// Formats a creation date as `Mar 5, 2025`.
///
/// Missing or blank input yields `Unknown`; input that does not parse as an
/// ISO-8601 date or date-time is returned unchanged.
#[must_use]
pub fn creation_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return UNKNOWN_DATE.to_string();
    };

    match parse_date(raw.trim()) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(value)
        .map(|date| date.date_naive())
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|date| date.date())
                .ok()
        })
        .or_else(|| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
}

/// Bio text, or the placeholder when absent or empty.
#[must_use]
pub fn bio(value: Option<&str>) -> &str {
    value.filter(|bio| !bio.is_empty()).unwrap_or(NO_BIO)
}

/// Color name for a status: green when online, red otherwise.
#[must_use]
pub fn status_color(status: UserStatus) -> &'static str {
    if status.is_online() { "green" } else { "red" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_date_formats_iso_inputs() {
        assert_eq!(creation_date(Some("2025-03-05")), "Mar 5, 2025");
        assert_eq!(creation_date(Some("2024-12-31T23:10:00")), "Dec 31, 2024");
        assert_eq!(
            creation_date(Some("2024-01-15T08:30:00.123456")),
            "Jan 15, 2024"
        );
        assert_eq!(creation_date(Some("2024-07-04T10:00:00Z")), "Jul 4, 2024");
        assert_eq!(
            creation_date(Some("2024-07-04T10:00:00+02:00")),
            "Jul 4, 2024"
        );
    }

    #[test]
    fn creation_date_fallbacks() {
        assert_eq!(creation_date(None), "Unknown");
        assert_eq!(creation_date(Some("")), "Unknown");
        assert_eq!(creation_date(Some("   ")), "Unknown");
        assert_eq!(creation_date(Some("yesterday")), "yesterday");
        assert_eq!(creation_date(Some("2024-13-45")), "2024-13-45");
    }

    #[test]
    fn bio_placeholder() {
        assert_eq!(bio(None), "No bio provided");
        assert_eq!(bio(Some("")), "No bio provided");
        assert_eq!(bio(Some("Hello")), "Hello");
    }

    #[test]
    fn status_colors() {
        assert_eq!(status_color(UserStatus::Online), "green");
        assert_eq!(status_color(UserStatus::Offline), "red");
    }
}
