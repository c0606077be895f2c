//! ISO-8601 timestamp formatting shared by envelopes and fixtures.

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats `at` as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
#[must_use]
pub fn iso8601(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current time formatted with [`iso8601`].
#[must_use]
pub fn now_iso8601() -> String {
    iso8601(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn millisecond_precision_with_z_suffix() {
        let at = Utc.with_ymd_and_hms(2024, 12, 1, 10, 0, 0).single();
        assert_eq!(at.map(iso8601).as_deref(), Some("2024-12-01T10:00:00.000Z"));
    }

    #[test]
    fn now_round_trips() {
        assert!(DateTime::parse_from_rfc3339(&now_iso8601()).is_ok());
    }
}
