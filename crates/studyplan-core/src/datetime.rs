//! Wall-clock helpers over `DateTime<FixedOffset>`.
//!
//! All hour arithmetic happens in the instant's own offset, so "09:00" means
//! nine o'clock local to whoever supplied the start time.

use chrono::{DateTime, Duration, FixedOffset, SecondsFormat, Timelike};

/// Same calendar date as `instant`, at `hour`:00:00.000.
pub fn at_hour(instant: DateTime<FixedOffset>, hour: u32) -> DateTime<FixedOffset> {
    midnight(instant) + Duration::hours(i64::from(hour))
}

/// `instant` rounded up to the next whole hour; whole hours are returned as is.
pub fn ceil_hour(instant: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let floor = at_hour(instant, instant.hour());
    if floor == instant {
        floor
    } else {
        floor + Duration::hours(1)
    }
}

/// Start of `instant`'s calendar date.
pub fn midnight(instant: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let since_midnight = Duration::seconds(i64::from(instant.num_seconds_from_midnight()))
        + Duration::nanoseconds(i64::from(instant.nanosecond()));
    instant - since_midnight
}

/// ISO-8601 rendering with the numeric offset kept, e.g. `2024-01-01T09:00:00+00:00`.
pub fn to_iso8601(instant: &DateTime<FixedOffset>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

/// Serde adapter for timestamps on the wire.
pub mod iso8601 {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(instant: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::to_iso8601(instant))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn at_hour_drops_minutes_and_seconds() {
        let snapped = at_hour(ts("2024-03-05T16:47:12.250+02:00"), 9);
        assert_eq!(snapped, ts("2024-03-05T09:00:00+02:00"));
    }

    #[test]
    fn at_hour_keeps_offset() {
        let snapped = at_hour(ts("2024-03-05T23:30:00-05:00"), 14);
        assert_eq!(snapped.offset().local_minus_utc(), -5 * 3600);
        assert_eq!(snapped.hour(), 14);
    }

    #[test]
    fn ceil_hour_rounds_up_partial_hours() {
        assert_eq!(ceil_hour(ts("2024-01-01T15:23:00Z")), ts("2024-01-01T16:00:00Z"));
        assert_eq!(ceil_hour(ts("2024-01-01T15:00:00.001Z")), ts("2024-01-01T16:00:00Z"));
        assert_eq!(ceil_hour(ts("2024-01-01T16:00:00Z")), ts("2024-01-01T16:00:00Z"));
        assert_eq!(ceil_hour(ts("2024-01-01T23:30:00+05:30")), ts("2024-01-02T00:00:00+05:30"));
    }

    #[test]
    fn midnight_of_date() {
        assert_eq!(midnight(ts("2024-01-01T08:00:00Z")), ts("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn iso_keeps_numeric_offset() {
        assert_eq!(to_iso8601(&ts("2024-01-01T09:00:00Z")), "2024-01-01T09:00:00+00:00");
    }
}
