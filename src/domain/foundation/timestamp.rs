//! Timestamp value object for immutable points in time.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Creates a timestamp at midnight UTC of the given calendar day.
    ///
    /// Returns `None` for dates that do not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        Some(Self(date.and_hms_opt(0, 0, 0)?.and_utc()))
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// RFC 3339 rendering used by the HTTP layer.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_from_ymd_builds_midnight() {
        let ts = Timestamp::from_ymd(1981, 10, 28).unwrap();
        assert_eq!(ts.as_datetime().year(), 1981);
        assert_eq!(ts.as_datetime().month(), 10);
        assert_eq!(ts.as_datetime().day(), 28);
        assert_eq!(ts.to_rfc3339(), "1981-10-28T00:00:00+00:00");
    }

    #[test]
    fn timestamp_from_ymd_rejects_impossible_date() {
        assert!(Timestamp::from_ymd(2024, 2, 30).is_none());
    }

    #[test]
    fn timestamp_deserializes_from_json() {
        let json = "\"2016-08-01T00:00:00Z\"";
        let ts: Timestamp = serde_json::from_str(json).unwrap();
        assert_eq!(ts, Timestamp::from_ymd(2016, 8, 1).unwrap());
    }

    #[test]
    fn timestamp_ordering_works() {
        let earlier = Timestamp::from_ymd(2016, 8, 1).unwrap();
        let later = Timestamp::from_ymd(2016, 8, 2).unwrap();
        assert!(earlier.is_before(&later));
        assert!(earlier < later);
    }
}
