//! Timestamp value object.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// This timestamp moved back by `ago`, clamped to the earliest
    /// representable time.
    pub fn earlier_by(&self, ago: std::time::Duration) -> Self {
        Duration::from_std(ago)
            .ok()
            .and_then(|ago| self.0.checked_sub_signed(ago))
            .map_or(Self(DateTime::<Utc>::MIN_UTC), Self)
    }

    /// Signed duration from `earlier` to this timestamp.
    pub fn since(&self, earlier: &Timestamp) -> Duration {
        self.0.signed_duration_since(earlier.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn since_is_signed() {
        let a = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let b = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 1, 1, 0, 1, 0).unwrap());
        assert_eq!(b.since(&a), Duration::seconds(60));
        assert_eq!(a.since(&b), Duration::seconds(-60));
        assert!(a < b);
    }

    #[test]
    fn earlier_by_moves_back_and_clamps() {
        let b = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 1, 1, 0, 1, 0).unwrap());
        let a = b.earlier_by(std::time::Duration::from_secs(60));
        assert_eq!(b.since(&a), Duration::seconds(60));
        assert_eq!(
            b.earlier_by(std::time::Duration::MAX),
            Timestamp::from_datetime(DateTime::<Utc>::MIN_UTC)
        );
    }

    #[test]
    fn serializes_as_rfc3339_string() {
        let ts = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap());
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2024-05-06T07:08:09Z\"");
    }
}
