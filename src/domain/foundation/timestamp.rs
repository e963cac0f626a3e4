//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
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

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Elapsed whole seconds since another timestamp, rounded to nearest.
    ///
    /// Clamped at zero when `other` is in the future relative to self.
    pub fn secs_since(&self, other: &Timestamp) -> u64 {
        let millis = self
            .0
            .signed_duration_since(other.0)
            .num_milliseconds()
            .max(0);
        ((millis as f64) / 1000.0).round() as u64
    }

    /// Creates a timestamp from Unix seconds.
    pub fn from_unix_secs(secs: u64) -> Self {
        use chrono::TimeZone;
        Self(Utc.timestamp_opt(secs as i64, 0).unwrap())
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}
