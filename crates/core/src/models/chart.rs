use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::timeframe::Granularity;

/// A resolved display range: concrete `[start, end)` bounds plus the
/// sampling granularity to request from the historical-price source.
///
/// Generic over the caller's time zone — the core never reads an ambient
/// clock or zone; both arrive explicitly with `now`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeframeRange<Tz: TimeZone> {
    /// Start of the range (inclusive)
    pub start: DateTime<Tz>,

    /// End of the range (exclusive) — always the `now` the caller passed in
    pub end: DateTime<Tz>,

    /// Sampling step implied by the timeframe
    pub granularity: Granularity,
}

/// A single historical price sample, produced by the external data source.
/// Read-only to this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

/// Convert an integer epoch-millisecond value into an instant.
///
/// Out-of-range input is a hard error — never coerced to "now" or the
/// epoch, since a silently wrong instant would corrupt chart axes.
pub fn instant_from_millis(millis: i64) -> Result<DateTime<Utc>, CoreError> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or(CoreError::TimestampOutOfRange(millis))
}
