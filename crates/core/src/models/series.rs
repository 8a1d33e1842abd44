use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::chart::PricePoint;

/// The UTC bounds of a time series — either the range we asked the data
/// source for, or the range its returned points actually cover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl SeriesRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Length of the range. Negative if the bounds are inverted.
    pub fn span(&self) -> Duration {
        self.end - self.start
    }
}

/// How well the data actually returned matches what was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Completeness {
    /// Actual range covers the requested range (within sampling tolerance)
    Complete,
    /// Actual range exists but starts later or ends earlier than requested
    Partial,
    /// Actual span is far shorter than requested — insufficient history
    /// exists, but what exists is correct; a remedial refresh may help
    Sparse,
    /// No points came back at all
    Empty,
}

impl std::fmt::Display for Completeness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Completeness::Complete => write!(f, "complete"),
            Completeness::Partial => write!(f, "partial"),
            Completeness::Sparse => write!(f, "sparse"),
            Completeness::Empty => write!(f, "empty"),
        }
    }
}

/// Outcome of comparing a requested range against the range the returned
/// points actually cover.
///
/// Computed fresh per fetch — never mutated, always replaced. Carries both
/// sets of bounds so the frontend can render a gap advisory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletenessReport {
    pub requested_start: DateTime<Utc>,
    pub requested_end: DateTime<Utc>,

    /// Absent when the source returned no usable range
    pub actual_start: Option<DateTime<Utc>>,
    pub actual_end: Option<DateTime<Utc>>,

    pub classification: Completeness,
}

/// Wire envelope from the historical-price data source: the sampled points
/// plus four optional ISO-8601 timestamps echoing the requested bounds and
/// reporting the bounds actually covered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub points: Vec<PricePoint>,

    pub requested_start: Option<String>,
    pub requested_end: Option<String>,
    pub actual_start: Option<String>,
    pub actual_end: Option<String>,
}

impl HistoryResponse {
    /// Number of points the source returned.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Parse the echoed requested bounds. `Ok(None)` if either is absent.
    pub fn requested_range(&self) -> Result<Option<SeriesRange>, CoreError> {
        parse_range(
            "requested_start",
            self.requested_start.as_deref(),
            "requested_end",
            self.requested_end.as_deref(),
        )
    }

    /// Parse the bounds the returned points actually cover.
    /// `Ok(None)` if either is absent (the source had nothing).
    pub fn actual_range(&self) -> Result<Option<SeriesRange>, CoreError> {
        parse_range(
            "actual_start",
            self.actual_start.as_deref(),
            "actual_end",
            self.actual_end.as_deref(),
        )
    }
}

fn parse_range(
    start_field: &str,
    start: Option<&str>,
    end_field: &str,
    end: Option<&str>,
) -> Result<Option<SeriesRange>, CoreError> {
    let (start, end) = match (start, end) {
        (Some(s), Some(e)) => (s, e),
        _ => return Ok(None),
    };
    Ok(Some(SeriesRange::new(
        parse_timestamp(start_field, start)?,
        parse_timestamp(end_field, end)?,
    )))
}

/// Parse one ISO-8601 timestamp from the data-source collaborator.
/// A bad value surfaces as a distinct error rather than being silently
/// coerced — a wrong instant would corrupt chart axes.
pub fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>, CoreError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| CoreError::InvalidTimestamp {
            field: field.to_string(),
            value: value.to_string(),
        })
}
