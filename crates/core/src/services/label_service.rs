use chrono::{DateTime, TimeZone};

use crate::errors::CoreError;
use crate::models::chart::instant_from_millis;
use crate::models::timeframe::Timeframe;

/// Formats points in time into short axis/tooltip labels, chosen by the
/// timeframe that produced them.
///
/// Intraday charts label by clock time; week/month charts by month and day;
/// anything longer carries the year as well.
pub struct LabelService;

impl LabelService {
    pub fn new() -> Self {
        Self
    }

    /// Axis label for a point, appropriate to the chart's timeframe.
    ///
    /// - 1D: 12-hour clock time, e.g. "02:30 PM"
    /// - 1W / 1M: abbreviated month + day, e.g. "Jun 15"
    /// - everything longer (and the fallback): month + day + year,
    ///   e.g. "Jun 15, 2024"
    pub fn format_axis_label<Tz: TimeZone>(
        &self,
        instant: &DateTime<Tz>,
        timeframe: Timeframe,
    ) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        match timeframe {
            Timeframe::Day1 => instant.format("%I:%M %p").to_string(),
            Timeframe::Week1 | Timeframe::Month1 => instant.format("%b %-d").to_string(),
            _ => instant.format("%b %-d, %Y").to_string(),
        }
    }

    /// Full tooltip label: 4-digit year, abbreviated month, day, and
    /// 12-hour time. Midnight renders "12:00 AM", noon "12:00 PM".
    pub fn format_full<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        instant.format("%b %-d, %Y, %I:%M %p").to_string()
    }

    /// Same as [`format_axis_label`](Self::format_axis_label) for an integer
    /// epoch-millisecond value, interpreted in UTC. Produces identical output
    /// to the instant form for the same instant.
    pub fn format_axis_label_ms(
        &self,
        epoch_ms: i64,
        timeframe: Timeframe,
    ) -> Result<String, CoreError> {
        let instant = instant_from_millis(epoch_ms)?;
        Ok(self.format_axis_label(&instant, timeframe))
    }

    /// Same as [`format_full`](Self::format_full) for an integer
    /// epoch-millisecond value, interpreted in UTC.
    pub fn format_full_ms(&self, epoch_ms: i64) -> Result<String, CoreError> {
        let instant = instant_from_millis(epoch_ms)?;
        Ok(self.format_full(&instant))
    }
}

impl Default for LabelService {
    fn default() -> Self {
        Self::new()
    }
}
