use chrono::{DateTime, Datelike, LocalResult, Months, NaiveDate, NaiveTime, TimeZone};

use crate::models::chart::TimeframeRange;
use crate::models::timeframe::Timeframe;

/// Maps a symbolic timeframe plus an explicit "now" onto concrete
/// `[start, end)` bounds and a sampling granularity.
///
/// Pure function of `(timeframe, now)` — no side effects, never fails.
/// The caller supplies `now` in its own time zone; all calendar arithmetic
/// happens in that zone.
pub struct RangeService;

impl RangeService {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a timeframe into a concrete range. `end` always equals `now`.
    pub fn resolve<Tz: TimeZone>(
        &self,
        timeframe: Timeframe,
        now: DateTime<Tz>,
    ) -> TimeframeRange<Tz> {
        let granularity = timeframe.granularity();
        let mut start = match timeframe {
            Timeframe::Day1 => local_midnight(&now, now.date_naive()),
            Timeframe::Week1 => now.clone() - chrono::Duration::days(7),
            Timeframe::Month1 => months_back(&now, 1),
            Timeframe::Month6 => months_back(&now, 6),
            Timeframe::YearToDate => {
                let jan1 = NaiveDate::from_ymd_opt(now.year(), 1, 1).unwrap_or(NaiveDate::MIN);
                local_midnight(&now, jan1)
            }
            Timeframe::Year1 => months_back(&now, 12),
            Timeframe::Year5 => months_back(&now, 60),
            Timeframe::All => epoch_origin(&now),
        };

        // Degenerate case (e.g. 1D at exactly local midnight): back off one
        // sampling step so the range stays non-empty.
        if start >= now {
            start = now.clone() - granularity.step();
        }

        TimeframeRange {
            start,
            end: now,
            granularity,
        }
    }
}

impl Default for RangeService {
    fn default() -> Self {
        Self::new()
    }
}

/// Calendar month subtraction with end-of-month clamping: "1 month before
/// March 31" is the last valid day of February, not "February 31".
fn months_back<Tz: TimeZone>(now: &DateTime<Tz>, months: u32) -> DateTime<Tz> {
    now.clone()
        .checked_sub_months(Months::new(months))
        .unwrap_or_else(|| epoch_origin(now))
}

/// Midnight of `date` in the zone `now` carries.
/// Ambiguous wall-clock midnights (DST fall-back) take the earlier instant;
/// nonexistent ones (DST spring-forward) take the UTC reading.
fn local_midnight<Tz: TimeZone>(now: &DateTime<Tz>, date: NaiveDate) -> DateTime<Tz> {
    let naive = date.and_time(NaiveTime::MIN);
    match now.timezone().from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => now.timezone().from_utc_datetime(&naive),
    }
}

/// The Unix epoch origin (1970-01-01T00:00:00 UTC), in the caller's zone.
fn epoch_origin<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    DateTime::UNIX_EPOCH.with_timezone(&now.timezone())
}
