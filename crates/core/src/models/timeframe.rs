use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Display timeframe for a chart — how far back it looks and how granular
/// its sampling is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeframe {
    /// Today, from local midnight
    Day1,
    /// Trailing 7 days
    Week1,
    /// Trailing calendar month
    Month1,
    /// Trailing six calendar months
    Month6,
    /// From January 1 of the current year
    YearToDate,
    /// Trailing calendar year
    Year1,
    /// Trailing five calendar years
    Year5,
    /// Everything since the Unix epoch
    All,
}

impl Timeframe {
    /// The timeframe an unrecognized token degrades to.
    pub const FALLBACK: Timeframe = Timeframe::Month1;

    /// Parse a wire token ("1D", "1W", "1M", "6M", "YTD", "1Y", "5Y", "ALL").
    ///
    /// Unrecognized tokens fall back to [`Timeframe::FALLBACK`] instead of
    /// failing, so a stale or future-added token degrades gracefully rather
    /// than crashing a chart. Matching is ASCII case-insensitive.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        if token.eq_ignore_ascii_case("1D") {
            Timeframe::Day1
        } else if token.eq_ignore_ascii_case("1W") {
            Timeframe::Week1
        } else if token.eq_ignore_ascii_case("1M") {
            Timeframe::Month1
        } else if token.eq_ignore_ascii_case("6M") {
            Timeframe::Month6
        } else if token.eq_ignore_ascii_case("YTD") {
            Timeframe::YearToDate
        } else if token.eq_ignore_ascii_case("1Y") {
            Timeframe::Year1
        } else if token.eq_ignore_ascii_case("5Y") {
            Timeframe::Year5
        } else if token.eq_ignore_ascii_case("ALL") {
            Timeframe::All
        } else {
            Timeframe::FALLBACK
        }
    }

    /// The sampling step implied by this timeframe.
    pub fn granularity(&self) -> Granularity {
        match self {
            Timeframe::Day1 => Granularity::Minute,
            Timeframe::Week1 => Granularity::Hour,
            _ => Granularity::Day,
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            Timeframe::Day1 => "1D",
            Timeframe::Week1 => "1W",
            Timeframe::Month1 => "1M",
            Timeframe::Month6 => "6M",
            Timeframe::YearToDate => "YTD",
            Timeframe::Year1 => "1Y",
            Timeframe::Year5 => "5Y",
            Timeframe::All => "ALL",
        };
        write!(f, "{token}")
    }
}

/// Sampling step for a chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Minute,
    Hour,
    Day,
}

impl Granularity {
    /// The duration of one sampling step.
    pub fn step(&self) -> Duration {
        match self {
            Granularity::Minute => Duration::minutes(1),
            Granularity::Hour => Duration::hours(1),
            Granularity::Day => Duration::days(1),
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Granularity::Minute => write!(f, "minute"),
            Granularity::Hour => write!(f, "hour"),
            Granularity::Day => write!(f, "day"),
        }
    }
}
