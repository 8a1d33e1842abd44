use thiserror::Error;

/// Unified error type for the portfolio-charts-core library.
///
/// Almost everything in this crate is infallible by design: unrecognized
/// timeframe tokens fall back, missing price data classifies as `Empty`,
/// and absent magnitudes format to "N/A". The one boundary that must fail
/// loudly is timestamp input from the historical-data collaborator —
/// silently coercing a bad timestamp to "now" or the epoch would corrupt
/// chart axes.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Unparseable timestamp in '{field}': {value}")]
    InvalidTimestamp { field: String, value: String },

    #[error("Epoch-millisecond value out of representable range: {0}")]
    TimestampOutOfRange(i64),
}
