pub mod errors;
pub mod models;
pub mod services;

use chrono::{DateTime, TimeZone};

use errors::CoreError;
use models::chart::TimeframeRange;
use models::series::{CompletenessReport, HistoryResponse, SeriesRange};
use models::timeframe::{Granularity, Timeframe};
use services::completeness_service::CompletenessService;
use services::label_service::LabelService;
use services::magnitude_service::MagnitudeService;
use services::range_service::RangeService;

/// Main entry point for the portfolio-charts core library.
///
/// Bundles the four chart computations behind one handle: timeframe range
/// resolution, axis/tooltip label formatting, series completeness
/// classification, and magnitude abbreviation. Everything is pure and
/// synchronous — the caller passes "now" explicitly, and the facade may be
/// shared across any number of concurrent rendering contexts.
#[must_use]
pub struct PortfolioCharts {
    range_service: RangeService,
    label_service: LabelService,
    completeness_service: CompletenessService,
    magnitude_service: MagnitudeService,
}

impl std::fmt::Debug for PortfolioCharts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioCharts")
            .field(
                "sparse_threshold",
                &self.completeness_service.sparse_threshold(),
            )
            .finish()
    }
}

impl PortfolioCharts {
    pub fn new() -> Self {
        Self::with_sparse_threshold(
            services::completeness_service::DEFAULT_SPARSE_THRESHOLD,
        )
    }

    /// Build a facade with a custom sparse/partial classification threshold.
    pub fn with_sparse_threshold(sparse_threshold: f64) -> Self {
        Self {
            range_service: RangeService::new(),
            label_service: LabelService::new(),
            completeness_service: CompletenessService::with_threshold(sparse_threshold),
            magnitude_service: MagnitudeService::new(),
        }
    }

    // ── Timeframe Ranges ────────────────────────────────────────────

    /// Resolve a timeframe into concrete `[start, end)` bounds plus
    /// sampling granularity. `end` always equals `now`.
    pub fn resolve_range<Tz: TimeZone>(
        &self,
        timeframe: Timeframe,
        now: DateTime<Tz>,
    ) -> TimeframeRange<Tz> {
        self.range_service.resolve(timeframe, now)
    }

    /// Resolve a raw wire token ("1D", "YTD", ...). Unrecognized tokens
    /// behave exactly like "1M".
    pub fn resolve_token<Tz: TimeZone>(
        &self,
        token: &str,
        now: DateTime<Tz>,
    ) -> TimeframeRange<Tz> {
        self.range_service.resolve(Timeframe::from_token(token), now)
    }

    // ── Labels ──────────────────────────────────────────────────────

    /// Axis label for a point, appropriate to the chart's timeframe.
    pub fn axis_label<Tz: TimeZone>(
        &self,
        instant: &DateTime<Tz>,
        timeframe: Timeframe,
    ) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.label_service.format_axis_label(instant, timeframe)
    }

    /// Full tooltip label (year + month + day + 12-hour time).
    pub fn full_label<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.label_service.format_full(instant)
    }

    /// Axis label from an integer epoch-millisecond value (UTC).
    pub fn axis_label_ms(
        &self,
        epoch_ms: i64,
        timeframe: Timeframe,
    ) -> Result<String, CoreError> {
        self.label_service.format_axis_label_ms(epoch_ms, timeframe)
    }

    /// Full tooltip label from an integer epoch-millisecond value (UTC).
    pub fn full_label_ms(&self, epoch_ms: i64) -> Result<String, CoreError> {
        self.label_service.format_full_ms(epoch_ms)
    }

    // ── Series Completeness ─────────────────────────────────────────

    /// Classify how well the data actually returned covers the request.
    pub fn classify_series(
        &self,
        requested: &SeriesRange,
        actual: Option<&SeriesRange>,
        point_count: usize,
        granularity: Granularity,
    ) -> CompletenessReport {
        self.completeness_service
            .classify(requested, actual, point_count, granularity)
    }

    /// Classify a raw data-source envelope.
    ///
    /// The envelope's echoed requested bounds take precedence; when the
    /// source omits them, `requested` (the bounds this core originally
    /// resolved) is used. Unparseable timestamps surface as
    /// [`CoreError::InvalidTimestamp`] — never silently coerced.
    pub fn classify_response(
        &self,
        requested: &SeriesRange,
        response: &HistoryResponse,
        granularity: Granularity,
    ) -> Result<CompletenessReport, CoreError> {
        let requested = response.requested_range()?.unwrap_or(*requested);
        let actual = response.actual_range()?;
        Ok(self.completeness_service.classify(
            &requested,
            actual.as_ref(),
            response.point_count(),
            granularity,
        ))
    }

    // ── Magnitudes ──────────────────────────────────────────────────

    /// Abbreviate a raw currency amount ("$1.25M"); `None` renders "N/A".
    pub fn format_abbreviated(&self, amount: Option<f64>) -> String {
        self.magnitude_service.format_abbreviated(amount)
    }
}

impl Default for PortfolioCharts {
    fn default() -> Self {
        Self::new()
    }
}
