// ═══════════════════════════════════════════════════════════════════
// Integration Tests — PortfolioCharts facade end to end:
// timeframe → range → data-source envelope → classification → labels
// ═══════════════════════════════════════════════════════════════════

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;

use portfolio_charts_core::models::series::{Completeness, HistoryResponse, SeriesRange};
use portfolio_charts_core::models::timeframe::{Granularity, Timeframe};
use portfolio_charts_core::PortfolioCharts;

fn make_utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

/// Build a data-source envelope with daily points from `start` (inclusive),
/// echoing the requested bounds the way real sources do.
fn make_envelope(
    requested: &SeriesRange,
    actual_start: DateTime<Utc>,
    actual_end: DateTime<Utc>,
    point_count: usize,
) -> HistoryResponse {
    let points: Vec<_> = (0..point_count)
        .map(|i| {
            json!({
                "timestamp": (actual_start + Duration::days(i as i64)).to_rfc3339(),
                "close": 100.0 + i as f64,
            })
        })
        .collect();

    serde_json::from_value(json!({
        "points": points,
        "requested_start": requested.start.to_rfc3339(),
        "requested_end": requested.end.to_rfc3339(),
        "actual_start": actual_start.to_rfc3339(),
        "actual_end": actual_end.to_rfc3339(),
    }))
    .unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// One-month chart with a source that stops a day early
// ═══════════════════════════════════════════════════════════════════

#[test]
fn one_month_chart_with_short_history_is_partial() {
    let charts = PortfolioCharts::new();
    let now = make_utc(2024, 6, 15, 12, 0, 0);

    // Resolve the display range
    let range = charts.resolve_range(Timeframe::Month1, now);
    assert_eq!(range.start, make_utc(2024, 5, 15, 12, 0, 0));
    assert_eq!(range.end, now);
    assert_eq!(range.granularity, Granularity::Day);

    // The source returns 28 points spanning 2024-05-15..2024-06-14 —
    // its coverage ends one day short of the requested end
    let requested = SeriesRange::new(range.start, range.end);
    let envelope = make_envelope(
        &requested,
        make_utc(2024, 5, 15, 12, 0, 0),
        make_utc(2024, 6, 14, 12, 0, 0),
        28,
    );

    let report = charts
        .classify_response(&requested, &envelope, range.granularity)
        .unwrap();
    assert_eq!(report.classification, Completeness::Partial);
    assert_eq!(report.requested_end, requested.end);
    assert_eq!(report.actual_end, Some(make_utc(2024, 6, 14, 12, 0, 0)));
}

// ═══════════════════════════════════════════════════════════════════
// Happy path: full coverage classifies complete
// ═══════════════════════════════════════════════════════════════════

#[test]
fn one_week_chart_with_full_coverage_is_complete() {
    let charts = PortfolioCharts::new();
    let now = make_utc(2024, 6, 15, 12, 0, 0);

    let range = charts.resolve_range(Timeframe::Week1, now);
    assert_eq!(range.start, now - Duration::days(7));
    assert_eq!(range.granularity, Granularity::Hour);

    let requested = SeriesRange::new(range.start, range.end);
    let envelope = make_envelope(&requested, requested.start, requested.end, 7);

    let report = charts
        .classify_response(&requested, &envelope, range.granularity)
        .unwrap();
    assert_eq!(report.classification, Completeness::Complete);
}

// ═══════════════════════════════════════════════════════════════════
// Degraded inputs flow through without errors
// ═══════════════════════════════════════════════════════════════════

#[test]
fn stale_token_still_produces_a_chartable_range() {
    let charts = PortfolioCharts::new();
    let now = make_utc(2024, 6, 15, 12, 0, 0);

    // A token this core has never heard of degrades to the 1M policy
    let range = charts.resolve_token("3M", now);
    let one_month = charts.resolve_range(Timeframe::Month1, now);
    assert_eq!(range, one_month);
}

#[test]
fn new_listing_with_no_history_is_empty() {
    let charts = PortfolioCharts::new();
    let now = make_utc(2024, 6, 15, 12, 0, 0);
    let range = charts.resolve_range(Timeframe::Year5, now);
    let requested = SeriesRange::new(range.start, range.end);

    let envelope: HistoryResponse = serde_json::from_str(r#"{"points": []}"#).unwrap();
    let report = charts
        .classify_response(&requested, &envelope, range.granularity)
        .unwrap();
    assert_eq!(report.classification, Completeness::Empty);
    // Requested bounds still present so the frontend can advise
    assert_eq!(report.requested_start, requested.start);
    assert!(report.actual_start.is_none());
}

#[test]
fn new_listing_with_thin_history_is_sparse() {
    let charts = PortfolioCharts::new();
    let now = make_utc(2024, 6, 15, 12, 0, 0);
    let range = charts.resolve_range(Timeframe::Year1, now);
    let requested = SeriesRange::new(range.start, range.end);

    // Listed two weeks ago: 14 points of a requested year
    let envelope = make_envelope(
        &requested,
        make_utc(2024, 6, 1, 0, 0, 0),
        make_utc(2024, 6, 14, 0, 0, 0),
        14,
    );
    let report = charts
        .classify_response(&requested, &envelope, range.granularity)
        .unwrap();
    assert_eq!(report.classification, Completeness::Sparse);
}

// ═══════════════════════════════════════════════════════════════════
// Labels and magnitudes along the same flow
// ═══════════════════════════════════════════════════════════════════

#[test]
fn labels_match_the_timeframe_that_produced_the_points() {
    let charts = PortfolioCharts::new();
    let point = make_utc(2024, 6, 14, 14, 30, 0);

    assert_eq!(charts.axis_label(&point, Timeframe::Day1), "02:30 PM");
    assert_eq!(charts.axis_label(&point, Timeframe::Month1), "Jun 14");
    assert_eq!(charts.axis_label(&point, Timeframe::Year5), "Jun 14, 2024");
    assert_eq!(charts.full_label(&point), "Jun 14, 2024, 02:30 PM");

    // Epoch-millisecond form produces identical output
    let ms = point.timestamp_millis();
    assert_eq!(charts.full_label_ms(ms).unwrap(), charts.full_label(&point));
    assert_eq!(
        charts.axis_label_ms(ms, Timeframe::Day1).unwrap(),
        charts.axis_label(&point, Timeframe::Day1)
    );
}

#[test]
fn market_cap_display_alongside_chart() {
    let charts = PortfolioCharts::new();
    assert_eq!(charts.format_abbreviated(Some(2_890_000_000_000.0)), "$2.89T");
    assert_eq!(charts.format_abbreviated(Some(512_300_000.0)), "$512.30M");
    assert_eq!(charts.format_abbreviated(None), "N/A");
}

// ═══════════════════════════════════════════════════════════════════
// Facade configuration
// ═══════════════════════════════════════════════════════════════════

#[test]
fn custom_sparse_threshold_changes_classification() {
    let now = make_utc(2024, 6, 15, 12, 0, 0);
    let strict = PortfolioCharts::with_sparse_threshold(0.95);
    let range = strict.resolve_range(Timeframe::Month1, now);
    let requested = SeriesRange::new(range.start, range.end);

    // 28 of 31 days covered: partial by default policy, sparse at 95%
    let actual = SeriesRange::new(requested.start, requested.end - Duration::days(3));
    let default_report =
        PortfolioCharts::new().classify_series(&requested, Some(&actual), 28, Granularity::Day);
    assert_eq!(default_report.classification, Completeness::Partial);

    let strict_report = strict.classify_series(&requested, Some(&actual), 28, Granularity::Day);
    assert_eq!(strict_report.classification, Completeness::Sparse);
}

#[test]
fn default_trait_and_debug() {
    let charts = PortfolioCharts::default();
    let debug = format!("{charts:?}");
    assert!(debug.contains("PortfolioCharts"));
}
