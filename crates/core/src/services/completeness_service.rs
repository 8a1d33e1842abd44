use crate::models::series::{Completeness, CompletenessReport, SeriesRange};
use crate::models::timeframe::Granularity;

/// Fraction of the requested span that must be covered before a short
/// series degrades from `Partial` to `Sparse`. Policy knob, not an
/// invariant — override with [`CompletenessService::with_threshold`].
pub const DEFAULT_SPARSE_THRESHOLD: f64 = 0.5;

/// Compares the range a chart requested against the range the returned
/// points actually cover and classifies the result.
///
/// Missing or partial financial time series are a normal condition (new
/// listings, weekends, holidays), not an error — this service never raises
/// and never mutates its inputs.
pub struct CompletenessService {
    sparse_threshold: f64,
}

impl CompletenessService {
    pub fn new() -> Self {
        Self {
            sparse_threshold: DEFAULT_SPARSE_THRESHOLD,
        }
    }

    /// Override the sparse/partial threshold. Values are clamped to `0..=1`.
    pub fn with_threshold(sparse_threshold: f64) -> Self {
        Self {
            sparse_threshold: sparse_threshold.clamp(0.0, 1.0),
        }
    }

    pub fn sparse_threshold(&self) -> f64 {
        self.sparse_threshold
    }

    /// Classify how well `actual` covers `requested`.
    ///
    /// Coverage is checked with a tolerance of half a sampling step, so
    /// points rounded to step boundaries still count as complete — but a
    /// series ending a full step early does not.
    pub fn classify(
        &self,
        requested: &SeriesRange,
        actual: Option<&SeriesRange>,
        point_count: usize,
        granularity: Granularity,
    ) -> CompletenessReport {
        let covered = actual.filter(|_| point_count > 0);

        let classification = match covered {
            None => Completeness::Empty,
            Some(actual) => {
                let tolerance = granularity.step() / 2;
                let covers_start = actual.start <= requested.start + tolerance;
                let covers_end = actual.end >= requested.end - tolerance;
                if covers_start && covers_end {
                    Completeness::Complete
                } else if self.is_sparse(requested, actual) {
                    Completeness::Sparse
                } else {
                    Completeness::Partial
                }
            }
        };

        CompletenessReport {
            requested_start: requested.start,
            requested_end: requested.end,
            actual_start: covered.map(|a| a.start),
            actual_end: covered.map(|a| a.end),
            classification,
        }
    }

    fn is_sparse(&self, requested: &SeriesRange, actual: &SeriesRange) -> bool {
        let requested_secs = requested.span().num_seconds();
        if requested_secs <= 0 {
            return false;
        }
        let actual_secs = actual.span().num_seconds().max(0);
        (actual_secs as f64) < (requested_secs as f64) * self.sparse_threshold
    }
}

impl Default for CompletenessService {
    fn default() -> Self {
        Self::new()
    }
}
