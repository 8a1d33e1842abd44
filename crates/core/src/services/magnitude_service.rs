/// Renders large currency magnitudes into abbreviated display strings
/// ("$1.25M", "$3.40B"). Missing values render "N/A" rather than failing.
pub struct MagnitudeService;

impl MagnitudeService {
    pub fn new() -> Self {
        Self
    }

    /// Abbreviate a raw currency amount with a K/M/B/T suffix.
    ///
    /// Tier thresholds are evaluated on the raw amount *before* division, so
    /// a value that rounds to 1000.00 after division stays in its tier:
    /// 999,999,999,999 formats as "$1000.00B", not "$1.00T". Negative
    /// amounts mirror the sign ("-$1.50K"); `None` and non-finite values
    /// format as "N/A".
    pub fn format_abbreviated(&self, amount: Option<f64>) -> String {
        let amount = match amount {
            Some(a) if a.is_finite() => a,
            _ => return "N/A".to_string(),
        };

        let sign = if amount < 0.0 { "-" } else { "" };
        let magnitude = amount.abs();

        let (scaled, suffix) = if magnitude >= 1e12 {
            (magnitude / 1e12, "T")
        } else if magnitude >= 1e9 {
            (magnitude / 1e9, "B")
        } else if magnitude >= 1e6 {
            (magnitude / 1e6, "M")
        } else if magnitude >= 1e3 {
            (magnitude / 1e3, "K")
        } else {
            (magnitude, "")
        };

        format!("{sign}${:.2}{suffix}", round_half_up(scaled))
    }
}

impl Default for MagnitudeService {
    fn default() -> Self {
        Self::new()
    }
}

/// Half-up rounding to 2 decimals. `f64::round` rounds ties away from
/// zero, which is half-up for the non-negative scaled values used here.
fn round_half_up(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
