//! Percentage change between two adjacent windows

use super::AnalyticsError;

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Signed percent change of `mean(recent)` relative to `mean(previous)`.
///
/// Positive means growth. Empty windows, a zero previous average and
/// averages or rates that overflow are reported as errors instead of
/// non-finite numbers.
pub fn growth_rate(recent: &[f64], previous: &[f64]) -> Result<f64, AnalyticsError> {
    let recent_avg = mean(recent).ok_or(AnalyticsError::EmptyWindow("recent"))?;
    let previous_avg = mean(previous).ok_or(AnalyticsError::EmptyWindow("previous"))?;

    if !recent_avg.is_finite() {
        return Err(AnalyticsError::NonFinite("recent average"));
    }
    if !previous_avg.is_finite() {
        return Err(AnalyticsError::NonFinite("previous average"));
    }
    if previous_avg == 0.0 {
        return Err(AnalyticsError::ZeroBaseline);
    }

    let rate = (recent_avg - previous_avg) / previous_avg * 100.0;
    if !rate.is_finite() {
        return Err(AnalyticsError::NonFinite("growth rate"));
    }
    Ok(rate)
}
