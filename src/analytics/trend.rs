//! Least-squares trend line over a short series

/// Slope of the ordinary least-squares line through `(index, value)` pairs.
///
/// Fewer than two samples give a flat trend (`0.0`).
pub fn estimate_trend(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let n = values.len() as f64;
    let sum_x = n * (n - 1.0) / 2.0;
    let sum_y: f64 = values.iter().sum();
    let sum_xy: f64 = values
        .iter()
        .enumerate()
        .map(|(i, v)| i as f64 * v)
        .sum();
    let sum_xx = n * (n - 1.0) * (2.0 * n - 1.0) / 6.0;

    // Positive for every n >= 2 with integer abscissae.
    let denominator = n * sum_xx - sum_x * sum_x;

    (n * sum_xy - sum_x * sum_y) / denominator
}

/// Project the series `horizon_days` ahead.
///
/// Uses the mean of the last `window_size` samples as the base and the trend of
/// that same window as the daily slope. When `clamp` is given the projection is
/// bounded to `[min, max]`. An empty series projects to `0.0` before clamping.
///
/// Bounded metrics that should not move a full slope unit per day pass a scaled
/// horizon, e.g. `days / 30.0` for a 1-5 rating.
pub fn predict(
    series: &[f64],
    horizon_days: f64,
    window_size: usize,
    clamp: Option<(f64, f64)>,
) -> f64 {
    let start = series.len().saturating_sub(window_size.max(1));
    let window = &series[start..];

    let current_average = if window.is_empty() {
        0.0
    } else {
        window.iter().sum::<f64>() / window.len() as f64
    };

    let projected = current_average + estimate_trend(window) * horizon_days;

    match clamp {
        Some((min, max)) => projected.max(min).min(max),
        None => projected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_series_is_flat() {
        assert_eq!(estimate_trend(&[]), 0.0);
        assert_eq!(estimate_trend(&[42.0]), 0.0);
    }

    #[test]
    fn test_linear_series() {
        assert_eq!(estimate_trend(&[0.0, 2.0, 4.0, 6.0, 8.0]), 2.0);
        assert!((estimate_trend(&[10.0, 7.0, 4.0]) + 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_series() {
        assert_eq!(estimate_trend(&[5.0, 5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_two_points() {
        assert_eq!(estimate_trend(&[3.0, 8.0]), 5.0);
    }

    #[test]
    fn test_predict_uses_recent_window() {
        // Only the last three samples (10, 12, 14) matter: mean 12, slope 2.
        let series = [100.0, 0.0, 10.0, 12.0, 14.0];
        assert_eq!(predict(&series, 7.0, 3, None), 26.0);
    }

    #[test]
    fn test_predict_clamps_bounded_metric() {
        let ratings = [4.0, 4.5, 5.0, 5.5];
        let scaled = predict(&ratings, 30.0 / 30.0, 7, Some((1.0, 5.0)));
        assert_eq!(scaled, 5.0);

        let falling = [2.0, 1.5, 1.0];
        assert_eq!(predict(&falling, 30.0, 7, Some((1.0, 5.0))), 1.0);
    }

    #[test]
    fn test_predict_flat_for_single_sample() {
        assert_eq!(predict(&[640.0], 30.0, 7, None), 640.0);
        assert_eq!(predict(&[], 30.0, 7, None), 0.0);
    }

    #[test]
    fn test_zero_window_treated_as_one() {
        assert_eq!(predict(&[1.0, 9.0], 5.0, 0, None), 9.0);
    }
}
