//! Numeric helpers shared by the profiler, the rule evaluator and the scanner.

/// Rounds half away from zero to `places` decimal places.
///
/// Values too large to scale are returned unchanged.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let sum = values.iter().sum::<f64>();
    if sum.is_finite() {
        Some(sum / n)
    } else {
        // The running sum overflowed; divide first.
        Some(values.iter().map(|v| v / n).sum())
    }
}

/// Sample standard deviation (n − 1 denominator); `None` below two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;

    // Deviations are scaled by the largest one so squaring cannot overflow.
    let scale = values.iter().map(|v| (v - mean).abs()).fold(0.0, f64::max);
    if scale == 0.0 || !scale.is_finite() {
        return Some(scale);
    }
    let variance = values
        .iter()
        .map(|v| ((v - mean) / scale).powi(2))
        .sum::<f64>()
        / (values.len() - 1) as f64;
    Some(scale * variance.sqrt())
}

/// Formats a ratio as a percentage with two decimals, e.g. `0.25` → `25.00%`.
pub fn percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}
