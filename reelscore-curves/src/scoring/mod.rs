// reelscore-curves/src/scoring/mod.rs

/// Weighted mean over the signals that are actually present.
///
/// Each entry is `(value, weight)`. Absent values drop out and the remaining
/// weights are rescaled, so a partially observed group degrades gracefully
/// instead of being dragged toward zero. Returns `None` when nothing is present
/// or the present weights sum to zero.
pub fn weighted_mean(signals: &[(Option<f64>, f64)]) -> Option<f64> {
    let mut total = 0.0;
    let mut weight_sum = 0.0;

    for (value, weight) in signals {
        if let Some(v) = value {
            total += v * weight;
            weight_sum += weight;
        }
    }

    if weight_sum > 0.0 {
        Some(total / weight_sum)
    } else {
        None
    }
}

/// Unweighted mean over present values.
pub fn mean_present(values: &[Option<f64>]) -> Option<f64> {
    let (sum, count) = values
        .iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Combines two optional formulations of the same quantity.
///
/// Both present: `primary_weight * primary + (1 - primary_weight) * secondary`.
/// One present: that one directly. Neither: `None`.
pub fn blend(primary: Option<f64>, secondary: Option<f64>, primary_weight: f64) -> Option<f64> {
    match (primary, secondary) {
        (Some(p), Some(s)) => Some(primary_weight * p + (1.0 - primary_weight) * s),
        (Some(p), None) => Some(p),
        (None, Some(s)) => Some(s),
        (None, None) => None,
    }
}
