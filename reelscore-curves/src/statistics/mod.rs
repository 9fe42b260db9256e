// reelscore-curves/src/statistics/mod.rs

/// Location and spread of a score distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution {
    /// The arithmetic mean of the distribution.
    pub mean: f64,
    /// The standard deviation of the distribution.
    pub std_dev: f64,
}

impl Distribution {
    pub const fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    /// Standard score of `value` relative to this distribution.
    ///
    /// Returns `None` when the spread is not strictly positive.
    pub fn z_score(&self, value: f64) -> Option<f64> {
        if self.std_dev > 0.0 && self.std_dev.is_finite() {
            Some((value - self.mean) / self.std_dev)
        } else {
            None
        }
    }
}

/// Maps `value` from the `source` distribution onto the `target` distribution with a
/// fixed linear transform: `target.mean + z * target.std_dev`.
///
/// This is not a fit against observed data. Returns `None` when `source` has no spread.
pub fn rescale(value: f64, source: &Distribution, target: &Distribution) -> Option<f64> {
    source
        .z_score(value)
        .map(|z| target.mean + z * target.std_dev)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;
    const SOURCE: Distribution = Distribution::new(60.0, 15.0);
    const TARGET: Distribution = Distribution::new(70.0, 10.0);

    #[test]
    fn test_rescale_maps_means() {
        let mapped = rescale(60.0, &SOURCE, &TARGET).unwrap();
        assert!((mapped - 70.0).abs() < EPSILON);
    }

    #[test]
    fn test_rescale_one_std_above() {
        let mapped = rescale(75.0, &SOURCE, &TARGET).unwrap();
        assert!((mapped - 80.0).abs() < EPSILON);
    }

    #[test]
    fn test_rescale_rejects_zero_spread() {
        let flat = Distribution::new(60.0, 0.0);
        assert!(rescale(50.0, &flat, &TARGET).is_none());
    }
}
