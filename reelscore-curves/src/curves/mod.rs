// reelscore-curves/src/curves/mod.rs
use libm::exp;

/// A response curve defined by `(x, y)` knots with linear interpolation between them.
///
/// Knots must be sorted by ascending `x`. Inputs before the first knot take the
/// first knot's `y`, inputs past the last knot take the last knot's `y`.
#[derive(Debug, Clone, Copy)]
pub struct Piecewise<'a> {
    knots: &'a [(f64, f64)],
}

impl<'a> Piecewise<'a> {
    pub const fn new(knots: &'a [(f64, f64)]) -> Self {
        Self { knots }
    }

    /// Evaluates the curve at `x`. An empty curve evaluates to 0.
    pub fn eval(&self, x: f64) -> f64 {
        let Some(&(first_x, first_y)) = self.knots.first() else {
            return 0.0;
        };
        if x <= first_x {
            return first_y;
        }

        for pair in self.knots.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            if x <= x1 {
                let span = x1 - x0;
                if span <= 0.0 {
                    return y1;
                }
                return y0 + (y1 - y0) * ((x - x0) / span);
            }
        }

        // Past the last knot
        self.knots[self.knots.len() - 1].1
    }
}

/// Exponential saturation: 0 at `x = 0`, approaching 1 as `x` grows.
///
/// `scale` is the value of `x` at which roughly 63% of the ceiling is reached.
/// Negative inputs and non-positive scales yield 0.
pub fn saturate(x: f64, scale: f64) -> f64 {
    if x <= 0.0 || scale <= 0.0 {
        return 0.0;
    }
    1.0 - exp(-x / scale)
}

/// Saturating response mapped onto a 0-100 scale.
pub fn saturate_score(x: f64, scale: f64) -> f64 {
    saturate(x, scale) * crate::SCORE_MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;
    const BAND: Piecewise<'static> = Piecewise::new(&[(0.0, 40.0), (3.0, 100.0), (5.0, 100.0), (8.0, 70.0)]);

    #[test]
    fn test_piecewise_interpolates_between_knots() {
        assert!((BAND.eval(1.5) - 70.0).abs() < EPSILON);
        assert!((BAND.eval(6.5) - 85.0).abs() < EPSILON);
    }

    #[test]
    fn test_piecewise_plateau_and_ends() {
        assert_eq!(BAND.eval(4.0), 100.0);
        assert_eq!(BAND.eval(-2.0), 40.0);
        assert_eq!(BAND.eval(50.0), 70.0);
    }

    #[test]
    fn test_piecewise_empty() {
        assert_eq!(Piecewise::new(&[]).eval(3.0), 0.0);
    }

    #[test]
    fn test_saturate_bounds() {
        assert_eq!(saturate(0.0, 1.0), 0.0);
        assert_eq!(saturate(-4.0, 1.0), 0.0);
        assert_eq!(saturate(3.0, 0.0), 0.0);
        assert!(saturate(1000.0, 1.0) <= 1.0);
        assert!((saturate(1.0, 1.0) - 0.632_120_558_8).abs() < 1e-9);
    }

    #[test]
    fn test_saturate_score_is_monotonic() {
        let low = saturate_score(0.02, 0.05);
        let high = saturate_score(0.12, 0.05);
        assert!(high > low);
        assert!(high > 90.0 && high < 100.0);
    }
}
