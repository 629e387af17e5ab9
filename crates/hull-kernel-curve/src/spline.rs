//! Interpolating cubic splines in second-derivative (moment) form.

use hull_kernel_math::solve_dense;
use nalgebra::{DMatrix, DVector};

use crate::CurveError;

/// End condition of a cubic spline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    /// Zero second derivative at both ends.
    Natural,
    /// Value, slope and curvature wrap from the last knot to the first.
    Periodic,
}

/// An interpolating cubic spline `y(x)` through strictly increasing knots.
///
/// Stored as knot values plus second derivatives `m` at each knot. Outside
/// the knot range a natural spline continues its end polynomials; a periodic
/// spline wraps the argument into its period.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    m: Vec<f64>,
    boundary: Boundary,
}

impl CubicSpline {
    /// Fit a natural cubic spline (zero curvature at both ends).
    ///
    /// Two knots give a straight line.
    pub fn natural(xs: &[f64], ys: &[f64]) -> Result<Self, CurveError> {
        check_samples(xs, ys, 2)?;
        let n = xs.len() - 1;
        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();

        let mut a = DMatrix::<f64>::zeros(n + 1, n + 1);
        let mut rhs = DVector::<f64>::zeros(n + 1);
        a[(0, 0)] = 1.0;
        a[(n, n)] = 1.0;
        for i in 1..n {
            a[(i, i - 1)] = h[i - 1];
            a[(i, i)] = 2.0 * (h[i - 1] + h[i]);
            a[(i, i + 1)] = h[i];
            rhs[i] = 6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
        }

        let m = solve_dense(a, &rhs).ok_or(CurveError::Singular)?;
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            m: m.iter().copied().collect(),
            boundary: Boundary::Natural,
        })
    }

    /// Fit a periodic cubic spline.
    ///
    /// The first and last ordinates must be equal; the last knot closes
    /// the period. At least three knots (two intervals) are required.
    pub fn periodic(xs: &[f64], ys: &[f64]) -> Result<Self, CurveError> {
        check_samples(xs, ys, 3)?;
        let n = xs.len() - 1;
        let (first, last) = (ys[0], ys[n]);
        if (first - last).abs() > 1e-15 * (1.0 + first.abs().max(last.abs())) {
            return Err(CurveError::NotPeriodic(first, last));
        }
        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();

        // Unknowns m[0..n]; m[n] == m[0].
        let mut a = DMatrix::<f64>::zeros(n, n);
        let mut rhs = DVector::<f64>::zeros(n);
        for i in 0..n {
            let prev = (i + n - 1) % n;
            let next = (i + 1) % n;
            let (h_prev, h_cur) = (h[prev], h[i]);
            let y_prev = if i == 0 { ys[n - 1] } else { ys[i - 1] };
            a[(i, prev)] += h_prev;
            a[(i, i)] += 2.0 * (h_prev + h_cur);
            a[(i, next)] += h_cur;
            rhs[i] = 6.0 * ((ys[i + 1] - ys[i]) / h_cur - (ys[i] - y_prev) / h_prev);
        }

        let solved = solve_dense(a, &rhs).ok_or(CurveError::Singular)?;
        let mut m: Vec<f64> = solved.iter().copied().collect();
        m.push(m[0]);
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            m,
            boundary: Boundary::Periodic,
        })
    }

    /// Knot range `(x_min, x_max)`.
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Whether the spline wraps around its knot range.
    pub fn is_periodic(&self) -> bool {
        self.boundary == Boundary::Periodic
    }

    /// Evaluate the spline at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        let (lo, hi) = self.domain();
        let x = match self.boundary {
            Boundary::Periodic if x < lo || x > hi => lo + (x - lo).rem_euclid(hi - lo),
            _ => x,
        };

        let n = self.xs.len() - 1;
        let i = self
            .xs
            .partition_point(|&k| k <= x)
            .saturating_sub(1)
            .min(n - 1);
        let h = self.xs[i + 1] - self.xs[i];
        let a = self.xs[i + 1] - x;
        let b = x - self.xs[i];
        self.m[i] * a.powi(3) / (6.0 * h)
            + self.m[i + 1] * b.powi(3) / (6.0 * h)
            + (self.ys[i] / h - self.m[i] * h / 6.0) * a
            + (self.ys[i + 1] / h - self.m[i + 1] * h / 6.0) * b
    }
}

fn check_samples(xs: &[f64], ys: &[f64], needed: usize) -> Result<(), CurveError> {
    if xs.len() != ys.len() {
        return Err(CurveError::LengthMismatch(xs.len(), ys.len()));
    }
    if xs.len() < needed {
        return Err(CurveError::TooFewPoints {
            needed,
            got: xs.len(),
        });
    }
    if xs.iter().chain(ys).any(|v| !v.is_finite()) {
        return Err(CurveError::NonFinite);
    }
    if let Some(i) = xs.windows(2).position(|w| w[1] <= w[0]) {
        return Err(CurveError::NotIncreasing(i + 1));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_natural_interpolates_knots() {
        let xs = [0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0];
        let ys = [0.5, 1.0, 1.8, 2.2, 2.0, 1.5, 0.8];
        let s = CubicSpline::natural(&xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(ys) {
            assert_abs_diff_eq!(s.eval(*x), y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_natural_two_points_is_linear() {
        let s = CubicSpline::natural(&[0.0, 4.0], &[1.0, 3.0]).unwrap();
        assert_abs_diff_eq!(s.eval(1.0), 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(s.eval(3.0), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_natural_reproduces_line() {
        let xs = [0.0, 1.0, 3.0, 4.5];
        let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x - 1.0).collect();
        let s = CubicSpline::natural(&xs, &ys).unwrap();
        assert_abs_diff_eq!(s.eval(2.2), 3.4, epsilon = 1e-12);
        // Extrapolation continues the end polynomial.
        assert_abs_diff_eq!(s.eval(5.0), 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_natural_end_curvature_zero() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [0.0, 1.0, 0.0, 1.0];
        let s = CubicSpline::natural(&xs, &ys).unwrap();
        let d = 1e-4;
        let curvature = |x: f64| (s.eval(x + d) - 2.0 * s.eval(x) + s.eval(x - d)) / (d * d);
        assert!(curvature(d).abs() < 1e-2);
        assert!(curvature(3.0 - d).abs() < 1e-2);
    }

    #[test]
    fn test_rejects_bad_samples() {
        assert_eq!(
            CubicSpline::natural(&[0.0], &[1.0]).unwrap_err(),
            CurveError::TooFewPoints { needed: 2, got: 1 }
        );
        assert_eq!(
            CubicSpline::natural(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0]).unwrap_err(),
            CurveError::NotIncreasing(2)
        );
        assert_eq!(
            CubicSpline::natural(&[0.0, 1.0], &[0.0, f64::NAN]).unwrap_err(),
            CurveError::NonFinite
        );
        assert_eq!(
            CubicSpline::natural(&[0.0, 1.0], &[0.0]).unwrap_err(),
            CurveError::LengthMismatch(2, 1)
        );
    }

    #[test]
    fn test_periodic_wraps() {
        let ts = [0.0, 0.25, 0.5, 0.75, 1.0];
        let xs = [0.0, 1.0, 0.0, -1.0, 0.0];
        let s = CubicSpline::periodic(&ts, &xs).unwrap();
        assert!(s.is_periodic());
        for (t, x) in ts.iter().zip(xs) {
            assert_abs_diff_eq!(s.eval(*t), x, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(s.eval(1.25), s.eval(0.25), epsilon = 1e-12);
        assert_abs_diff_eq!(s.eval(-0.1), s.eval(0.9), epsilon = 1e-12);
    }

    #[test]
    fn test_periodic_slope_continuous_at_seam() {
        let ts = [0.0, 0.2, 0.5, 0.7, 1.0];
        let ys = [1.0, 3.0, 2.0, -1.0, 1.0];
        let s = CubicSpline::periodic(&ts, &ys).unwrap();
        let d = 1e-6;
        let slope_start = (s.eval(d) - s.eval(0.0)) / d;
        let slope_end = (s.eval(1.0) - s.eval(1.0 - d)) / d;
        assert_abs_diff_eq!(slope_start, slope_end, epsilon = 1e-3);
    }

    #[test]
    fn test_periodic_requires_equal_ends() {
        let err = CubicSpline::periodic(&[0.0, 0.5, 1.0], &[0.0, 1.0, 0.5]).unwrap_err();
        assert_eq!(err, CurveError::NotPeriodic(0.0, 0.5));
    }
}
