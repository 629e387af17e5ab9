//! Dense curve reconstruction from sparse control points.

use hull_kernel_math::{linspace, Point2, Tolerance};
use tracing::warn;

use crate::{linear_closed, linear_open, CubicSpline, CurveError, DENSE_SAMPLES};

/// Which path produced a reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Too few points to fit; the input came back as is.
    Passthrough,
    /// Natural cubic spline over the deduplicated points.
    OpenSpline,
    /// Periodic parametric cubic spline.
    ClosedSpline,
    /// Piecewise-linear fallback over the sorted points, used when the
    /// open fit fails or fewer than two distinct abscissas remain.
    OpenLinear,
    /// Per-segment linear fallback after a closed fit failure.
    ClosedLinear,
}

/// Dense points plus the strategy that produced them.
#[derive(Debug, Clone)]
pub struct Reconstruction {
    /// Dense polyline.
    pub points: Vec<Point2>,
    /// Path taken.
    pub strategy: Strategy,
}

/// Reconstruct a dense smooth curve from control points.
///
/// Open curves are sorted by abscissa, stripped of duplicate abscissas and
/// fitted with a natural cubic spline sampled at 100 points over the
/// control range. Closed curves are closed if needed and fitted with a
/// periodic parametric spline sampled at 100 points over t ∈ [0, 1]. Fit
/// failures never propagate; a linear fallback is used instead.
pub fn reconstruct(points: &[Point2], closed: bool) -> Vec<Point2> {
    reconstruct_detailed(points, closed).points
}

/// [`reconstruct`], also reporting which strategy was used.
pub fn reconstruct_detailed(points: &[Point2], closed: bool) -> Reconstruction {
    if points.len() < 2 {
        return Reconstruction {
            points: points.to_vec(),
            strategy: Strategy::Passthrough,
        };
    }
    if closed {
        reconstruct_closed(points)
    } else {
        reconstruct_open(points)
    }
}

fn reconstruct_open(points: &[Point2]) -> Reconstruction {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

    let unique = dedup_abscissas(&sorted, Tolerance::DEFAULT);
    if unique.len() < 2 {
        warn!(points = points.len(), "open curve has a single distinct abscissa, using linear interpolation");
        return Reconstruction {
            points: linear_open(&sorted),
            strategy: Strategy::OpenLinear,
        };
    }

    match fit_open(&unique) {
        Ok(points) => Reconstruction {
            points,
            strategy: Strategy::OpenSpline,
        },
        Err(err) => {
            warn!(error = %err, points = points.len(), "open curve spline fit failed, using linear interpolation");
            Reconstruction {
                points: linear_open(&sorted),
                strategy: Strategy::OpenLinear,
            }
        }
    }
}

/// Collapse runs of abscissas closer than the coincidence tolerance,
/// keeping the last point of each run.
fn dedup_abscissas(sorted: &[Point2], tol: Tolerance) -> Vec<Point2> {
    let mut unique: Vec<Point2> = sorted
        .windows(2)
        .filter(|w| !tol.same_abscissa(w[0].x, w[1].x))
        .map(|w| w[0])
        .collect();
    if let Some(last) = sorted.last() {
        unique.push(*last);
    }
    unique
}

fn fit_open(unique: &[Point2]) -> Result<Vec<Point2>, CurveError> {
    let xs: Vec<f64> = unique.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = unique.iter().map(|p| p.y).collect();
    let spline = CubicSpline::natural(&xs, &ys)?;
    let (lo, hi) = spline.domain();
    let dense: Vec<Point2> = linspace(lo, hi, DENSE_SAMPLES)
        .into_iter()
        .map(|x| Point2::new(x, spline.eval(x)))
        .collect();
    if dense.iter().any(|p| !p.y.is_finite()) {
        return Err(CurveError::NonFinite);
    }
    Ok(dense)
}

fn reconstruct_closed(points: &[Point2]) -> Reconstruction {
    if points.len() < 3 {
        return Reconstruction {
            points: points.to_vec(),
            strategy: Strategy::Passthrough,
        };
    }

    let mut loop_pts = points.to_vec();
    let first = points[0];
    let last = points[points.len() - 1];
    if !Tolerance::DEFAULT.points_coincide(&first, &last) {
        loop_pts.push(first);
    }

    match fit_closed(&loop_pts) {
        Ok(points) => Reconstruction {
            points,
            strategy: Strategy::ClosedSpline,
        },
        Err(err) => {
            warn!(error = %err, points = points.len(), "closed curve spline fit failed, using linear interpolation");
            Reconstruction {
                points: linear_closed(&loop_pts),
                strategy: Strategy::ClosedLinear,
            }
        }
    }
}

fn fit_closed(loop_pts: &[Point2]) -> Result<Vec<Point2>, CurveError> {
    let ts = linspace(0.0, 1.0, loop_pts.len());
    let xs: Vec<f64> = loop_pts.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = loop_pts.iter().map(|p| p.y).collect();
    let sx = CubicSpline::periodic(&ts, &xs)?;
    let sy = CubicSpline::periodic(&ts, &ys)?;
    let dense: Vec<Point2> = linspace(0.0, 1.0, DENSE_SAMPLES)
        .into_iter()
        .map(|t| Point2::new(sx.eval(t), sy.eval(t)))
        .collect();
    if dense.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(CurveError::NonFinite);
    }
    Ok(dense)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CLOSED_FALLBACK_SEGMENT_SAMPLES;
    use approx::assert_abs_diff_eq;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn test_single_point_passthrough() {
        let p = pts(&[(5.0, 1.0)]);
        let r = reconstruct_detailed(&p, false);
        assert_eq!(r.strategy, Strategy::Passthrough);
        assert_eq!(r.points, p);
        assert_eq!(reconstruct(&p, true), p);
        assert!(reconstruct(&[], false).is_empty());
    }

    #[test]
    fn test_open_curve_sorted_and_dense() {
        let p = pts(&[(12.0, 0.0), (0.0, 0.0), (6.0, 2.5), (3.0, 1.8), (9.0, 1.8)]);
        let r = reconstruct_detailed(&p, false);
        assert_eq!(r.strategy, Strategy::OpenSpline);
        assert_eq!(r.points.len(), DENSE_SAMPLES);
        assert_eq!(r.points[0].x, 0.0);
        assert_eq!(r.points[DENSE_SAMPLES - 1].x, 12.0);
        assert!(r.points.windows(2).all(|w| w[1].x > w[0].x));
        assert_abs_diff_eq!(r.points[0].y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.points[DENSE_SAMPLES - 1].y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_duplicate_abscissa_keeps_last() {
        // x = 6 appears twice; the later point (6, 3) wins.
        let p = pts(&[(0.0, 0.0), (6.0, 1.0), (6.0 + 1e-12, 3.0), (12.0, 0.0)]);
        let unique = dedup_abscissas(&p, Tolerance::DEFAULT);
        assert_eq!(unique.len(), 3);
        assert_eq!(unique[1].y, 3.0);

        let dense = reconstruct(&p, false);
        assert_eq!(dense.len(), DENSE_SAMPLES);
        let peak = dense.iter().map(|q| q.y).fold(f64::MIN, f64::max);
        assert!(peak > 2.9);
    }

    #[test]
    fn test_vertical_run_falls_back_to_linear() {
        let p = pts(&[(2.0, 3.0), (2.0, 1.0), (2.0, 2.0)]);
        let r = reconstruct_detailed(&p, false);
        assert_eq!(r.strategy, Strategy::OpenLinear);
        assert_eq!(r.points.len(), DENSE_SAMPLES);
        assert!(r.points.iter().all(|q| q.x == 2.0 && q.y.is_finite()));
    }

    #[test]
    fn test_open_fit_failure_falls_back_to_linear() {
        let p = pts(&[(0.0, 0.0), (1.0, f64::NAN), (2.0, 1.0)]);
        let r = reconstruct_detailed(&p, false);
        assert_eq!(r.strategy, Strategy::OpenLinear);
        assert_eq!(r.points.len(), DENSE_SAMPLES);
        assert_eq!(r.points[0].x, 0.0);
        assert_eq!(r.points[DENSE_SAMPLES - 1].x, 2.0);
    }

    #[test]
    fn test_open_round_trip_is_stable() {
        let p = pts(&[(0.0, 0.5), (2.0, 1.0), (4.0, 1.8), (6.0, 2.2), (8.0, 2.0), (10.0, 1.5), (12.0, 0.8)]);
        let first = reconstruct(&p, false);
        let second = reconstruct(&first, false);
        assert_eq!(second.len(), first.len());
        for (a, b) in first.iter().zip(&second) {
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_closed_square() {
        let square = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let r = reconstruct_detailed(&square, true);
        assert_eq!(r.strategy, Strategy::ClosedSpline);
        assert_eq!(r.points.len(), DENSE_SAMPLES);
        let (start, end) = (r.points[0], r.points[DENSE_SAMPLES - 1]);
        assert!((start - end).norm() < 1e-6);
        assert_abs_diff_eq!(start.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(start.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_closed_already_closed_not_duplicated() {
        let outline = pts(&[
            (0.0, 0.0),
            (1.5, 0.6),
            (2.0, 1.8),
            (1.5, 2.8),
            (0.0, 3.0),
            (-1.5, 2.8),
            (-2.0, 1.8),
            (-1.5, 0.6),
            (0.0, 0.0),
        ]);
        let dense = reconstruct(&outline, true);
        assert_eq!(dense.len(), DENSE_SAMPLES);
        assert!((dense[0] - dense[DENSE_SAMPLES - 1]).norm() < 1e-9);
        // The knot at (0, 3) sits at t = 0.5, between two samples.
        let top = dense.iter().map(|p| p.y).fold(f64::MIN, f64::max);
        assert!(top > 2.95 && top < 3.05);
    }

    #[test]
    fn test_closed_two_points_passthrough() {
        let p = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        let r = reconstruct_detailed(&p, true);
        assert_eq!(r.strategy, Strategy::Passthrough);
        assert_eq!(r.points, p);
    }

    #[test]
    fn test_closed_fit_failure_emits_twenty_per_segment() {
        let p = pts(&[(0.0, 0.0), (1.0, 0.0), (f64::NAN, 1.0), (0.0, 1.0)]);
        let r = reconstruct_detailed(&p, true);
        assert_eq!(r.strategy, Strategy::ClosedLinear);
        // Four input points plus the closing point give four segments.
        assert_eq!(r.points.len(), 4 * CLOSED_FALLBACK_SEGMENT_SAMPLES);
    }
}
