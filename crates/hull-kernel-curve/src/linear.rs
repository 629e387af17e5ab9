//! Piecewise-linear interpolation and the reconstruction fallbacks.

use hull_kernel_math::{lerp, linspace, Point2};

use crate::{CLOSED_FALLBACK_SEGMENT_SAMPLES, DENSE_SAMPLES};

/// Piecewise-linear interpolation of `(xp, fp)` at `x`.
///
/// `xp` must be non-decreasing. Values outside `[xp[0], xp[last]]` are held
/// at the end ordinates. Returns NaN for empty samples or a NaN query.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let n = xp.len().min(fp.len());
    if n == 0 || x.is_nan() {
        return f64::NAN;
    }
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[n - 1] {
        return fp[n - 1];
    }
    // Largest j with xp[j] <= x; then xp[j] <= x < xp[j + 1].
    let j = xp[..n].partition_point(|&v| v <= x) - 1;
    let span = xp[j + 1] - xp[j];
    lerp(fp[j], fp[j + 1], (x - xp[j]) / span)
}

/// Open-curve fallback: [`DENSE_SAMPLES`] points spanning the abscissa
/// range, ordinates linearly interpolated over `sorted` (sorted by x,
/// duplicates allowed).
pub fn linear_open(sorted: &[Point2]) -> Vec<Point2> {
    if sorted.len() < 2 {
        return sorted.to_vec();
    }
    let xp: Vec<f64> = sorted.iter().map(|p| p.x).collect();
    let fp: Vec<f64> = sorted.iter().map(|p| p.y).collect();
    let lo = xp.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = xp.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    linspace(lo, hi, DENSE_SAMPLES)
        .into_iter()
        .map(|x| Point2::new(x, interp(x, &xp, &fp)))
        .collect()
}

/// Closed-curve fallback: walks each consecutive pair of the closed loop
/// and emits [`CLOSED_FALLBACK_SEGMENT_SAMPLES`] evenly spaced points per
/// segment, starting at the segment's first point.
///
/// `closed` must already repeat its first point at the end. The output has
/// `20 × segment count` points and does not repeat the start point.
pub fn linear_closed(closed: &[Point2]) -> Vec<Point2> {
    let per = CLOSED_FALLBACK_SEGMENT_SAMPLES;
    let mut out = Vec::with_capacity(closed.len().saturating_sub(1) * per);
    for seg in closed.windows(2) {
        let (a, b) = (seg[0], seg[1]);
        for j in 0..per {
            let t = j as f64 / per as f64;
            out.push(Point2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t)));
        }
    }
    out
}
