//! Half-breadth lookup at arbitrary stations.

use hull_ir::Point2D;
use hull_kernel_curve::interp;
use tracing::debug;

use crate::{LoftError, Result};

/// Half-breadth as a function of station `x`, built from a sparse
/// half-breadth curve.
///
/// The lookup strategy depends on the number of samples:
///
/// | samples | behavior |
/// |---|---|
/// | 1 | constant |
/// | 2 | linear between the two, held flat outside them |
/// | ≥ 3 | piecewise linear, continuing the end segments' slopes outside |
#[derive(Debug, Clone, PartialEq)]
pub struct HalfBreadthFn {
    kind: Kind,
}

#[derive(Debug, Clone, PartialEq)]
enum Kind {
    Constant(f64),
    Clamped { x1: f64, y1: f64, x2: f64, y2: f64, slope: f64 },
    Extrapolated { xs: Vec<f64>, ys: Vec<f64> },
}

/// Build the half-breadth lookup for `points`.
///
/// Points are sorted by station first. Fails with
/// [`LoftError::EmptyInput`] when there are no points.
pub fn make_half_breadth_fn(points: &[Point2D]) -> Result<HalfBreadthFn> {
    if points.is_empty() {
        return Err(LoftError::EmptyInput);
    }
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
    let xs: Vec<f64> = sorted.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = sorted.iter().map(|p| p.y).collect();

    let kind = match xs.len() {
        1 => {
            debug!(y = ys[0], "half-breadth: constant");
            Kind::Constant(ys[0])
        }
        2 => {
            let (x1, y1, x2, y2) = (xs[0], ys[0], xs[1], ys[1]);
            let slope = if x2 != x1 { (y2 - y1) / (x2 - x1) } else { 0.0 };
            debug!("half-breadth: two-point linear");
            Kind::Clamped { x1, y1, x2, y2, slope }
        }
        n => {
            debug!(samples = n, "half-breadth: piecewise linear");
            Kind::Extrapolated { xs, ys }
        }
    };
    Ok(HalfBreadthFn { kind })
}

impl HalfBreadthFn {
    /// Half-breadth at station `x`.
    pub fn eval(&self, x: f64) -> f64 {
        match &self.kind {
            Kind::Constant(y) => *y,
            Kind::Clamped { x1, y1, x2, y2, slope } => {
                if x <= *x1 {
                    *y1
                } else if x >= *x2 {
                    *y2
                } else {
                    y1 + slope * (x - x1)
                }
            }
            Kind::Extrapolated { xs, ys } => {
                let n = xs.len();
                if x < xs[0] {
                    ys[0] + segment_slope(xs[0], ys[0], xs[1], ys[1]) * (x - xs[0])
                } else if x > xs[n - 1] {
                    let slope = segment_slope(xs[n - 2], ys[n - 2], xs[n - 1], ys[n - 1]);
                    ys[n - 1] + slope * (x - xs[n - 1])
                } else {
                    interp(x, xs, ys)
                }
            }
        }
    }

    /// Station range covered by the samples.
    pub fn domain(&self) -> Option<(f64, f64)> {
        match &self.kind {
            Kind::Constant(_) => None,
            Kind::Clamped { x1, x2, .. } => Some((*x1, *x2)),
            Kind::Extrapolated { xs, .. } => Some((xs[0], xs[xs.len() - 1])),
        }
    }
}

fn segment_slope(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    if x1 != x0 {
        (y1 - y0) / (x1 - x0)
    } else {
        0.0
    }
}
