#![warn(missing_docs)]

//! Math types for the hullcad lofting kernel.
//!
//! Thin wrappers around nalgebra providing the point aliases, tolerance
//! constants and small numeric helpers shared by the curve and loft crates.
//! All lengths are meters in a hull-centered frame (x forward, y starboard,
//! z up).

use nalgebra::{DMatrix, DVector};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A point in a 2D drawing plane (abscissa, ordinate).
pub type Point2 = nalgebra::Point2<f64>;

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Per-coordinate tolerance for treating two samples as the same point.
    pub coincident: f64,
}

impl Tolerance {
    /// Default tolerance: 1e-10 per coordinate.
    pub const DEFAULT: Self = Self { coincident: 1e-10 };

    /// Check if two abscissas are the same within the coincidence tolerance.
    pub fn same_abscissa(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.coincident
    }

    /// Check if two 2D points coincide on both coordinates.
    pub fn points_coincide(&self, a: &Point2, b: &Point2) -> bool {
        (a.x - b.x).abs() <= self.coincident && (a.y - b.y).abs() <= self.coincident
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// `count` evenly spaced samples over `[start, end]`, both ends included.
///
/// A single sample returns `start`; zero samples return an empty vector.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Linear interpolation between `a` and `b` at fraction `t`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Solve the dense square system `matrix * x = rhs` by LU decomposition.
///
/// Returns `None` when the matrix is singular or the solution is not finite.
pub fn solve_dense(matrix: DMatrix<f64>, rhs: &DVector<f64>) -> Option<DVector<f64>> {
    if matrix.nrows() != matrix.ncols() || matrix.nrows() != rhs.len() {
        return None;
    }
    let solution = matrix.lu().solve(rhs)?;
    if solution.iter().all(|v| v.is_finite()) {
        Some(solution)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let xs = linspace(-6.0, 6.0, 100);
        assert_eq!(xs.len(), 100);
        assert_eq!(xs[0], -6.0);
        assert_eq!(xs[99], 6.0);
        assert!((xs[1] - xs[0] - 12.0 / 99.0).abs() < 1e-12);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn test_lerp() {
        assert!((lerp(2.0, 4.0, 0.25) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_solve_dense() {
        let m = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
        let b = DVector::from_vec(vec![3.0, 5.0]);
        let x = solve_dense(m, &b).unwrap();
        assert!((x[0] - 0.8).abs() < 1e-12);
        assert!((x[1] - 1.4).abs() < 1e-12);
    }

    #[test]
    fn test_solve_dense_singular() {
        let m = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
        let b = DVector::from_vec(vec![1.0, 1.0]);
        assert!(solve_dense(m, &b).is_none());
    }

    #[test]
    fn test_tolerance_coincidence() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.same_abscissa(1.0, 1.0 + 1e-11));
        assert!(!tol.same_abscissa(1.0, 1.0 + 1e-9));
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(5e-11, -5e-11);
        assert!(tol.points_coincide(&a, &b));
        assert!(!tol.points_coincide(&a, &Point2::new(0.0, 1e-6)));
    }
}
