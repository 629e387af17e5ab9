#![warn(missing_docs)]

//! Curve reconstruction for the hullcad kernel.
//!
//! Turns sparse, user-dragged control points into dense smooth polylines
//! for display and editing, and provides the interpolants the lofter is
//! built on.
//!
//! # Key types
//!
//! - [`CubicSpline`] - natural or periodic interpolating cubic spline
//! - [`Interpolant1D`] - constant or spline interpolant chosen by sample count
//! - [`GridSpline`] - tensor-product spline over a station × waterline table
//!
//! # Example
//!
//! ```
//! use hull_kernel_curve::reconstruct;
//! use hull_kernel_math::Point2;
//!
//! let square = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//! let loop_pts = reconstruct(&square, true);
//! assert_eq!(loop_pts.len(), 100);
//! assert!((loop_pts[0] - loop_pts[99]).norm() < 1e-6);
//! ```

mod grid;
mod linear;
mod reconstruct;
mod spline;

pub use grid::{GridSpline, Interpolant1D};
pub use linear::{interp, linear_closed, linear_open};
pub use reconstruct::{reconstruct, reconstruct_detailed, Reconstruction, Strategy};
pub use spline::CubicSpline;

use thiserror::Error;

/// Number of samples emitted by the spline paths.
pub const DENSE_SAMPLES: usize = 100;

/// Samples per segment emitted by the closed linear fallback.
pub const CLOSED_FALLBACK_SEGMENT_SAMPLES: usize = 20;

/// Numerical failures while fitting an interpolant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Not enough samples for the requested fit.
    #[error("need at least {needed} samples, got {got}")]
    TooFewPoints {
        /// Minimum sample count.
        needed: usize,
        /// Supplied sample count.
        got: usize,
    },

    /// Abscissas and ordinates have different lengths.
    #[error("sample length mismatch: {0} abscissas, {1} ordinates")]
    LengthMismatch(usize, usize),

    /// Abscissas are not strictly increasing at the given index.
    #[error("abscissas not strictly increasing at index {0}")]
    NotIncreasing(usize),

    /// A sample or a solved coefficient is NaN or infinite.
    #[error("non-finite value in spline system")]
    NonFinite,

    /// The spline system could not be solved.
    #[error("singular spline system")]
    Singular,

    /// Periodic fit whose first and last ordinates differ.
    #[error("periodic spline needs equal end values, got {0} and {1}")]
    NotPeriodic(f64, f64),
}
