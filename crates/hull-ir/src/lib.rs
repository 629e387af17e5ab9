#![warn(missing_docs)]

//! Intermediate representation for the hullcad lines-plan ecosystem.
//!
//! This crate defines the plain data exchanged between parameter entry,
//! the lofting kernel, the interactive editor and renderers:
//!
//! - [`HullBasicParams`] - principal dimensions of the hull
//! - [`Hull2DLineData`] - versioned side profile, half-breadth and
//!   cross-section control points
//! - [`OffsetTable`] - station × waterline half-breadth table for grid lofting
//! - [`Hull3DWireframeData`] - vertices and edge index pairs
//! - [`InteractionEvent`] - one edit notification for the audit log
//!
//! The IR carries no behavior beyond invariant checks and conversions.
//! Curve fitting and lofting live in the kernel crates.

mod document;
mod event;
mod lines;
mod params;
mod wireframe;

pub use document::HullDocument;
pub use event::{CurveFamily, InteractionEvent, InteractionKind};
pub use lines::{CrossSection, Hull2DLineData, OffsetTable};
pub use params::{HullBasicParams, ParamError, ParamSource};
pub use wireframe::{Edge, Hull3DWireframeData};

use hull_kernel_math::{Point2, Point3};
use serde::{Deserialize, Serialize};

/// A 2D control point in a drawing plane.
///
/// The meaning of the two coordinates depends on the curve family:
/// `(x, z)` for the side profile, `(x, y)` for the half-breadth plan and
/// `(y, z)` for a cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// First (horizontal) coordinate.
    pub x: f64,
    /// Second (vertical) coordinate.
    pub y: f64,
}

impl Point2D {
    /// Create a new 2D point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point2> for Point2D {
    fn from(p: Point2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Point2D> for Point2 {
    fn from(p: Point2D) -> Self {
        Point2::new(p.x, p.y)
    }
}

/// A vertex in the hull-centered 3D frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    /// Longitudinal position, positive forward.
    pub x: f64,
    /// Transverse position, positive to starboard.
    pub y: f64,
    /// Height above the baseline.
    pub z: f64,
}

impl Point3D {
    /// Create a new 3D point.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<Point3> for Point3D {
    fn from(p: Point3) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

impl From<Point3D> for Point3 {
    fn from(p: Point3D) -> Self {
        Point3::new(p.x, p.y, p.z)
    }
}

/// Collect `(a, b)` tuples into control points.
pub fn points(coords: &[(f64, f64)]) -> Vec<Point2D> {
    coords.iter().copied().map(Point2D::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_conversions() {
        let p = Point2D::new(1.5, -2.0);
        let q: Point2 = p.into();
        assert_eq!(Point2D::from(q), p);

        let v = Point3D::new(1.0, 2.0, 3.0);
        let w: Point3 = v.into();
        assert_eq!(Point3D::from(w), v);
    }

    #[test]
    fn point_distance() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn points_helper_keeps_order() {
        let pts = points(&[(0.0, 0.0), (6.0, 2.0), (12.0, 0.0)]);
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[1], Point2D::new(6.0, 2.0));
    }
}
