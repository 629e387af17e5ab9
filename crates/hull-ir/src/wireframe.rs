//! 3D wireframe output.

use serde::{Deserialize, Serialize};

use crate::Point3D;

/// An edge as a pair of vertex indices.
pub type Edge = (usize, usize);

/// Vertices and edge index pairs of a lofted hull.
///
/// There is no face or winding information. Edges are unordered pairs and
/// are not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hull3DWireframeData {
    /// Index-addressed vertices.
    pub vertices: Vec<Point3D>,
    /// Edges between vertices.
    pub edges: Vec<Edge>,
    /// `line_version` of the 2D data this wireframe was lofted from.
    pub model_version: u64,
}

impl Hull3DWireframeData {
    /// Axis-aligned extents `(min, max)`, or `None` without vertices.
    pub fn bounds(&self) -> Option<(Point3D, Point3D)> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().fold((first, first), |(lo, hi), v| {
            (
                Point3D::new(lo.x.min(v.x), lo.y.min(v.y), lo.z.min(v.z)),
                Point3D::new(hi.x.max(v.x), hi.y.max(v.y), hi.z.max(v.z)),
            )
        }))
    }

    /// Extents along x, y and z.
    pub fn size(&self) -> Option<(f64, f64, f64)> {
        self.bounds()
            .map(|(lo, hi)| (hi.x - lo.x, hi.y - lo.y, hi.z - lo.z))
    }

    /// Index of the first edge referencing a vertex that does not exist.
    pub fn validate_indices(&self) -> Result<(), usize> {
        let n = self.vertices.len();
        match self.edges.iter().position(|&(a, b)| a >= n || b >= n) {
            Some(i) => Err(i),
            None => Ok(()),
        }
    }

    /// Whether every vertex has a port/starboard mirror image.
    ///
    /// Checked by exact coordinate match after negating y.
    pub fn is_mirror_symmetric(&self) -> bool {
        self.vertices.iter().all(|v| {
            self.vertices
                .iter()
                .any(|w| w.x == v.x && w.z == v.z && w.y == -v.y)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> Hull3DWireframeData {
        Hull3DWireframeData {
            vertices: vec![
                Point3D::new(0.0, 0.5, 0.0),
                Point3D::new(0.0, -0.5, 0.0),
                Point3D::new(6.0, 2.0, 2.0),
                Point3D::new(6.0, -2.0, 2.0),
            ],
            edges: vec![(0, 1), (2, 3), (0, 2), (1, 3)],
            model_version: 4,
        }
    }

    #[test]
    fn bounds_and_size() {
        let w = pair();
        let (lo, hi) = w.bounds().unwrap();
        assert_eq!(lo, Point3D::new(0.0, -2.0, 0.0));
        assert_eq!(hi, Point3D::new(6.0, 2.0, 2.0));
        assert_eq!(w.size(), Some((6.0, 4.0, 2.0)));
    }

    #[test]
    fn empty_has_no_bounds() {
        let w = Hull3DWireframeData {
            vertices: Vec::new(),
            edges: Vec::new(),
            model_version: 1,
        };
        assert!(w.bounds().is_none());
    }

    #[test]
    fn index_validation() {
        let mut w = pair();
        assert!(w.validate_indices().is_ok());
        w.edges.push((3, 4));
        assert_eq!(w.validate_indices(), Err(4));
    }

    #[test]
    fn mirror_symmetry() {
        let mut w = pair();
        assert!(w.is_mirror_symmetric());
        w.vertices[3].y = -1.9;
        assert!(!w.is_mirror_symmetric());
    }
}
