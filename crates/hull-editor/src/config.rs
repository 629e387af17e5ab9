//! Editor settings: pick tolerance and per-plot axis bounds.

use hull_ir::{CurveFamily, Point2D};
use serde::{Deserialize, Serialize};

use crate::EditError;

/// Axis limits of one plot. Dragged points are clamped into them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    /// Horizontal `(min, max)`.
    pub x: (f64, f64),
    /// Vertical `(min, max)`.
    pub y: (f64, f64),
}

impl AxisBounds {
    /// Create bounds from horizontal and vertical ranges.
    pub const fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Self { x, y }
    }

    /// Clamp a point into the bounds.
    pub fn clamp(&self, p: Point2D) -> Point2D {
        Point2D::new(p.x.clamp(self.x.0, self.x.1), p.y.clamp(self.y.0, self.y.1))
    }

    fn is_valid(&self) -> bool {
        [self.x.0, self.x.1, self.y.0, self.y.1].iter().all(|v| v.is_finite())
            && self.x.0 < self.x.1
            && self.y.0 < self.y.1
    }
}

/// Interactive editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Drawn radius of a control point.
    pub pick_radius: f64,
    /// A press within `pick_radius * pick_factor` grabs the point.
    pub pick_factor: f64,
    /// Side profile plot, `(x, z)`.
    pub side_profile: AxisBounds,
    /// Half-breadth plot, `(x, y)`.
    pub half_breadth: AxisBounds,
    /// Cross-section plot, `(y, z)`.
    pub cross_section: AxisBounds,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            pick_radius: 0.06,
            pick_factor: 1.5,
            side_profile: AxisBounds::new((-1.0, 13.0), (-0.5, 4.0)),
            half_breadth: AxisBounds::new((-1.0, 13.0), (-0.5, 3.0)),
            cross_section: AxisBounds::new((-3.0, 3.0), (-0.5, 4.0)),
        }
    }
}

impl EditorConfig {
    /// Validate settings.
    pub fn validate(&self) -> Result<(), EditError> {
        if !(self.pick_radius > 0.0) || !self.pick_radius.is_finite() {
            return Err(EditError::InvalidConfig("pick_radius must be positive".into()));
        }
        if !(self.pick_factor > 0.0) || !self.pick_factor.is_finite() {
            return Err(EditError::InvalidConfig("pick_factor must be positive".into()));
        }
        for (name, bounds) in [
            ("side_profile", &self.side_profile),
            ("half_breadth", &self.half_breadth),
            ("cross_section", &self.cross_section),
        ] {
            if !bounds.is_valid() {
                return Err(EditError::InvalidConfig(format!(
                    "{name} bounds must be finite with min < max"
                )));
            }
        }
        Ok(())
    }

    /// Distance within which a press grabs a control point.
    pub fn pick_distance(&self) -> f64 {
        self.pick_radius * self.pick_factor
    }

    /// Bounds of the plot a family is drawn in.
    pub fn bounds(&self, family: &CurveFamily) -> &AxisBounds {
        match family {
            CurveFamily::SideProfile => &self.side_profile,
            CurveFamily::HalfBreadth => &self.half_breadth,
            CurveFamily::CrossSection { .. } => &self.cross_section,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = EditorConfig::default();
        assert!(c.validate().is_ok());
        assert!((c.pick_distance() - 0.09).abs() < 1e-12);
        assert_eq!(c.bounds(&CurveFamily::HalfBreadth).y, (-0.5, 3.0));
    }

    #[test]
    fn test_clamp() {
        let b = AxisBounds::new((-1.0, 13.0), (-0.5, 4.0));
        assert_eq!(b.clamp(Point2D::new(20.0, -3.0)), Point2D::new(13.0, -0.5));
        assert_eq!(b.clamp(Point2D::new(5.0, 1.0)), Point2D::new(5.0, 1.0));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let c: EditorConfig = toml::from_str("pick_radius = 0.1\n").unwrap();
        assert_eq!(c.pick_radius, 0.1);
        assert_eq!(c.pick_factor, 1.5);
        assert_eq!(c.cross_section, EditorConfig::default().cross_section);
    }

    #[test]
    fn test_invalid_config() {
        let c = EditorConfig {
            pick_radius: 0.0,
            ..EditorConfig::default()
        };
        assert!(c.validate().is_err());
        let c = EditorConfig {
            side_profile: AxisBounds::new((5.0, 1.0), (0.0, 1.0)),
            ..EditorConfig::default()
        };
        assert!(matches!(c.validate(), Err(EditError::InvalidConfig(m)) if m.contains("side_profile")));
    }
}
