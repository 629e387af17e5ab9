//! Curve families and interaction events.

use serde::{Deserialize, Serialize};

use crate::{Hull2DLineData, Point2D};

/// One of the three curve families of a lines plan.
///
/// Variants are listed in pick priority order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "line_type", rename_all = "snake_case")]
pub enum CurveFamily {
    /// Longitudinal silhouette, `(x, z)` points, open curve.
    SideProfile,
    /// Half-width plan, `(x, y)` points, open curve.
    HalfBreadth,
    /// Transverse outline at a station, `(y, z)` points, closed curve.
    CrossSection {
        /// Station the outline belongs to.
        station: f64,
    },
}

impl CurveFamily {
    /// Whether the family is drawn as a closed loop.
    pub fn is_closed(&self) -> bool {
        matches!(self, CurveFamily::CrossSection { .. })
    }

    /// Station of a cross-section family.
    pub fn station(&self) -> Option<f64> {
        match self {
            CurveFamily::CrossSection { station } => Some(*station),
            _ => None,
        }
    }

    /// Short name used in logs and file formats.
    pub fn name(&self) -> &'static str {
        match self {
            CurveFamily::SideProfile => "side_profile",
            CurveFamily::HalfBreadth => "half_breadth",
            CurveFamily::CrossSection { .. } => "cross_section",
        }
    }

    /// Control points of this family, or `None` for a missing section.
    pub fn points<'a>(&self, lines: &'a Hull2DLineData) -> Option<&'a [Point2D]> {
        match self {
            CurveFamily::SideProfile => Some(&lines.side_profile),
            CurveFamily::HalfBreadth => Some(&lines.half_breadth),
            CurveFamily::CrossSection { station } => {
                lines.section(*station).map(|s| s.points.as_slice())
            }
        }
    }

    /// Mutable control points of this family.
    pub fn points_mut<'a>(&self, lines: &'a mut Hull2DLineData) -> Option<&'a mut Vec<Point2D>> {
        match self {
            CurveFamily::SideProfile => Some(&mut lines.side_profile),
            CurveFamily::HalfBreadth => Some(&mut lines.half_breadth),
            CurveFamily::CrossSection { station } => {
                lines.section_mut(*station).map(|s| &mut s.points)
            }
        }
    }

    /// Replace control point `index`. Returns `false` if it does not exist.
    ///
    /// Does not touch `line_version`.
    pub fn replace_point(&self, lines: &mut Hull2DLineData, index: usize, point: Point2D) -> bool {
        match self.points_mut(lines).and_then(|pts| pts.get_mut(index)) {
            Some(slot) => {
                *slot = point;
                true
            }
            None => false,
        }
    }
}

/// Phase of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// Pointer pressed on a control point.
    DragStart,
    /// Pointer moved while holding a control point.
    Dragging,
    /// Pointer released; the edit is committed.
    DragEnd,
}

/// A single user edit notification, kept only in the audit log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionEvent {
    /// Gesture phase.
    pub kind: InteractionKind,
    /// Touched curve family (with its station for cross-sections).
    pub family: CurveFamily,
    /// Index of the control point within its family.
    pub point_index: usize,
    /// Coordinates of the control point after this event.
    pub coords: Point2D,
}

impl InteractionEvent {
    /// Create an event.
    pub fn new(kind: InteractionKind, family: CurveFamily, point_index: usize, coords: Point2D) -> Self {
        Self {
            kind,
            family,
            point_index,
            coords,
        }
    }

    /// Station of the touched cross-section, `None` for the other families.
    pub fn cross_section_station(&self) -> Option<f64> {
        self.family.station()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{points, CrossSection};

    fn lines() -> Hull2DLineData {
        Hull2DLineData::new(
            points(&[(0.0, 0.0), (6.0, 2.0)]),
            points(&[(0.0, 0.5)]),
            vec![CrossSection::new(3.0, points(&[(0.0, 0.0), (1.0, 1.0), (0.0, 2.0)]))],
        )
    }

    #[test]
    fn family_point_access() {
        let l = lines();
        assert_eq!(CurveFamily::SideProfile.points(&l).unwrap().len(), 2);
        assert_eq!(CurveFamily::HalfBreadth.points(&l).unwrap().len(), 1);
        assert_eq!(
            CurveFamily::CrossSection { station: 3.0 }
                .points(&l)
                .unwrap()
                .len(),
            3
        );
        assert!(CurveFamily::CrossSection { station: 4.0 }.points(&l).is_none());
    }

    #[test]
    fn replace_point_keeps_version() {
        let mut l = lines();
        let family = CurveFamily::CrossSection { station: 3.0 };
        assert!(family.replace_point(&mut l, 1, Point2D::new(1.5, 1.0)));
        assert_eq!(l.section(3.0).unwrap().points[1], Point2D::new(1.5, 1.0));
        assert!(!CurveFamily::SideProfile.replace_point(&mut l, 7, Point2D::new(0.0, 0.0)));
        assert_eq!(l.line_version, 1);
    }

    #[test]
    fn closedness() {
        assert!(!CurveFamily::SideProfile.is_closed());
        assert!(!CurveFamily::HalfBreadth.is_closed());
        assert!(CurveFamily::CrossSection { station: 0.0 }.is_closed());
    }

    #[test]
    fn event_json_shape() {
        let ev = InteractionEvent::new(
            InteractionKind::DragEnd,
            CurveFamily::CrossSection { station: 6.0 },
            2,
            Point2D::new(1.0, 0.5),
        );
        let json = serde_json::to_string(&ev).unwrap();
        assert!(json.contains(r#""kind":"drag_end""#));
        assert!(json.contains(r#""line_type":"cross_section""#));
        let back: InteractionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ev);
        assert_eq!(back.cross_section_station(), Some(6.0));
    }
}
