//! Copy-on-write application of a single edit.

use hull_ir::{CurveFamily, Hull2DLineData, InteractionEvent};

use crate::EditError;

/// Return a new snapshot with the event's control point moved to the
/// event's coordinates and `line_version` advanced by one.
///
/// The input snapshot is left untouched.
pub fn apply_event(lines: &Hull2DLineData, event: &InteractionEvent) -> Result<Hull2DLineData, EditError> {
    let mut next = lines.clone();
    if !event.family.replace_point(&mut next, event.point_index, event.coords) {
        return Err(missing_point(lines, &event.family, event.point_index));
    }
    next.line_version += 1;
    Ok(next)
}

pub(crate) fn missing_point(lines: &Hull2DLineData, family: &CurveFamily, index: usize) -> EditError {
    match family.points(lines) {
        Some(points) => EditError::IndexOutOfRange {
            family: family.name(),
            index,
            len: points.len(),
        },
        None => EditError::UnknownSection(family.station().unwrap_or(f64::NAN)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull_ir::{points, CrossSection, InteractionKind, Point2D};

    fn lines() -> Hull2DLineData {
        Hull2DLineData::new(
            points(&[(0.0, 0.0), (6.0, 2.0), (12.0, 0.0)]),
            points(&[(0.0, 0.5), (12.0, 0.5)]),
            vec![CrossSection::new(6.0, points(&[(0.0, 0.0), (2.0, 1.0), (0.0, 2.0)]))],
        )
    }

    #[test]
    fn test_apply_moves_point_and_bumps_version() {
        let before = lines();
        let ev = InteractionEvent::new(
            InteractionKind::DragEnd,
            CurveFamily::SideProfile,
            1,
            Point2D::new(6.0, 2.4),
        );
        let after = apply_event(&before, &ev).unwrap();
        assert_eq!(after.side_profile[1], Point2D::new(6.0, 2.4));
        assert_eq!(after.line_version, before.line_version + 1);
        assert_eq!(before.side_profile[1], Point2D::new(6.0, 2.0));
    }

    #[test]
    fn test_apply_cross_section() {
        let ev = InteractionEvent::new(
            InteractionKind::DragEnd,
            CurveFamily::CrossSection { station: 6.0 },
            1,
            Point2D::new(2.2, 1.1),
        );
        let after = apply_event(&lines(), &ev).unwrap();
        assert_eq!(after.section(6.0).unwrap().points[1], Point2D::new(2.2, 1.1));
    }

    #[test]
    fn test_apply_errors() {
        let l = lines();
        let ev = InteractionEvent::new(
            InteractionKind::DragEnd,
            CurveFamily::HalfBreadth,
            5,
            Point2D::new(1.0, 1.0),
        );
        assert_eq!(
            apply_event(&l, &ev).unwrap_err(),
            EditError::IndexOutOfRange {
                family: "half_breadth",
                index: 5,
                len: 2
            }
        );
        let ev = InteractionEvent::new(
            InteractionKind::DragEnd,
            CurveFamily::CrossSection { station: 4.0 },
            0,
            Point2D::new(1.0, 1.0),
        );
        assert_eq!(apply_event(&l, &ev).unwrap_err(), EditError::UnknownSection(4.0));
    }
}
