//! Pointer input as delivered by a plotting front end.

use hull_ir::{CurveFamily, Point2D};

/// The plot panels of the editor window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subplot {
    /// Side profile, `(x, z)`.
    SideProfile,
    /// Half-breadth plan, `(x, y)`.
    HalfBreadth,
    /// Active cross-section, `(y, z)`.
    CrossSection,
    /// Text panel with counts and recent events.
    Info,
}

impl Subplot {
    /// The plot a curve family is drawn in.
    pub fn of(family: &CurveFamily) -> Self {
        match family {
            CurveFamily::SideProfile => Self::SideProfile,
            CurveFamily::HalfBreadth => Self::HalfBreadth,
            CurveFamily::CrossSection { .. } => Self::CrossSection,
        }
    }
}

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    /// Left button; the only one that drags.
    #[default]
    Primary,
    /// Middle button.
    Middle,
    /// Right button.
    Secondary,
}

/// A press, move or release of the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Panel under the pointer, `None` outside every panel.
    pub subplot: Option<Subplot>,
    /// Pointer position in that panel's data coordinates.
    pub position: Point2D,
    /// Button involved.
    pub button: PointerButton,
}

impl PointerEvent {
    /// A primary-button event over `subplot` at `(x, y)`.
    pub fn at(subplot: Subplot, x: f64, y: f64) -> Self {
        Self {
            subplot: Some(subplot),
            position: Point2D::new(x, y),
            button: PointerButton::Primary,
        }
    }

    /// A primary-button event outside every panel.
    pub fn outside(x: f64, y: f64) -> Self {
        Self {
            subplot: None,
            position: Point2D::new(x, y),
            button: PointerButton::Primary,
        }
    }
}
