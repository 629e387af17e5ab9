//! The drag state machine.

use std::fmt;
use std::sync::Arc;

use hull_ir::{CurveFamily, Hull2DLineData, InteractionEvent, InteractionKind, Point2D};
use hull_kernel_curve::reconstruct;
use hull_kernel_math::Point2;
use tracing::{debug, info};

use crate::{defaults, EditError, EditorConfig, PointerButton, PointerEvent};

/// Number of events shown by [`LinesEditor::summary`].
const RECENT_EVENTS: usize = 5;

/// What the editor is doing.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorState {
    /// Waiting for a press.
    Idle,
    /// Holding a control point.
    Dragging {
        /// Family of the held point.
        family: CurveFamily,
        /// Index of the held point.
        index: usize,
    },
}

/// Result of a pointer release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// No drag was in progress.
    Ignored,
    /// The drag was committed as a new version.
    Committed {
        /// The new `line_version`.
        version: u64,
    },
    /// Released outside every panel; the pre-drag snapshot was restored
    /// and the gesture's events dropped from the log.
    Cancelled,
}

#[derive(Debug, Clone)]
struct Drag {
    family: CurveFamily,
    index: usize,
    before: Arc<Hull2DLineData>,
    log_len: usize,
}

/// Interactive editor over a lines plan.
///
/// Holds the current snapshot behind an [`Arc`]. Snapshots handed out by
/// [`LinesEditor::snapshot`] are never changed by later drags; the editor
/// copies on write instead.
///
/// ```
/// use hull_editor::{LinesEditor, PointerEvent, ReleaseOutcome, Subplot};
/// use hull_ir::Hull2DLineData;
///
/// let mut editor = LinesEditor::new(Hull2DLineData::empty());
/// let before = editor.snapshot();
///
/// assert!(editor.press(&PointerEvent::at(Subplot::SideProfile, 6.0, 2.5)));
/// editor.drag(&PointerEvent::at(Subplot::SideProfile, 6.0, 2.8));
/// let outcome = editor.release(&PointerEvent::at(Subplot::SideProfile, 6.0, 2.8));
///
/// assert_eq!(outcome, ReleaseOutcome::Committed { version: 2 });
/// assert_eq!(before.line_version, 1);
/// ```
#[derive(Debug, Clone)]
pub struct LinesEditor {
    config: EditorConfig,
    lines: Arc<Hull2DLineData>,
    drag: Option<Drag>,
    active_section: Option<f64>,
    events: Vec<InteractionEvent>,
    dense_side: Vec<Point2>,
    dense_half: Vec<Point2>,
    dense_section: Vec<Point2>,
}

impl LinesEditor {
    /// Create an editor with default settings.
    ///
    /// Empty curve families are filled with a sample hull; the first
    /// cross-section becomes the active one.
    pub fn new(lines: Hull2DLineData) -> Self {
        Self::build(lines, EditorConfig::default())
    }

    /// Create an editor with custom settings.
    pub fn with_config(lines: Hull2DLineData, config: EditorConfig) -> Result<Self, EditError> {
        config.validate()?;
        Ok(Self::build(lines, config))
    }

    fn build(mut lines: Hull2DLineData, config: EditorConfig) -> Self {
        if lines.side_profile.is_empty() {
            lines.side_profile = defaults::side_profile();
        }
        if lines.half_breadth.is_empty() {
            lines.half_breadth = defaults::half_breadth();
        }
        if lines.cross_sections.is_empty() {
            lines.cross_sections = defaults::cross_sections();
        }
        let active_section = lines.cross_sections.first().map(|s| s.station);
        debug!(
            side_profile = lines.side_profile.len(),
            half_breadth = lines.half_breadth.len(),
            cross_sections = lines.cross_sections.len(),
            "editor initialized"
        );

        let mut editor = Self {
            config,
            lines: Arc::new(lines),
            drag: None,
            active_section,
            events: Vec::new(),
            dense_side: Vec::new(),
            dense_half: Vec::new(),
            dense_section: Vec::new(),
        };
        editor.refresh(&CurveFamily::SideProfile);
        editor.refresh(&CurveFamily::HalfBreadth);
        editor.refresh_section();
        editor
    }

    /// Editor settings.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The current lines plan.
    pub fn lines(&self) -> &Hull2DLineData {
        &self.lines
    }

    /// A shared handle to the current snapshot.
    pub fn snapshot(&self) -> Arc<Hull2DLineData> {
        Arc::clone(&self.lines)
    }

    /// Current state.
    pub fn state(&self) -> EditorState {
        match &self.drag {
            None => EditorState::Idle,
            Some(d) => EditorState::Dragging {
                family: d.family,
                index: d.index,
            },
        }
    }

    /// Whether a control point is held.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Audit log of every interaction event so far.
    pub fn events(&self) -> &[InteractionEvent] {
        &self.events
    }

    /// Station of the cross-section shown in the cross-section plot.
    pub fn active_section(&self) -> Option<f64> {
        self.active_section
    }

    /// Show another cross-section.
    pub fn set_active_section(&mut self, station: f64) -> Result<(), EditError> {
        if self.lines.section(station).is_none() {
            return Err(EditError::UnknownSection(station));
        }
        if self.drag.is_some() {
            return Err(EditError::Busy);
        }
        self.active_section = Some(station);
        self.refresh_section();
        Ok(())
    }

    /// Reconstructed dense curve of a family, as currently displayed.
    ///
    /// Only the active cross-section has a dense curve.
    pub fn dense_curve(&self, family: &CurveFamily) -> Option<&[Point2]> {
        match family {
            CurveFamily::SideProfile => Some(&self.dense_side),
            CurveFamily::HalfBreadth => Some(&self.dense_half),
            CurveFamily::CrossSection { station } if Some(*station) == self.active_section => {
                Some(&self.dense_section)
            }
            CurveFamily::CrossSection { .. } => None,
        }
    }

    /// The control point a press at `position` would grab.
    ///
    /// Families are searched side profile, half-breadth, then active
    /// cross-section, each in point order; the first point within the pick
    /// distance wins.
    pub fn pick(&self, position: Point2D) -> Option<(CurveFamily, usize)> {
        let reach = self.config.pick_distance();
        self.visible_families().into_iter().find_map(|family| {
            family
                .points(&self.lines)?
                .iter()
                .position(|p| p.distance(&position) <= reach)
                .map(|i| (family, i))
        })
    }

    fn visible_families(&self) -> Vec<CurveFamily> {
        let mut families = vec![CurveFamily::SideProfile, CurveFamily::HalfBreadth];
        if let Some(station) = self.active_section {
            families.push(CurveFamily::CrossSection { station });
        }
        families
    }

    /// Handle a pointer press. Returns `true` if a drag started.
    pub fn press(&mut self, event: &PointerEvent) -> bool {
        if self.drag.is_some() || event.button != PointerButton::Primary || event.subplot.is_none() {
            return false;
        }
        let Some((family, index)) = self.pick(event.position) else {
            return false;
        };
        let Some(coords) = family.points(&self.lines).and_then(|p| p.get(index)).copied() else {
            return false;
        };

        debug!(family = family.name(), index, "drag start");
        let log_len = self.events.len();
        self.events
            .push(InteractionEvent::new(InteractionKind::DragStart, family, index, coords));
        self.drag = Some(Drag {
            family,
            index,
            before: Arc::clone(&self.lines),
            log_len,
        });
        true
    }

    /// Handle a pointer move. Returns `true` if the held point moved.
    ///
    /// The new position is clamped to the family's plot bounds and only
    /// that family's dense curve is regenerated. `line_version` is not
    /// changed.
    pub fn drag(&mut self, event: &PointerEvent) -> bool {
        let Some(drag) = &self.drag else {
            return false;
        };
        if event.subplot.is_none() || !event.position.x.is_finite() || !event.position.y.is_finite() {
            return false;
        }
        let (family, index) = (drag.family, drag.index);
        let coords = self.config.bounds(&family).clamp(event.position);

        if !family.replace_point(Arc::make_mut(&mut self.lines), index, coords) {
            return false;
        }
        self.refresh(&family);
        self.events
            .push(InteractionEvent::new(InteractionKind::Dragging, family, index, coords));
        true
    }

    /// Handle a pointer release.
    ///
    /// Inside a panel the drag is committed: `line_version` advances by
    /// exactly one and a `drag_end` event is logged. Outside every panel
    /// the drag is cancelled, the pre-drag snapshot restored and the log
    /// truncated to its length at press time.
    pub fn release(&mut self, event: &PointerEvent) -> ReleaseOutcome {
        let Some(drag) = self.drag.take() else {
            return ReleaseOutcome::Ignored;
        };

        if event.subplot.is_none() {
            debug!(family = drag.family.name(), index = drag.index, "drag cancelled");
            self.lines = drag.before;
            self.events.truncate(drag.log_len);
            self.refresh(&drag.family);
            return ReleaseOutcome::Cancelled;
        }

        let lines = Arc::make_mut(&mut self.lines);
        let coords = drag
            .family
            .points(lines)
            .and_then(|p| p.get(drag.index))
            .copied();
        lines.line_version += 1;
        let version = lines.line_version;
        if let Some(coords) = coords {
            self.events.push(InteractionEvent::new(
                InteractionKind::DragEnd,
                drag.family,
                drag.index,
                coords,
            ));
        }
        info!(family = drag.family.name(), index = drag.index, version, "edit committed");
        ReleaseOutcome::Committed { version }
    }

    /// Replace the current snapshot with `event` applied, as if the point
    /// had been dragged there. Not allowed mid-drag.
    pub fn apply(&mut self, event: &InteractionEvent) -> Result<u64, EditError> {
        if self.drag.is_some() {
            return Err(EditError::Busy);
        }
        let next = crate::apply_event(&self.lines, event)?;
        let version = next.line_version;
        self.lines = Arc::new(next);
        self.refresh(&event.family);
        self.events.push(event.clone());
        Ok(version)
    }

    /// Counts, version, active section and the most recent events.
    pub fn summary(&self) -> EditorSummary {
        let skip = self.events.len().saturating_sub(RECENT_EVENTS);
        EditorSummary {
            side_profile_points: self.lines.side_profile.len(),
            half_breadth_points: self.lines.half_breadth.len(),
            cross_sections: self.lines.cross_sections.len(),
            active_section: self.active_section,
            line_version: self.lines.line_version,
            event_count: self.events.len(),
            recent_events: self.events[skip..].to_vec(),
        }
    }

    fn refresh(&mut self, family: &CurveFamily) {
        match family {
            CurveFamily::SideProfile => self.dense_side = dense(&self.lines.side_profile, false),
            CurveFamily::HalfBreadth => self.dense_half = dense(&self.lines.half_breadth, false),
            CurveFamily::CrossSection { station } => {
                if Some(*station) == self.active_section {
                    self.refresh_section();
                }
            }
        }
    }

    fn refresh_section(&mut self) {
        self.dense_section = self
            .active_section
            .and_then(|station| self.lines.section(station))
            .map(|s| dense(&s.points, true))
            .unwrap_or_default();
    }
}

fn dense(points: &[Point2D], closed: bool) -> Vec<Point2> {
    let control: Vec<Point2> = points.iter().map(|&p| p.into()).collect();
    reconstruct(&control, closed)
}

/// Snapshot of the editor's information panel.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSummary {
    /// Side profile control points.
    pub side_profile_points: usize,
    /// Half-breadth control points.
    pub half_breadth_points: usize,
    /// Number of cross-sections.
    pub cross_sections: usize,
    /// Station of the displayed cross-section.
    pub active_section: Option<f64>,
    /// Current `line_version`.
    pub line_version: u64,
    /// Total events logged.
    pub event_count: usize,
    /// The last few events, oldest first.
    pub recent_events: Vec<InteractionEvent>,
}

impl fmt::Display for EditorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Side profile points: {}", self.side_profile_points)?;
        writeln!(f, "Half-breadth points: {}", self.half_breadth_points)?;
        writeln!(f, "Cross sections: {}", self.cross_sections)?;
        match self.active_section {
            Some(x) => writeln!(f, "Current cross section: x={x}")?,
            None => writeln!(f, "Current cross section: none")?,
        }
        writeln!(f, "Data version: {}", self.line_version)?;
        writeln!(f, "Event count: {}", self.event_count)?;
        for ev in &self.recent_events {
            let kind = match ev.kind {
                InteractionKind::DragStart => "drag_start",
                InteractionKind::Dragging => "dragging",
                InteractionKind::DragEnd => "drag_end",
            };
            writeln!(f, "- {kind}: {}[{}]", ev.family.name(), ev.point_index)?;
        }
        Ok(())
    }
}
