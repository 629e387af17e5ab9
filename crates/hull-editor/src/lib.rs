#![warn(missing_docs)]

//! Interactive lines-plan editing for hullcad.
//!
//! [`LinesEditor`] turns pointer presses, moves and releases into control
//! point edits: `Idle → Dragging → Idle`. Every committed drag advances
//! `line_version` by one and is recorded in an audit log of
//! [`InteractionEvent`](hull_ir::InteractionEvent)s. Dense curves are
//! regenerated per family while dragging.
//!
//! # Key types
//!
//! - [`LinesEditor`] - the state machine
//! - [`EditorConfig`] - pick tolerance and per-plot axis bounds
//! - [`PointerEvent`] - front-end input
//! - [`apply_event`] - copy-on-write application of one edit

mod apply;
mod config;
mod defaults;
mod editor;
mod pointer;

pub use apply::apply_event;
pub use config::{AxisBounds, EditorConfig};
pub use editor::{EditorState, EditorSummary, LinesEditor, ReleaseOutcome};
pub use pointer::{PointerButton, PointerEvent, Subplot};

use thiserror::Error;

/// Errors from editing operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// Invalid editor settings.
    #[error("invalid editor config: {0}")]
    InvalidConfig(String),

    /// No cross-section at the given station.
    #[error("no cross-section at station {0}")]
    UnknownSection(f64),

    /// Control point index past the end of its family.
    #[error("{family} has {len} points, no index {index}")]
    IndexOutOfRange {
        /// Family name.
        family: &'static str,
        /// Requested index.
        index: usize,
        /// Number of points in the family.
        len: usize,
    },

    /// The operation is not allowed while a point is being dragged.
    #[error("a drag is in progress")]
    Busy,
}
