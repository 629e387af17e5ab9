//! Error types for lofting.

use hull_kernel_curve::CurveError;
use thiserror::Error;

/// Errors that can occur while lofting a wireframe.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoftError {
    /// Input data is missing, too short or out of order.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// Name of the offending input field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// The half-breadth curve has no points.
    #[error("half-breadth curve is empty")]
    EmptyInput,

    /// A station's half-breadth resolved to a non-finite value.
    #[error("half-breadth at x={x}, z={z} could not be resolved: {reason}")]
    Station {
        /// Longitudinal position of the station.
        x: f64,
        /// Height of the sample.
        z: f64,
        /// Failure description.
        reason: String,
    },

    /// The offset table could not be interpolated.
    #[error("offset table interpolation failed: {0}")]
    Interpolation(#[from] CurveError),
}

impl LoftError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// The offending field for validation failures.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type for loft operations.
pub type Result<T> = std::result::Result<T, LoftError>;
