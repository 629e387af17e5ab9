#![warn(missing_docs)]

//! Wireframe lofting for the hullcad kernel.
//!
//! Two strategies produce the same [`Hull3DWireframeData`] shape:
//!
//! - [`loft`] - profile mode: one starboard/port vertex pair per side
//!   profile point, half-breadths resolved from the half-breadth curve
//! - [`loft_offsets`] - grid mode: a station × waterline vertex grid
//!   interpolated from an [`OffsetTable`]
//!
//! [`LoftSource`] selects between them by the 2D representation supplied.
//! The input is never mutated and partial wireframes are never returned.

pub mod error;
mod grid;
mod profile;
mod resolver;

pub use error::{LoftError, Result};
pub use grid::{loft_offsets, GridLoftOptions};
pub use profile::{loft, loft_report};
pub use resolver::{make_half_breadth_fn, HalfBreadthFn};

use hull_ir::{Hull2DLineData, Hull3DWireframeData, HullBasicParams, OffsetTable};
use serde::Serialize;

/// A non-fatal condition noticed while lofting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoftWarning {
    /// The half-breadth samples lie entirely outside the side profile's
    /// station range, so every half-breadth is extrapolated.
    RangeMismatch {
        /// Station range of the side profile.
        profile: (f64, f64),
        /// Station range of the half-breadth curve.
        half_breadth: (f64, f64),
    },
    /// A station lies outside the half-breadth curve's sampled range, so
    /// its half-breadth was extrapolated (or held at the end value when the
    /// curve has two samples).
    Extrapolated {
        /// Station.
        x: f64,
        /// Height.
        z: f64,
        /// Station range of the half-breadth samples.
        domain: (f64, f64),
    },
    /// A negative half-breadth was replaced by its absolute value.
    NegativeHalfBreadth {
        /// Station.
        x: f64,
        /// Height.
        z: f64,
        /// The resolved (negative) value.
        value: f64,
    },
}

impl std::fmt::Display for LoftWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RangeMismatch { profile, half_breadth } => write!(
                f,
                "half-breadth stations [{:.3}, {:.3}] do not overlap side profile [{:.3}, {:.3}]",
                half_breadth.0, half_breadth.1, profile.0, profile.1
            ),
            Self::Extrapolated { x, z, domain } => write!(
                f,
                "station x={x:.3}, z={z:.3} outside half-breadth range [{:.3}, {:.3}]",
                domain.0, domain.1
            ),
            Self::NegativeHalfBreadth { x, z, value } => {
                write!(f, "negative half-breadth {value:.4} at x={x:.3}, z={z:.3} clamped")
            }
        }
    }
}

/// A lofted wireframe plus the warnings raised while building it.
#[derive(Debug, Clone)]
pub struct LoftReport {
    /// The wireframe.
    pub wireframe: Hull3DWireframeData,
    /// Non-fatal warnings, in the order they were raised.
    pub warnings: Vec<LoftWarning>,
}

/// The 2D representation to loft from.
#[derive(Debug, Clone, Copy)]
pub enum LoftSource<'a> {
    /// Side profile plus half-breadth curve.
    Profile(&'a Hull2DLineData),
    /// Station × waterline offset table, resampled at the given resolution.
    Offsets(&'a OffsetTable, GridLoftOptions),
}

impl LoftSource<'_> {
    /// Loft with the strategy matching this source.
    pub fn loft(&self, params: &HullBasicParams) -> Result<LoftReport> {
        match self {
            Self::Profile(lines) => loft_report(params, lines),
            Self::Offsets(table, options) => loft_offsets(params, table, options),
        }
    }
}
