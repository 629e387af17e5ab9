#![warn(missing_docs)]

//! Hull lofting kernel facade for hullcad.
//!
//! Bundles the curve reconstructor, the lofter and the editor behind a
//! small API: [`generate_initial_lines`] derives a starting lines plan
//! from principal dimensions, and [`HullModel`] keeps params, the current
//! lines snapshot and a version-keyed wireframe cache together.
//!
//! # Example
//!
//! ```
//! use hull_ir::HullBasicParams;
//! use hull_kernel::{generate_initial_lines, loft};
//!
//! let params = HullBasicParams::new(60.0, 10.0, 6.0, 4.0, 1500.0);
//! let lines = generate_initial_lines(&params);
//! let wire = loft(&params, &lines).unwrap();
//! assert_eq!(wire.edges.len(), 3 * 50 - 2);
//! ```

pub use hull_editor;
pub use hull_ir;
pub use hull_kernel_curve;
pub use hull_kernel_loft;
pub use hull_kernel_math;

pub use hull_kernel_curve::{reconstruct, reconstruct_detailed};
pub use hull_kernel_loft::{loft, loft_offsets, loft_report, GridLoftOptions, LoftReport, LoftWarning};

mod initial;
mod model;

pub use initial::generate_initial_lines;
pub use model::HullModel;

use hull_editor::EditError;
use hull_ir::ParamError;
use hull_kernel_loft::LoftError;
use thiserror::Error;

/// Errors surfaced by the facade.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    /// Principal dimensions break a design rule.
    #[error(transparent)]
    Params(#[from] ParamError),

    /// Lofting failed.
    #[error(transparent)]
    Loft(#[from] LoftError),

    /// An edit could not be applied.
    #[error(transparent)]
    Edit(#[from] EditError),
}
