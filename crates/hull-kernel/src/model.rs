//! Params + lines snapshot with a version-keyed wireframe cache.

use std::sync::Arc;

use hull_editor::apply_event;
use hull_ir::{Hull2DLineData, Hull3DWireframeData, HullBasicParams, InteractionEvent};
use hull_kernel_loft::{loft_report, LoftWarning};
use tracing::debug;

use crate::{generate_initial_lines, KernelError};

/// A hull design: validated principal dimensions, the current lines plan
/// snapshot and a lazily lofted wireframe.
///
/// The cached wireframe is reused only while its `model_version` matches
/// the current `line_version`.
///
/// ```
/// use hull_ir::HullBasicParams;
/// use hull_kernel::HullModel;
///
/// let mut model = HullModel::from_params(HullBasicParams::new(60.0, 10.0, 6.0, 4.0, 1500.0)).unwrap();
/// let wire = model.wireframe().unwrap();
/// assert_eq!(wire.vertices.len(), 100);
/// assert_eq!(wire.model_version, 1);
/// ```
#[derive(Debug, Clone)]
pub struct HullModel {
    params: HullBasicParams,
    lines: Arc<Hull2DLineData>,
    cache: Option<Cached>,
}

#[derive(Debug, Clone)]
struct Cached {
    wireframe: Arc<Hull3DWireframeData>,
    warnings: Vec<LoftWarning>,
}

impl HullModel {
    /// Create a model from validated parameters and an existing lines plan.
    pub fn new(params: HullBasicParams, lines: Hull2DLineData) -> Result<Self, KernelError> {
        params.validate()?;
        Ok(Self {
            params,
            lines: Arc::new(lines),
            cache: None,
        })
    }

    /// Create a model whose lines plan is generated from the parameters.
    pub fn from_params(params: HullBasicParams) -> Result<Self, KernelError> {
        params.validate()?;
        let lines = generate_initial_lines(&params);
        Ok(Self {
            params,
            lines: Arc::new(lines),
            cache: None,
        })
    }

    /// Principal dimensions.
    pub fn params(&self) -> &HullBasicParams {
        &self.params
    }

    /// Current lines plan.
    pub fn lines(&self) -> &Hull2DLineData {
        &self.lines
    }

    /// Shared handle to the current lines plan.
    pub fn snapshot(&self) -> Arc<Hull2DLineData> {
        Arc::clone(&self.lines)
    }

    /// Replace the lines plan, e.g. with an editor snapshot.
    pub fn set_lines(&mut self, lines: Arc<Hull2DLineData>) {
        self.lines = lines;
    }

    /// Apply one edit as a new snapshot. Returns the new `line_version`.
    pub fn apply(&mut self, event: &InteractionEvent) -> Result<u64, KernelError> {
        let next = apply_event(&self.lines, event)?;
        let version = next.line_version;
        self.lines = Arc::new(next);
        Ok(version)
    }

    /// Whether [`HullModel::wireframe`] would be served from cache.
    pub fn is_cached(&self) -> bool {
        self.cache
            .as_ref()
            .is_some_and(|c| c.wireframe.model_version == self.lines.line_version)
    }

    /// The wireframe for the current lines plan, lofting it if the cached
    /// one is stale.
    pub fn wireframe(&mut self) -> Result<Arc<Hull3DWireframeData>, KernelError> {
        if let Some(cached) = self.cache.as_ref().filter(|_| self.is_cached()) {
            debug!(version = self.lines.line_version, "wireframe cache hit");
            return Ok(Arc::clone(&cached.wireframe));
        }
        let report = loft_report(&self.params, &self.lines)?;
        let wireframe = Arc::new(report.wireframe);
        self.cache = Some(Cached {
            wireframe: Arc::clone(&wireframe),
            warnings: report.warnings,
        });
        Ok(wireframe)
    }

    /// Warnings raised by the most recent loft.
    pub fn warnings(&self) -> &[LoftWarning] {
        self.cache
            .as_ref()
            .map(|c| c.warnings.as_slice())
            .unwrap_or_default()
    }
}
