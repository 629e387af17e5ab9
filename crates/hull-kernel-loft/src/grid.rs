//! Grid-mode lofting from a station × waterline offset table.

use hull_ir::{Edge, Hull3DWireframeData, HullBasicParams, OffsetTable, Point3D};
use hull_kernel_curve::GridSpline;
use hull_kernel_math::linspace;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::{LoftError, LoftReport, LoftWarning, Result};

/// Output resolution of grid lofting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLoftOptions {
    /// Number of output stations spanning the table's station range.
    pub stations: usize,
    /// Number of output waterlines spanning the table's waterline range.
    pub waterlines: usize,
    /// Bracing edges join the two sides at every n-th station and waterline.
    pub brace_every: usize,
}

impl Default for GridLoftOptions {
    fn default() -> Self {
        Self {
            stations: 21,
            waterlines: 11,
            brace_every: 2,
        }
    }
}

impl GridLoftOptions {
    /// Validate options.
    pub fn validate(&self) -> Result<()> {
        if self.stations < 2 {
            return Err(LoftError::validation("options", "stations must be at least 2"));
        }
        if self.waterlines < 2 {
            return Err(LoftError::validation("options", "waterlines must be at least 2"));
        }
        if self.brace_every == 0 {
            return Err(LoftError::validation("options", "brace_every must be positive"));
        }
        Ok(())
    }

    /// Vertex count of the lofted grid (both sides).
    pub fn vertex_count(&self) -> usize {
        2 * self.stations * self.waterlines
    }
}

/// Loft a symmetric station × waterline grid from an offset table.
///
/// The table is interpolated with a [`GridSpline`] and resampled on
/// `options.stations × options.waterlines` evenly spaced points. Starboard
/// vertex `(s, w)` sits at index `s * W + w`; its port mirror at
/// `S * W + s * W + w`. Each side gets edges along every station and along
/// every waterline; bracing edges join the two sides at every
/// `brace_every`-th station and waterline.
pub fn loft_offsets(
    params: &HullBasicParams,
    table: &OffsetTable,
    options: &GridLoftOptions,
) -> Result<LoftReport> {
    options.validate()?;
    validate_table(table)?;
    info!(
        version = table.table_version,
        lpp = params.lpp,
        stations = options.stations,
        waterlines = options.waterlines,
        "lofting offset grid"
    );

    let spline = GridSpline::fit(&table.stations, &table.waterlines, &table.half_breadths)?;
    let ((x0, x1), (z0, z1)) = spline.extent();
    let xs = linspace(x0, x1, options.stations);
    let zs = linspace(z0, z1, options.waterlines);
    let grid = spline.eval_grid(&xs, &zs)?;

    let (ns, nw) = (options.stations, options.waterlines);
    let block = ns * nw;
    let mut starboard = Vec::with_capacity(block);
    let mut warnings = Vec::new();
    for (s, &x) in xs.iter().enumerate() {
        for (w, &z) in zs.iter().enumerate() {
            let mut y = grid[s][w];
            if !y.is_finite() {
                error!(x, z, "grid half-breadth resolved to {y}");
                return Err(LoftError::Station {
                    x,
                    z,
                    reason: format!("grid half-breadth resolved to {y}"),
                });
            }
            if y < 0.0 {
                warn!(x, z, value = y, "negative grid half-breadth, using its absolute value");
                warnings.push(LoftWarning::NegativeHalfBreadth { x, z, value: y });
                y = y.abs();
            }
            starboard.push(Point3D::new(x, y, z));
        }
    }

    let mut vertices = Vec::with_capacity(options.vertex_count());
    vertices.extend_from_slice(&starboard);
    vertices.extend(starboard.iter().map(|p| Point3D::new(p.x, -p.y, p.z)));

    let mut edges: Vec<Edge> = Vec::new();
    for offset in [0, block] {
        for s in 0..ns {
            for w in 0..nw {
                let i = offset + s * nw + w;
                if w + 1 < nw {
                    edges.push((i, i + 1));
                }
                if s + 1 < ns {
                    edges.push((i, i + nw));
                }
            }
        }
    }
    for s in (0..ns).step_by(options.brace_every) {
        for w in (0..nw).step_by(options.brace_every) {
            let i = s * nw + w;
            edges.push((i, block + i));
        }
    }

    info!(vertices = vertices.len(), edges = edges.len(), "offset grid lofted");
    Ok(LoftReport {
        wireframe: Hull3DWireframeData {
            vertices,
            edges,
            model_version: table.table_version,
        },
        warnings,
    })
}

fn validate_table(table: &OffsetTable) -> Result<()> {
    check_axis("stations", &table.stations)?;
    check_axis("waterlines", &table.waterlines)?;
    let (ns, nw) = (table.stations.len(), table.waterlines.len());
    if table.half_breadths.len() != ns {
        return Err(LoftError::validation(
            "half_breadths",
            format!("expected {ns} rows, got {}", table.half_breadths.len()),
        ));
    }
    if let Some((s, row)) = table.half_breadths.iter().enumerate().find(|(_, r)| r.len() != nw) {
        return Err(LoftError::validation(
            "half_breadths",
            format!("row {s} has {} values, expected {nw}", row.len()),
        ));
    }
    if table.half_breadths.iter().flatten().any(|v| !v.is_finite()) {
        return Err(LoftError::validation("half_breadths", "values must be finite"));
    }
    Ok(())
}

fn check_axis(field: &'static str, axis: &[f64]) -> Result<()> {
    if axis.len() < 2 {
        return Err(LoftError::validation(
            field,
            format!("need at least 2 values, got {}", axis.len()),
        ));
    }
    if axis.iter().any(|v| !v.is_finite()) {
        return Err(LoftError::validation(field, "values must be finite"));
    }
    if let Some(i) = axis.windows(2).position(|w| w[1] <= w[0]) {
        return Err(LoftError::validation(
            field,
            format!("must be strictly increasing, index {} goes from {} to {}", i + 1, axis[i], axis[i + 1]),
        ));
    }
    Ok(())
}
