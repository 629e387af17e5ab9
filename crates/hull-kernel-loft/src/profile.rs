//! Profile-mode lofting: side profile plus half-breadth curve.

use hull_ir::{Edge, Hull2DLineData, Hull3DWireframeData, HullBasicParams, Point3D};
use tracing::{debug, error, info, warn};

use crate::{make_half_breadth_fn, LoftError, LoftReport, LoftWarning, Result};

/// Loft a symmetric wireframe from the side profile and half-breadth curve.
///
/// Each side-profile point `i` at `(x, z)` becomes a starboard vertex
/// `(x, y, z)` at index `2i` and a port vertex `(x, -y, z)` at `2i + 1`,
/// where `y` is the half-breadth at `x`. Edges join each station's pair,
/// then run along each side between adjacent stations.
///
/// # Errors
///
/// - [`LoftError::Validation`] if the side profile has fewer than two
///   points or decreasing stations, or the half-breadth curve is empty
/// - [`LoftError::Station`] if a station's half-breadth is not finite
///
/// Stations outside the half-breadth samples' range are reported as
/// [`LoftWarning::Extrapolated`] by [`loft_report`].
///
/// # Example
///
/// ```
/// use hull_ir::{points, Hull2DLineData, HullBasicParams};
/// use hull_kernel_loft::loft;
///
/// let lines = Hull2DLineData::new(
///     points(&[(0.0, 0.0), (6.0, 2.0), (12.0, 0.0)]),
///     points(&[(0.0, 0.5), (6.0, 2.0), (12.0, 0.5)]),
///     vec![],
/// );
/// let params = HullBasicParams::new(12.0, 4.0, 3.0, 2.5, 100.0);
/// let wire = loft(&params, &lines).unwrap();
/// assert_eq!(wire.vertices.len(), 6);
/// assert_eq!(wire.edges.len(), 7);
/// ```
pub fn loft(params: &HullBasicParams, lines: &Hull2DLineData) -> Result<Hull3DWireframeData> {
    loft_report(params, lines).map(|r| r.wireframe)
}

/// [`loft`], also returning the non-fatal warnings raised along the way.
pub fn loft_report(params: &HullBasicParams, lines: &Hull2DLineData) -> Result<LoftReport> {
    info!(version = lines.line_version, lpp = params.lpp, "lofting wireframe");
    let mut warnings = validate_lines(lines)?;
    let half_breadth = make_half_breadth_fn(&lines.half_breadth)?;
    let domain = half_breadth.domain();
    let mut extrapolated = 0;

    let profile = &lines.side_profile;
    let mut vertices = Vec::with_capacity(2 * profile.len());
    let mut edges: Vec<Edge> = Vec::with_capacity(3 * profile.len() - 2);

    for (i, p) in profile.iter().enumerate() {
        let (x, z) = (p.x, p.y);
        if let Some((lo, hi)) = domain.filter(|(lo, hi)| x < *lo || x > *hi) {
            debug!(x, z, lo, hi, "station outside half-breadth range");
            warnings.push(LoftWarning::Extrapolated { x, z, domain: (lo, hi) });
            extrapolated += 1;
        }
        let mut y = half_breadth.eval(x);
        if !y.is_finite() {
            error!(x, z, "half-breadth resolved to {y}");
            return Err(LoftError::Station {
                x,
                z,
                reason: format!("half-breadth resolved to {y}"),
            });
        }
        if y < 0.0 {
            warn!(x, value = y, "negative half-breadth, using its absolute value");
            warnings.push(LoftWarning::NegativeHalfBreadth { x, z, value: y });
            y = y.abs();
        }
        vertices.push(Point3D::new(x, y, z));
        vertices.push(Point3D::new(x, -y, z));
        edges.push((2 * i, 2 * i + 1));
    }

    if extrapolated > 0 {
        warn!(stations = extrapolated, "half-breadths extrapolated outside the sampled range");
    }

    for i in 0..profile.len() - 1 {
        edges.push((2 * i, 2 * (i + 1)));
        edges.push((2 * i + 1, 2 * (i + 1) + 1));
    }

    info!(vertices = vertices.len(), edges = edges.len(), "wireframe lofted");
    Ok(LoftReport {
        wireframe: Hull3DWireframeData {
            vertices,
            edges,
            model_version: lines.line_version,
        },
        warnings,
    })
}

fn validate_lines(lines: &Hull2DLineData) -> Result<Vec<LoftWarning>> {
    let profile = &lines.side_profile;
    if profile.is_empty() {
        return Err(LoftError::validation("side_profile", "no points"));
    }
    if profile.len() < 2 {
        return Err(LoftError::validation(
            "side_profile",
            format!("need at least 2 points, got {}", profile.len()),
        ));
    }
    if lines.half_breadth.is_empty() {
        return Err(LoftError::validation("half_breadth", "no points"));
    }
    if let Some(i) = profile.windows(2).position(|w| !(w[1].x >= w[0].x)) {
        return Err(LoftError::validation(
            "side_profile",
            format!("stations must be non-decreasing, index {} goes from {} to {}", i + 1, profile[i].x, profile[i + 1].x),
        ));
    }

    let mut warnings = Vec::new();
    if let (Some(profile), Some(half)) = (lines.profile_range(), lines.half_breadth_range()) {
        if half.1 < profile.0 || half.0 > profile.1 {
            warn!(
                profile_min = profile.0,
                profile_max = profile.1,
                half_breadth_min = half.0,
                half_breadth_max = half.1,
                "half-breadth range does not overlap the side profile, results are extrapolated"
            );
            warnings.push(LoftWarning::RangeMismatch { profile, half_breadth: half });
        }
    }
    Ok(warnings)
}
