//! Tensor-product interpolation over a station × waterline table.

use crate::{CubicSpline, CurveError};

/// A 1D interpolant whose kind follows the number of samples: one sample is
/// a constant, two or more a natural cubic spline (a straight line for two).
#[derive(Debug, Clone)]
pub enum Interpolant1D {
    /// Single sample, held everywhere.
    Constant(f64),
    /// Natural cubic spline through the samples.
    Spline(CubicSpline),
}

impl Interpolant1D {
    /// Fit to strictly increasing `xs` with ordinates `ys`.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self, CurveError> {
        match (xs.len(), ys.len()) {
            (a, b) if a != b => Err(CurveError::LengthMismatch(a, b)),
            (0, _) => Err(CurveError::TooFewPoints { needed: 1, got: 0 }),
            (1, _) if ys[0].is_finite() => Ok(Self::Constant(ys[0])),
            (1, _) => Err(CurveError::NonFinite),
            _ => CubicSpline::natural(xs, ys).map(Self::Spline),
        }
    }

    /// Evaluate at `x`. Splines continue their end polynomials outside the
    /// sampled range.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Constant(v) => *v,
            Self::Spline(s) => s.eval(x),
        }
    }
}

/// Bivariate interpolation of half-breadths over stations and waterlines.
///
/// Each station row is interpolated along the waterlines, then the column
/// of row values is interpolated along the stations. Query points are
/// clamped into the table's extent.
#[derive(Debug, Clone)]
pub struct GridSpline {
    stations: Vec<f64>,
    waterlines: Vec<f64>,
    rows: Vec<Interpolant1D>,
}

impl GridSpline {
    /// Fit to a table with `values[s][w]` at `(stations[s], waterlines[w])`.
    ///
    /// Both axes must be strictly increasing and every row must have one
    /// value per waterline.
    pub fn fit(stations: &[f64], waterlines: &[f64], values: &[Vec<f64>]) -> Result<Self, CurveError> {
        if values.len() != stations.len() {
            return Err(CurveError::LengthMismatch(stations.len(), values.len()));
        }
        if stations.is_empty() {
            return Err(CurveError::TooFewPoints { needed: 1, got: 0 });
        }
        if let Some(i) = stations.windows(2).position(|w| !(w[1] > w[0])) {
            return Err(CurveError::NotIncreasing(i + 1));
        }
        let rows = values
            .iter()
            .map(|row| Interpolant1D::fit(waterlines, row))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            stations: stations.to_vec(),
            waterlines: waterlines.to_vec(),
            rows,
        })
    }

    /// Station and waterline extents `((x_min, x_max), (z_min, z_max))`.
    pub fn extent(&self) -> ((f64, f64), (f64, f64)) {
        let first_last = |v: &[f64]| (v[0], v[v.len() - 1]);
        (first_last(&self.stations), first_last(&self.waterlines))
    }

    /// Interpolated value at station `x`, waterline `z`.
    pub fn eval(&self, x: f64, z: f64) -> Result<f64, CurveError> {
        let ((x0, x1), _) = self.extent();
        let column = self.column_at(z)?;
        Ok(column.eval(x.clamp(x0, x1)))
    }

    /// Values on the full grid `xs × zs`, indexed `[ix][iz]`.
    pub fn eval_grid(&self, xs: &[f64], zs: &[f64]) -> Result<Vec<Vec<f64>>, CurveError> {
        let ((x0, x1), _) = self.extent();
        let columns = zs
            .iter()
            .map(|&z| self.column_at(z))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(xs
            .iter()
            .map(|&x| {
                let x = x.clamp(x0, x1);
                columns.iter().map(|c| c.eval(x)).collect()
            })
            .collect())
    }

    fn column_at(&self, z: f64) -> Result<Interpolant1D, CurveError> {
        let (_, (z0, z1)) = self.extent();
        let z = z.clamp(z0, z1);
        let column: Vec<f64> = self.rows.iter().map(|r| r.eval(z)).collect();
        Interpolant1D::fit(&self.stations, &column)
    }
}
