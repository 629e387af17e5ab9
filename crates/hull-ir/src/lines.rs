//! 2D lines-plan data: control points for the three curve families and the
//! station × waterline offset table.

use serde::{Deserialize, Serialize};

use crate::Point2D;

/// Transverse outline at one longitudinal station.
///
/// Points are `(y, z)` pairs in drawing order. The outline is implicitly
/// closed: the last point connects back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSection {
    /// Longitudinal position of the station.
    pub station: f64,
    /// Outline control points.
    pub points: Vec<Point2D>,
}

impl CrossSection {
    /// Create a cross-section at `station`.
    pub fn new(station: f64, points: Vec<Point2D>) -> Self {
        Self { station, points }
    }
}

/// Versioned control points of a hull's lines plan.
///
/// Every edit must produce a new `line_version`; consumers caching curves
/// or wireframes derived from this data compare versions to invalidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hull2DLineData {
    /// Longitudinal silhouette as `(x, z)` pairs, stations non-decreasing.
    pub side_profile: Vec<Point2D>,
    /// Half-width plan as `(x, y)` pairs. Need not share stations with
    /// the side profile.
    #[serde(default)]
    pub half_breadth: Vec<Point2D>,
    /// Transverse outlines ordered by station.
    #[serde(default)]
    pub cross_sections: Vec<CrossSection>,
    /// Edit counter, starts at 1.
    #[serde(default = "first_version")]
    pub line_version: u64,
}

fn first_version() -> u64 {
    1
}

impl Hull2DLineData {
    /// Create version 1 of a lines plan.
    ///
    /// Cross-sections are sorted by station.
    pub fn new(
        side_profile: Vec<Point2D>,
        half_breadth: Vec<Point2D>,
        mut cross_sections: Vec<CrossSection>,
    ) -> Self {
        cross_sections.sort_by(|a, b| a.station.total_cmp(&b.station));
        Self {
            side_profile,
            half_breadth,
            cross_sections,
            line_version: 1,
        }
    }

    /// An empty lines plan (version 1).
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }

    /// Look up the cross-section at `station`.
    ///
    /// Stations match exactly; they are keys, not measurements.
    pub fn section(&self, station: f64) -> Option<&CrossSection> {
        self.cross_sections.iter().find(|s| s.station == station)
    }

    /// Mutable lookup of the cross-section at `station`.
    pub fn section_mut(&mut self, station: f64) -> Option<&mut CrossSection> {
        self.cross_sections.iter_mut().find(|s| s.station == station)
    }

    /// Insert or replace the cross-section at its station, keeping the
    /// list ordered.
    pub fn set_section(&mut self, section: CrossSection) {
        match self
            .cross_sections
            .binary_search_by(|s| s.station.total_cmp(&section.station))
        {
            Ok(i) => self.cross_sections[i] = section,
            Err(i) => self.cross_sections.insert(i, section),
        }
    }

    /// Stations that carry a cross-section, ascending.
    pub fn section_stations(&self) -> Vec<f64> {
        self.cross_sections.iter().map(|s| s.station).collect()
    }

    /// `(min, max)` station of the side profile, if any.
    pub fn profile_range(&self) -> Option<(f64, f64)> {
        abscissa_range(&self.side_profile)
    }

    /// `(min, max)` station of the half-breadth plan, if any.
    pub fn half_breadth_range(&self) -> Option<(f64, f64)> {
        abscissa_range(&self.half_breadth)
    }
}

fn abscissa_range(points: &[Point2D]) -> Option<(f64, f64)> {
    points.iter().fold(None, |acc, p| match acc {
        None => Some((p.x, p.x)),
        Some((lo, hi)) => Some((lo.min(p.x), hi.max(p.x))),
    })
}

/// Station × waterline half-breadth table.
///
/// `half_breadths[i][j]` is the half-width at `stations[i]` and height
/// `waterlines[j]`. This is the input of the grid lofting mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffsetTable {
    /// Longitudinal stations, strictly increasing.
    pub stations: Vec<f64>,
    /// Waterline heights, strictly increasing.
    pub waterlines: Vec<f64>,
    /// Half-breadths, one row per station.
    pub half_breadths: Vec<Vec<f64>>,
    /// Edit counter, starts at 1.
    #[serde(default = "first_version")]
    pub table_version: u64,
}

impl OffsetTable {
    /// Create version 1 of an offset table.
    pub fn new(stations: Vec<f64>, waterlines: Vec<f64>, half_breadths: Vec<Vec<f64>>) -> Self {
        Self {
            stations,
            waterlines,
            half_breadths,
            table_version: 1,
        }
    }

    /// Half-breadth at grid node `(station, waterline)`.
    pub fn get(&self, station: usize, waterline: usize) -> Option<f64> {
        self.half_breadths.get(station)?.get(waterline).copied()
    }

    /// Number of `(stations, waterlines)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.stations.len(), self.waterlines.len())
    }
}
