//! Starting lines plan derived from principal dimensions.

use hull_ir::{CrossSection, Hull2DLineData, HullBasicParams, Point2D};
use hull_kernel_math::linspace;
use tracing::debug;

/// Stations along the side profile and half-breadth plan.
const STATIONS: usize = 50;

/// Length of the stern and bow ramps on hulls of 20 m and over.
const RAMP_LENGTH: f64 = 5.0;

/// Half-width at the deck relative to the waterline half-width.
const DECK_TAPER: f64 = 0.9;

/// Generate version 1 of a lines plan from principal dimensions.
///
/// Coordinates are centered amidships: x runs from `-Lpp/2` (aft
/// perpendicular) to `Lpp/2` (forward perpendicular).
///
/// - The side profile rises linearly from the keel to the draft over the
///   aft ramp, holds the draft, and falls back over the forward ramp.
/// - The half-breadth is `(B/2)(1 - (2x/Lpp)^4)`: full amidships, zero at
///   both perpendiculars.
/// - Cross-sections at `-Lpp/4`, `0` and `Lpp/4` are wall-sided up to the
///   draft and taper to 90 % of their half-width at the depth.
///
/// The parameters are assumed valid.
pub fn generate_initial_lines(params: &HullBasicParams) -> Hull2DLineData {
    let lpp = params.lpp;
    let half_length = lpp / 2.0;
    let ramp = if lpp >= 4.0 * RAMP_LENGTH { RAMP_LENGTH } else { lpp / 4.0 };
    let stations = linspace(-half_length, half_length, STATIONS);

    let side_profile = stations
        .iter()
        .map(|&x| Point2D::new(x, profile_height(x, half_length, ramp, params.draft)))
        .collect();
    let half_breadth = stations
        .iter()
        .map(|&x| Point2D::new(x, half_breadth_at(x, params)))
        .collect();
    let cross_sections = [-lpp / 4.0, 0.0, lpp / 4.0]
        .into_iter()
        .map(|x| section_outline(x, half_breadth_at(x, params), params))
        .collect();

    debug!(lpp, ramp, "generated initial lines");
    Hull2DLineData::new(side_profile, half_breadth, cross_sections)
}

fn profile_height(x: f64, half_length: f64, ramp: f64, draft: f64) -> f64 {
    let from_stern = x + half_length;
    let to_bow = half_length - x;
    if from_stern < ramp {
        draft * from_stern / ramp
    } else if to_bow < ramp {
        draft * to_bow / ramp
    } else {
        draft
    }
}

fn half_breadth_at(x: f64, params: &HullBasicParams) -> f64 {
    let s = 2.0 * x / params.lpp;
    (params.breadth / 2.0 * (1.0 - s.powi(4))).max(0.0)
}

fn section_outline(station: f64, half_width: f64, params: &HullBasicParams) -> CrossSection {
    let (t, d) = (params.draft, params.depth);
    let deck = DECK_TAPER * half_width;
    CrossSection::new(
        station,
        vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(half_width, 0.0),
            Point2D::new(half_width, t),
            Point2D::new(deck, d),
            Point2D::new(-deck, d),
            Point2D::new(-half_width, t),
            Point2D::new(-half_width, 0.0),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn params() -> HullBasicParams {
        HullBasicParams::new(100.0, 16.0, 10.0, 6.0, 5000.0)
    }

    #[test]
    fn test_station_layout() {
        let lines = generate_initial_lines(&params());
        assert_eq!(lines.line_version, 1);
        assert_eq!(lines.side_profile.len(), 50);
        assert_eq!(lines.half_breadth.len(), 50);
        assert_eq!(lines.side_profile[0].x, -50.0);
        assert_eq!(lines.side_profile[49].x, 50.0);
        assert!(lines.side_profile.windows(2).all(|w| w[1].x > w[0].x));
    }

    #[test]
    fn test_profile_ramps() {
        let lines = generate_initial_lines(&params());
        let p = &lines.side_profile;
        assert_abs_diff_eq!(p[0].y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p[49].y, 0.0, epsilon = 1e-12);
        // Second station is 100/49 m from the stern, inside the 5 m ramp.
        assert_abs_diff_eq!(p[1].y, 6.0 * (100.0 / 49.0) / 5.0, epsilon = 1e-9);
        assert!(p[10..40].iter().all(|q| q.y == 6.0));
    }

    #[test]
    fn test_short_hull_ramps_shrink() {
        let p = HullBasicParams::new(12.0, 4.0, 3.0, 2.5, 100.0);
        let lines = generate_initial_lines(&p);
        assert!(lines.side_profile.iter().all(|q| (0.0..=2.5).contains(&q.y)));
        assert!(lines.side_profile.iter().any(|q| q.y == 2.5));
    }

    #[test]
    fn test_half_breadth_shape() {
        let lines = generate_initial_lines(&params());
        let hb = &lines.half_breadth;
        assert_abs_diff_eq!(hb[0].y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hb[49].y, 0.0, epsilon = 1e-12);
        let max = hb.iter().map(|q| q.y).fold(0.0, f64::max);
        assert!(max <= 8.0 && max > 7.99);
    }

    #[test]
    fn test_sections() {
        let lines = generate_initial_lines(&params());
        assert_eq!(lines.section_stations(), vec![-25.0, 0.0, 25.0]);
        let mid = lines.section(0.0).unwrap();
        assert_eq!(mid.points[1], Point2D::new(8.0, 0.0));
        assert_eq!(mid.points[2], Point2D::new(8.0, 6.0));
        assert_abs_diff_eq!(mid.points[3].x, 7.2, epsilon = 1e-12);
        assert_eq!(mid.points[3].y, 10.0);
        let quarter = lines.section(25.0).unwrap();
        assert_abs_diff_eq!(quarter.points[1].x, 8.0 * (1.0 - 0.0625), epsilon = 1e-12);
    }
}
