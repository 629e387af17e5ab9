//! Sample hull used to fill empty curve families.

use hull_ir::{points, CrossSection, Point2D};

pub(crate) fn side_profile() -> Vec<Point2D> {
    points(&[
        (0.0, 0.0),
        (1.5, 1.0),
        (3.0, 1.8),
        (4.0, 2.2),
        (6.0, 2.5),
        (8.0, 2.2),
        (9.0, 1.8),
        (10.5, 1.0),
        (12.0, 0.0),
    ])
}

pub(crate) fn half_breadth() -> Vec<Point2D> {
    points(&[
        (0.0, 0.5),
        (2.0, 1.0),
        (4.0, 1.8),
        (6.0, 2.2),
        (8.0, 2.0),
        (10.0, 1.5),
        (12.0, 0.8),
    ])
}

pub(crate) fn cross_sections() -> Vec<CrossSection> {
    vec![
        CrossSection::new(
            3.0,
            points(&[
                (0.0, 0.0),
                (1.0, 0.8),
                (1.5, 1.5),
                (1.0, 2.2),
                (0.0, 2.5),
                (-1.0, 2.2),
                (-1.5, 1.5),
                (-1.0, 0.8),
                (0.0, 0.0),
            ]),
        ),
        CrossSection::new(
            6.0,
            points(&[
                (0.0, 0.0),
                (1.5, 0.6),
                (2.0, 1.8),
                (1.5, 2.8),
                (0.0, 3.0),
                (-1.5, 2.8),
                (-2.0, 1.8),
                (-1.5, 0.6),
                (0.0, 0.0),
            ]),
        ),
        CrossSection::new(
            9.0,
            points(&[
                (0.0, 0.0),
                (1.2, 0.4),
                (1.8, 1.2),
                (1.2, 2.0),
                (0.0, 2.2),
                (-1.2, 2.0),
                (-1.8, 1.2),
                (-1.2, 0.4),
                (0.0, 0.0),
            ]),
        ),
    ]
}
