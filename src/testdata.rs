//! Test data for convex hull and defect analysis tests
//!
//! This module provides point-set generators used by the integration tests:
//! random clouds for property checks and fixed shapes with known hulls.

use crate::types::Point;
use rand::Rng;

/// Generate n uniformly random points in the square [0, size] x [0, size]
pub fn random_points_in_square(n: usize, size: f64) -> Vec<Point> {
    let mut rng = rand::rng();
    let mut points = Vec::with_capacity(n);

    for _ in 0..n {
        points.push(Point::new(
            rng.random::<f64>() * size,
            rng.random::<f64>() * size,
        ));
    }

    points
}

/// Unit square corners plus the center point
///
/// The hull is the four corners; the center is the single interior point, at
/// distance 0.5 from every edge.
pub fn unit_square_with_center() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.5, 0.5),
    ]
}

/// n evenly spaced points on the x-axis, all collinear
pub fn collinear_run(n: usize) -> Vec<Point> {
    (0..n).map(|i| Point::new(i as f64, 0.0)).collect()
}

/// n points on a circle of the given radius, centered at the origin
///
/// Every point is a hull vertex (for n >= 3 the polygon is strictly convex).
pub fn regular_polygon(n: usize, radius: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            Point::from_polar(angle, radius)
        })
        .collect()
}

/// A regular polygon ring plus m random interior points
///
/// Interior points are sampled within half the ring radius, so they are
/// strictly inside the hull.
pub fn ring_with_interior(n: usize, m: usize, radius: f64) -> Vec<Point> {
    let mut rng = rand::rng();
    let mut points = regular_polygon(n, radius);

    for _ in 0..m {
        let angle = rng.random::<f64>() * 2.0 * std::f64::consts::PI;
        let r = rng.random::<f64>() * radius * 0.5;
        points.push(Point::from_polar(angle, r));
    }

    points
}
