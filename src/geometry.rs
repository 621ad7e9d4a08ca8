//! Geometric utility functions

use crate::EPSILON;
use crate::types::Point;

/// Signed cross product of the vectors (o→a) and (o→b)
///
/// The sign classifies the turn at `a` looking toward `b`:
/// - positive: counterclockwise (left turn)
/// - negative: clockwise (right turn)
/// - zero: o, a, b are collinear
///
/// The magnitude is the signed area of the parallelogram spanned by the two
/// vectors. Behavior for non-finite coordinates is undefined.
pub fn orientation(o: &Point, a: &Point, b: &Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Project a point onto the closed segment [a, b]
///
/// Computes the projection parameter t of `p` onto the infinite line through
/// `a` and `b`, clamps t to [0, 1] so the result lies within the segment, and
/// returns the clamped point together with the Euclidean distance from `p` to
/// it. A zero-length segment (a == b) projects onto `a` itself.
pub fn project_onto_segment(p: &Point, a: &Point, b: &Point) -> (Point, f64) {
    let ab = b.sub(a);
    let len_sq = ab.dot(&ab);

    // Zero-length edge: the projection is the (single) endpoint
    if len_sq < EPSILON {
        return (*a, p.distance(a));
    }

    let t = (p.sub(a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    let projection = Point::new(a.x + t * ab.x, a.y + t * ab.y);
    let dist = p.distance(&projection);

    (projection, dist)
}
