//! Monotone chain (Andrew's) algorithm for 2D convex hulls
//!
//! Based on:
//! - Andrew, A.M., "Another efficient algorithm for convex hulls in two
//!   dimensions," Information Processing Letters, 9(5):216-219, 1979.
//!
//! Equivalent in result to Graham's scan, but driven by lexicographic
//! coordinate sorting instead of polar-angle sorting. Runs in O(n log n),
//! dominated by the sort.

use crate::geometry::orientation;
use crate::types::{ConvexHull2D, Point};

/// Build a 2D convex hull using the monotone chain algorithm
///
/// The result is counterclockwise, starts at the leftmost-lowest point, and
/// contains no three consecutive collinear vertices. Degenerate inputs are
/// valid: an empty input yields an empty hull, and fewer than 3 distinct
/// points yield the sorted, deduplicated input as a degenerate hull.
pub fn monotone_chain(points: &[Point]) -> ConvexHull2D {
    let mut sorted = points.to_vec();
    sorted.sort_by(Point::lex_cmp);
    // Duplicate coordinates never survive the turn test; removing them up
    // front also makes the distinct-point count available for the
    // degenerate cases
    sorted.dedup_by(|a, b| a.key() == b.key());

    if sorted.len() < 3 {
        log::debug!(
            "monotone_chain: degenerate input, {} distinct of {} points",
            sorted.len(),
            points.len()
        );
        return ConvexHull2D::new(sorted);
    }

    // Lower chain, left to right. The <= 0 tie-break drops collinear
    // intermediates so only strictly convex vertices survive.
    let mut lower: Vec<Point> = Vec::with_capacity(sorted.len());
    for &p in &sorted {
        while lower.len() >= 2
            && orientation(&lower[lower.len() - 2], &lower[lower.len() - 1], &p) <= 0.0
        {
            lower.pop();
        }
        lower.push(p);
    }

    // Upper chain, right to left, same removal rule
    let mut upper: Vec<Point> = Vec::with_capacity(sorted.len());
    for &p in sorted.iter().rev() {
        while upper.len() >= 2
            && orientation(&upper[upper.len() - 2], &upper[upper.len() - 1], &p) <= 0.0
        {
            upper.pop();
        }
        upper.push(p);
    }

    // Each chain ends where the other begins; drop both connecting points
    lower.pop();
    upper.pop();
    lower.append(&mut upper);

    log::debug!(
        "monotone_chain: {} points -> {} hull vertices",
        points.len(),
        lower.len()
    );

    ConvexHull2D::new(lower)
}
