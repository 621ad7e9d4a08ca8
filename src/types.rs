//! Core data types for 2D convex hull computation

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a point from polar coordinates (angle in radians, radius)
    pub fn from_polar(angle: f64, radius: f64) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    /// Subtract another point, yielding the vector from `other` to `self`
    pub fn sub(&self, other: &Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Dot product with another point interpreted as a vector
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Compute the magnitude/length
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        self.sub(other).magnitude()
    }

    /// Lexicographic ordering: x first, then y
    ///
    /// Uses `total_cmp`, so the ordering is total even for non-finite
    /// coordinates (which are otherwise out of contract).
    pub fn lex_cmp(&self, other: &Point) -> Ordering {
        self.x.total_cmp(&other.x).then(self.y.total_cmp(&other.y))
    }

    /// Bit-level coordinate key for exact membership tests
    ///
    /// Hull vertices are bit-copies of input points, never the result of
    /// arithmetic, so comparing keys is an exact membership test.
    pub(crate) fn key(&self) -> (u64, u64) {
        (self.x.to_bits(), self.y.to_bits())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

/// A directed hull edge between two adjacent hull vertices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    /// Create a new edge from start to end
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Length of the edge
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Midpoint of the edge
    pub fn midpoint(&self) -> Point {
        Point {
            x: (self.start.x + self.end.x) / 2.0,
            y: (self.start.y + self.end.y) / 2.0,
        }
    }
}

/// The result of a 2D convex hull computation
///
/// Vertices are stored counterclockwise starting at the leftmost-lowest
/// point, with no three consecutive vertices collinear. Closure is implicit:
/// the last vertex connects back to the first. Degenerate hulls (0, 1 or 2
/// vertices) are valid zero-area polygons, not errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvexHull2D {
    vertices: Vec<Point>,
}

impl ConvexHull2D {
    /// Create a new convex hull from an ordered vertex sequence
    pub(crate) fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Build a convex hull from points using the monotone chain algorithm
    pub fn build(points: &[Point]) -> Self {
        crate::monotone_chain::monotone_chain(points)
    }

    /// Get the hull vertices in counterclockwise order
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Get the number of hull vertices
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the hull has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Get the hull edges in traversal order, including the closing edge
    ///
    /// A 2-vertex hull has exactly one edge; hulls with fewer than 2
    /// vertices have none.
    pub fn edges(&self) -> Vec<Edge> {
        match self.vertices.len() {
            0 | 1 => Vec::new(),
            2 => vec![Edge::new(self.vertices[0], self.vertices[1])],
            n => (0..n)
                .map(|i| Edge::new(self.vertices[i], self.vertices[(i + 1) % n]))
                .collect(),
        }
    }

    /// Compute the perimeter of the hull polygon
    pub fn perimeter(&self) -> f64 {
        self.edges().iter().map(Edge::length).sum()
    }

    /// Compute the enclosed area via the shoelace formula
    ///
    /// Degenerate hulls (fewer than 3 vertices) have zero area.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }

        let mut twice_area = 0.0;
        for i in 0..n {
            let a = &self.vertices[i];
            let b = &self.vertices[(i + 1) % n];
            twice_area += a.x * b.y - b.x * a.y;
        }

        twice_area.abs() / 2.0
    }

    /// Check whether a point lies on or inside the hull
    pub fn contains(&self, point: &Point) -> bool {
        match self.vertices.len() {
            0 => false,
            1 => self.vertices[0].distance(point) < crate::EPSILON,
            2 => {
                let (_, dist) = crate::geometry::project_onto_segment(
                    point,
                    &self.vertices[0],
                    &self.vertices[1],
                );
                dist < crate::EPSILON
            }
            _ => self.edges().iter().all(|edge| {
                crate::geometry::orientation(&edge.start, &edge.end, point) >= -crate::EPSILON
            }),
        }
    }
}

/// The defect of one interior point relative to the hull boundary
///
/// Records the nearest hull edge, the clamped projection of the point onto
/// that edge, and the Euclidean distance between them (the defect depth).
/// `index` is the point's position in the original input set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefectRecord {
    pub index: usize,
    pub point: Point,
    pub edge: Edge,
    pub projection: Point,
    pub depth: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicographic_ordering() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(1.0, 3.0);
        let c = Point::new(2.0, 0.0);

        assert_eq!(a.lex_cmp(&b), Ordering::Less);
        assert_eq!(b.lex_cmp(&c), Ordering::Less);
        assert_eq!(a.lex_cmp(&a), Ordering::Equal);
    }

    #[test]
    fn test_square_measures() {
        let hull = ConvexHull2D::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]);

        assert_eq!(hull.num_vertices(), 4);
        assert_eq!(hull.edges().len(), 4);
        assert!((hull.perimeter() - 4.0).abs() < 1e-12);
        assert!((hull.area() - 1.0).abs() < 1e-12);
        assert!(hull.contains(&Point::new(0.5, 0.5)));
        assert!(hull.contains(&Point::new(1.0, 1.0)));
        assert!(!hull.contains(&Point::new(1.5, 0.5)));
    }

    #[test]
    fn test_degenerate_hull_edges() {
        let empty = ConvexHull2D::new(vec![]);
        assert!(empty.edges().is_empty());
        assert_eq!(empty.area(), 0.0);

        let single = ConvexHull2D::new(vec![Point::new(1.0, 1.0)]);
        assert!(single.edges().is_empty());

        let segment = ConvexHull2D::new(vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0)]);
        assert_eq!(segment.edges().len(), 1);
        assert_eq!(segment.area(), 0.0);
        assert!((segment.perimeter() - 2.0).abs() < 1e-12);
        assert!(segment.contains(&Point::new(1.0, 0.0)));
        assert!(!segment.contains(&Point::new(1.0, 0.5)));
    }

    #[test]
    fn test_edge_midpoint() {
        let edge = Edge::new(Point::new(0.0, 0.0), Point::new(2.0, 4.0));
        let mid = edge.midpoint();
        assert_eq!(mid.x, 1.0);
        assert_eq!(mid.y, 2.0);
        assert!((edge.length() - 20.0_f64.sqrt()).abs() < 1e-12);
    }
}
