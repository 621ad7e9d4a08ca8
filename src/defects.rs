//! Convexity-defect analysis
//!
//! Partitions an input point set into hull vertices and interior ("concave")
//! points, and measures how far each interior point deviates from the hull
//! boundary via its nearest-edge projection distance.

use std::collections::HashSet;

use crate::geometry::project_onto_segment;
use crate::types::{ConvexHull2D, DefectRecord, Point};
use crate::{ConvexHullError, Result};

/// Analyze the convexity defects of a point set against its hull
///
/// Every point whose coordinates match a hull vertex is classified as a hull
/// vertex; duplicates of a hull vertex all count as hull vertices. For each
/// remaining interior point, every hull edge (closing edge included) is
/// considered and the edge minimizing the clamped projection distance wins;
/// ties go to the first edge in hull traversal order. Records are emitted in
/// input order, one per interior point.
///
/// Returns [`ConvexHullError::InsufficientHull`] when interior points exist
/// but the hull has no edges to project onto (fewer than 2 vertices).
pub fn analyze_defects(points: &[Point], hull: &ConvexHull2D) -> Result<Vec<DefectRecord>> {
    let hull_keys: HashSet<(u64, u64)> = hull.vertices().iter().map(Point::key).collect();
    let edges = hull.edges();

    let mut records = Vec::new();
    for (index, point) in points.iter().enumerate() {
        if hull_keys.contains(&point.key()) {
            continue;
        }

        if edges.is_empty() {
            return Err(ConvexHullError::InsufficientHull);
        }

        let mut edge = edges[0];
        let (mut projection, mut depth) = project_onto_segment(point, &edge.start, &edge.end);
        for candidate in &edges[1..] {
            let (proj, dist) = project_onto_segment(point, &candidate.start, &candidate.end);
            // Strict < keeps the first edge on ties
            if dist < depth {
                edge = *candidate;
                projection = proj;
                depth = dist;
            }
        }

        records.push(DefectRecord {
            index,
            point: *point,
            edge,
            projection,
            depth,
        });
    }

    log::debug!(
        "analyze_defects: {} points, {} hull vertices, {} interior",
        points.len(),
        hull.num_vertices(),
        records.len()
    );

    Ok(records)
}

/// Deepest defect among the given records, if any
pub fn max_defect_depth(records: &[DefectRecord]) -> Option<f64> {
    records.iter().map(|r| r.depth).reduce(f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Edge;

    fn unit_square_with_center() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.5, 0.5),
        ]
    }

    #[test]
    fn test_square_center_defect() {
        let points = unit_square_with_center();
        let hull = ConvexHull2D::build(&points);
        let records = analyze_defects(&points, &hull).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.index, 4);
        assert_eq!(record.point, Point::new(0.5, 0.5));
        assert!((record.depth - 0.5).abs() < 1e-12);

        // All four edges are 0.5 away; the bottom edge comes first in
        // traversal order and wins the tie
        assert_eq!(
            record.edge,
            Edge::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0))
        );
        assert_eq!(record.projection, Point::new(0.5, 0.0));
    }

    #[test]
    fn test_all_points_on_hull() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 2.0),
        ];
        let hull = ConvexHull2D::build(&points);
        let records = analyze_defects(&points, &hull).unwrap();

        assert!(records.is_empty());
        assert_eq!(max_defect_depth(&records), None);
    }

    #[test]
    fn test_duplicates_of_hull_vertex_are_hull_vertices() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 2.0),
        ];
        let hull = ConvexHull2D::build(&points);
        let records = analyze_defects(&points, &hull).unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn test_insufficient_hull_is_signaled() {
        let p = Point::new(0.0, 0.0);
        let hull = ConvexHull2D::build(&[p]);
        let result = analyze_defects(&[p, Point::new(1.0, 1.0)], &hull);

        assert!(matches!(result, Err(ConvexHullError::InsufficientHull)));
    }

    #[test]
    fn test_degenerate_hull_without_interior_points() {
        let p = Point::new(0.0, 0.0);
        let hull = ConvexHull2D::build(&[p, p]);
        let records = analyze_defects(&[p, p], &hull).unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn test_segment_hull_defects() {
        // Hull degenerates to a segment; the single edge still supports
        // projection
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 0.0),
        ];
        let hull = ConvexHull2D::build(&points);
        assert_eq!(hull.num_vertices(), 2);

        let records = analyze_defects(&points, &hull).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].index, 2);
        assert!(records[0].depth.abs() < 1e-12);
        assert_eq!(records[0].projection, Point::new(2.0, 0.0));
    }

    #[test]
    fn test_records_in_input_order() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.2), // interior
            Point::new(4.0, 0.0),
            Point::new(2.0, 1.0), // interior
            Point::new(2.0, 4.0),
        ];
        let hull = ConvexHull2D::build(&points);
        let records = analyze_defects(&points, &hull).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].index, 1);
        assert_eq!(records[1].index, 3);
        assert!(max_defect_depth(&records).unwrap() > 0.0);
    }
}
