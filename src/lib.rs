//! 2D Convex Hull and Convexity-Defect Analysis
//!
//! This library computes the convex hull of a finite set of 2D points using
//! the monotone chain (Andrew's) algorithm, and classifies the remaining
//! points as interior "concave" points with a measured defect depth: the
//! minimum distance from each interior point to the hull boundary.
//!
//! The computation is deterministic, single-threaded and pure: one point set
//! in, one hull and one set of defect records out. Degenerate geometry
//! (duplicate points, collinear runs, fewer than 3 distinct points) produces
//! degenerate hulls, not errors.
//!
//! # Example
//! ```
//! use math_hull_defect::{ConvexHull2D, Point, analyze_defects};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.5, 0.5),
//! ];
//!
//! let hull = ConvexHull2D::build(&points);
//! assert_eq!(hull.num_vertices(), 4);
//!
//! let defects = analyze_defects(&points, &hull).unwrap();
//! assert_eq!(defects.len(), 1);
//! assert!((defects[0].depth - 0.5).abs() < 1e-12);
//! ```

mod defects;
mod geometry;
mod monotone_chain;
mod types;

// Make testdata publicly available for tests
pub mod testdata;

pub use defects::{analyze_defects, max_defect_depth};
pub use geometry::{orientation, project_onto_segment};
pub use types::{ConvexHull2D, DefectRecord, Edge, Point};

/// Error types for convex hull operations
#[derive(Debug, thiserror::Error)]
pub enum ConvexHullError {
    #[error("Hull has fewer than 2 vertices, no edges to project onto")]
    InsufficientHull,
}

pub type Result<T> = std::result::Result<T, ConvexHullError>;

/// Numerical tolerance for floating-point comparisons
/// Used throughout the library for:
/// - Zero-length edge detection
/// - Containment checks
pub(crate) const EPSILON: f64 = 1e-10;
