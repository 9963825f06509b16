//! Point and cluster primitives.
//!
//! A [`Point`] is a plain pair of coordinates. A [`Cluster`] owns its member
//! points plus a centroid snapshot: the centroid is computed when the cluster
//! is finalized and is not kept in sync with later edits to `points`.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in the plane.
///
/// For the haversine metric, `x` is latitude and `y` is longitude, both in
/// degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// First coordinate (latitude for geographic data).
    pub x: f64,
    /// Second coordinate (longitude for geographic data).
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Arithmetic mean of `points` along each axis.
    ///
    /// Returns `None` for an empty slice.
    pub fn mean(points: &[Point]) -> Option<Point> {
        if points.is_empty() {
            return None;
        }
        let (sum_x, sum_y) = points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        let n = points.len() as f64;
        Some(Point::new(sum_x / n, sum_y / n))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// A group of points with its centroid.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cluster {
    /// Member points. Order carries no meaning.
    pub points: Vec<Point>,
    /// Centroid snapshot.
    pub centroid: Point,
}

impl Cluster {
    /// Build a cluster whose centroid is the mean of `points`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] if `points` is empty.
    pub fn from_points(points: Vec<Point>) -> Result<Self> {
        let centroid = Point::mean(&points).ok_or(Error::EmptyInput)?;
        Ok(Self { points, centroid })
    }

    /// Build a cluster with an explicitly supplied centroid.
    pub fn with_centroid(points: Vec<Point>, centroid: Point) -> Self {
        Self { points, centroid }
    }

    /// Number of member points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the cluster has no members.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether `point` is a member (exact coordinate match).
    pub fn contains(&self, point: &Point) -> bool {
        self.points.iter().any(|p| p == point)
    }
}
