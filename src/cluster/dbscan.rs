//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm
//!
//! Groups points that are density-reachable from one another and reports the
//! rest as noise. Unlike k-means, it:
//!
//! - Discovers clusters of arbitrary shape
//! - Automatically determines the number of clusters
//! - Identifies noise points (outliers)
//!
//! ## Steps
//!
//! 1. For each unvisited point P, mark it visited and start a group with it.
//! 2. Push every point within ε of P (P included) onto a FIFO frontier.
//! 3. Pop from the frontier. If the point is unvisited, mark it, push its own
//!    ε-neighborhood and add it to the group.
//! 4. When the frontier is empty, keep the group as a cluster if it has at
//!    least MinPts members, otherwise move every member to noise.
//!
//! ## Density Check
//!
//! MinPts is checked once against the finished group, not per point. There is
//! no core/border distinction: every point reachable through ε-hops joins the
//! group, and a sparse group is discarded whole.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) neighborhood queries, no spatial index.
//! - **Space**: O(n) for visited flags plus the frontier.

use super::traits::Clustering;
use crate::distance::Metric;
use crate::error::{Error, Result};
use crate::point::{Cluster, Point};
use std::collections::VecDeque;

/// DBSCAN clustering algorithm.
#[derive(Debug, Clone)]
pub struct Dbscan {
    /// Epsilon: maximum distance for neighborhood.
    eps: f64,
    /// Minimum members for a group to be kept as a cluster.
    min_pts: usize,
    /// Distance metric.
    metric: Metric,
}

/// Result of a DBSCAN run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DbscanFit {
    /// Groups with at least `min_pts` members.
    pub clusters: Vec<Cluster>,
    /// Points from groups that were too small.
    pub noise: Vec<Point>,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `eps` - Maximum distance between two points to be neighbors.
    /// * `min_pts` - Minimum number of members for a group to become a cluster.
    pub fn new(eps: f64, min_pts: usize) -> Self {
        Self {
            eps,
            min_pts,
            metric: Metric::Euclidean,
        }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Set minimum group size.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Set the distance metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Indices of all points within `eps` of `points[idx]`, itself included.
    fn region_query(&self, points: &[Point], idx: usize) -> Vec<usize> {
        let target = &points[idx];
        points
            .iter()
            .enumerate()
            .filter(|(_, p)| self.metric.distance(target, p) <= self.eps)
            .map(|(i, _)| i)
            .collect()
    }

    /// Grow a group from `start` until the frontier is exhausted.
    fn expand(&self, points: &[Point], start: usize, visited: &mut [bool]) -> Vec<Point> {
        let mut members = vec![points[start]];
        let mut frontier: VecDeque<usize> = self.region_query(points, start).into();

        while let Some(idx) = frontier.pop_front() {
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            frontier.extend(self.region_query(points, idx));
            members.push(points[idx]);
        }

        members
    }

    /// Run DBSCAN, returning clusters and noise.
    ///
    /// Empty input yields an empty result.
    pub fn fit(&self, points: &[Point]) -> Result<DbscanFit> {
        if !self.eps.is_finite() || self.eps < 0.0 {
            return Err(Error::InvalidParameter {
                name: "eps",
                message: "must be finite and non-negative",
            });
        }

        if self.min_pts == 0 {
            return Err(Error::InvalidParameter {
                name: "min_pts",
                message: "must be at least 1",
            });
        }

        let mut visited = vec![false; points.len()];
        let mut fit = DbscanFit::default();

        for idx in 0..points.len() {
            if visited[idx] {
                continue;
            }
            visited[idx] = true;

            let members = self.expand(points, idx, &mut visited);
            if members.len() >= self.min_pts {
                fit.clusters.push(Cluster::from_points(members)?);
            } else {
                fit.noise.extend(members);
            }
        }

        tracing::debug!(
            n_points = points.len(),
            n_clusters = fit.clusters.len(),
            n_noise = fit.noise.len(),
            "dbscan finished"
        );

        Ok(fit)
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(0.5, 5)
    }
}

impl Clustering for Dbscan {
    fn fit_clusters(&self, points: &[Point]) -> Result<Vec<Cluster>> {
        Ok(self.fit(points)?.clusters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_dbscan_two_pairs() {
        let points = vec![p(0.0, 0.0), p(0.0, 1.0), p(10.0, 0.0), p(10.0, 1.0)];

        let fit = Dbscan::new(1.5, 2).fit(&points).unwrap();

        assert!(fit.noise.is_empty());
        assert_eq!(fit.clusters.len(), 2);
        assert_eq!(fit.clusters[0].points, vec![p(0.0, 0.0), p(0.0, 1.0)]);
        assert_eq!(fit.clusters[0].centroid, p(0.0, 0.5));
        assert_eq!(fit.clusters[1].points, vec![p(10.0, 0.0), p(10.0, 1.0)]);
        assert_eq!(fit.clusters[1].centroid, p(10.0, 0.5));
    }

    #[test]
    fn test_dbscan_with_noise() {
        let points = vec![
            // Cluster 1
            p(0.0, 0.0),
            p(0.1, 0.0),
            p(0.0, 0.1),
            p(0.1, 0.1),
            // Outlier
            p(100.0, 100.0),
            // Cluster 2
            p(5.0, 5.0),
            p(5.1, 5.0),
            p(5.0, 5.1),
            p(5.1, 5.1),
        ];

        let fit = Dbscan::new(0.3, 3).fit(&points).unwrap();

        assert_eq!(fit.clusters.len(), 2);
        assert_eq!(fit.noise, vec![p(100.0, 100.0)]);
        for c in &fit.clusters {
            assert_eq!(c.len(), 4);
        }
    }

    #[test]
    fn test_dbscan_all_noise() {
        let points = vec![p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0), p(10.0, 10.0)];

        let fit = Dbscan::new(0.5, 3).fit(&points).unwrap();

        assert!(fit.clusters.is_empty());
        assert_eq!(fit.noise, points);
    }

    #[test]
    fn test_dbscan_chain() {
        // Consecutive points are 0.3 apart; the chain is one group.
        let points: Vec<Point> = (0..10).map(|i| p(i as f64 * 0.3, 0.0)).collect();

        let fit = Dbscan::new(0.5, 2).fit(&points).unwrap();

        assert_eq!(fit.clusters.len(), 1);
        assert_eq!(fit.clusters[0].len(), 10);
        assert!((fit.clusters[0].centroid.x - 1.35).abs() < 1e-9);
    }

    #[test]
    fn test_dbscan_group_size_checked_as_whole() {
        // A sparse chain where no point has two neighbors besides itself
        // still forms one group of 3 and passes min_pts = 3.
        let points = vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)];

        let fit = Dbscan::new(1.0, 3).fit(&points).unwrap();
        assert_eq!(fit.clusters.len(), 1);

        let fit = Dbscan::new(1.0, 4).fit(&points).unwrap();
        assert!(fit.clusters.is_empty());
        assert_eq!(fit.noise.len(), 3);
    }

    #[test]
    fn test_dbscan_duplicates_counted() {
        let points = vec![p(1.0, 1.0), p(1.0, 1.0), p(1.0, 1.0)];
        let fit = Dbscan::new(0.0, 3).fit(&points).unwrap();
        assert_eq!(fit.clusters.len(), 1);
        assert_eq!(fit.clusters[0].len(), 3);
    }

    #[test]
    fn test_dbscan_haversine() {
        // Two blocks in Moscow ~150 m apart, one point in St Petersburg.
        let points = vec![p(55.7558, 37.6173), p(55.7570, 37.6190), p(59.9343, 30.3351)];

        let fit = Dbscan::new(500.0, 2)
            .with_metric(Metric::Haversine)
            .fit(&points)
            .unwrap();

        assert_eq!(fit.clusters.len(), 1);
        assert_eq!(fit.clusters[0].len(), 2);
        assert_eq!(fit.noise, vec![p(59.9343, 30.3351)]);
    }

    #[test]
    fn test_dbscan_empty() {
        let fit = Dbscan::new(0.5, 3).fit(&[]).unwrap();
        assert!(fit.clusters.is_empty());
        assert!(fit.noise.is_empty());
    }

    #[test]
    fn test_dbscan_invalid_params() {
        let points = vec![p(0.0, 0.0)];

        assert!(Dbscan::new(-1.0, 3).fit(&points).is_err());
        assert!(Dbscan::new(f64::NAN, 3).fit(&points).is_err());
        assert!(Dbscan::new(f64::INFINITY, 3).fit(&points).is_err());
        assert!(Dbscan::new(0.5, 0).fit(&points).is_err());
    }
}
