//! K-means clustering.
//!
//! Partitions points into k clusters by minimizing **within-cluster sum of
//! squares** (WCSS).
//!
//! # Lloyd's Algorithm
//!
//! 1. Initialize k centroids via k-means++
//! 2. **Assign**: Each point → nearest centroid
//! 3. **Update**: Each centroid → mean of assigned points
//! 4. Repeat until no centroid moves more than `tol`, or `max_iter` passes
//!
//! ## K-means++ Initialization
//!
//! 1. Choose first centroid uniformly at random
//! 2. Choose next centroid with probability proportional to D(x)²
//!    (squared distance to nearest existing centroid)
//!
//! # Empty Clusters
//!
//! A cluster that receives no points keeps its previous centroid. The result
//! always has exactly k slots, some of which may be empty.
//!
//! # Centroid Snapshot
//!
//! Each returned cluster carries the centroid its points were assigned
//! against. After convergence that is the mean of its points to within `tol`;
//! when the run stops at `max_iter` it can lag by one update.

use super::traits::Clustering;
use crate::distance::Metric;
use crate::error::{Error, Result};
use crate::point::{Cluster, Point};
use rand::prelude::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// K-means clustering algorithm.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Number of clusters.
    k: usize,
    /// Maximum iterations.
    max_iter: usize,
    /// Convergence tolerance on per-centroid movement.
    tol: f64,
    /// Random seed for k-means++.
    seed: u64,
    /// Distance metric.
    metric: Metric,
}

/// Result of a k-means run.
#[derive(Debug, Clone, PartialEq)]
pub struct KmeansFit {
    /// Exactly `k` clusters, possibly some empty.
    pub clusters: Vec<Cluster>,
    /// Number of assignment passes performed.
    pub n_iter: usize,
    /// Whether every centroid moved less than `tol` on the last pass.
    pub converged: bool,
}

impl Kmeans {
    /// Create a new K-means clusterer.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 100,
            tol: 1e-6,
            seed: 0,
            metric: Metric::Euclidean,
        }
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set convergence tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the distance metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Number of clusters.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Run k-means with k-means++ seeding from the configured seed.
    pub fn fit(&self, points: &[Point]) -> Result<KmeansFit> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.fit_with_rng(points, &mut rng)
    }

    /// Run k-means with k-means++ seeding drawn from `rng`.
    pub fn fit_with_rng<R: Rng>(&self, points: &[Point], rng: &mut R) -> Result<KmeansFit> {
        self.validate(points)?;
        let centroids = self.init_centroids(points, rng);
        Ok(self.lloyd(points, centroids))
    }

    /// Run Lloyd iterations from caller-chosen initial centroids.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if `initial.len() != k`.
    pub fn fit_from_centroids(&self, points: &[Point], initial: Vec<Point>) -> Result<KmeansFit> {
        self.validate(points)?;
        if initial.len() != self.k {
            return Err(Error::DimensionMismatch {
                expected: self.k,
                found: initial.len(),
            });
        }
        Ok(self.lloyd(points, initial))
    }

    fn validate(&self, points: &[Point]) -> Result<()> {
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }
        if self.k == 0 || self.k > points.len() {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: points.len(),
            });
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }
        if self.tol.is_nan() || self.tol < 0.0 {
            return Err(Error::InvalidParameter {
                name: "tol",
                message: "must be non-negative",
            });
        }
        Ok(())
    }

    /// Initialize centroids using k-means++ algorithm.
    fn init_centroids<R: Rng>(&self, points: &[Point], rng: &mut R) -> Vec<Point> {
        let n = points.len();
        let mut centroids = Vec::with_capacity(self.k);

        // First centroid: random point
        centroids.push(points[rng.random_range(0..n)]);

        // Remaining centroids: k-means++ selection
        while centroids.len() < self.k {
            let distances: Vec<f64> = points
                .iter()
                .map(|p| {
                    let d = centroids
                        .iter()
                        .map(|c| self.metric.distance(p, c))
                        .fold(f64::MAX, f64::min);
                    d * d
                })
                .collect();

            // Sample proportional to squared distance
            let total: f64 = distances.iter().sum();
            if total <= 0.0 || !total.is_finite() {
                centroids.push(points[rng.random_range(0..n)]);
                continue;
            }

            let threshold = rng.random::<f64>() * total;
            let mut cumsum = 0.0;
            // Rounding can leave cumsum just short of total; fall back to the
            // last point with any weight.
            let mut selected = distances.iter().rposition(|&d| d > 0.0).unwrap_or(0);

            for (j, &d) in distances.iter().enumerate() {
                cumsum += d;
                // Zero-weight points are existing centroids.
                if d > 0.0 && cumsum >= threshold {
                    selected = j;
                    break;
                }
            }

            centroids.push(points[selected]);
        }

        centroids
    }

    fn nearest(&self, point: &Point, centroids: &[Point]) -> usize {
        let mut best_cluster = 0;
        let mut best_dist = f64::MAX;
        for (k, c) in centroids.iter().enumerate() {
            let dist = self.metric.distance(point, c);
            if dist < best_dist {
                best_dist = dist;
                best_cluster = k;
            }
        }
        best_cluster
    }

    fn lloyd(&self, points: &[Point], mut centroids: Vec<Point>) -> KmeansFit {
        let mut labels = vec![0usize; points.len()];
        let mut n_iter = 0;
        let mut converged = false;
        // Centroids the current labels were assigned against.
        let mut assigned_against = centroids.clone();

        while n_iter < self.max_iter {
            n_iter += 1;

            // Assignment step - parallel when feature enabled
            #[cfg(feature = "parallel")]
            {
                let centroids_ref = &centroids;
                labels
                    .par_iter_mut()
                    .zip(points.par_iter())
                    .for_each(|(label, p)| *label = self.nearest(p, centroids_ref));
            }

            #[cfg(not(feature = "parallel"))]
            for (label, p) in labels.iter_mut().zip(points) {
                *label = self.nearest(p, &centroids);
            }

            // Update step
            let mut sums = vec![(0.0f64, 0.0f64); self.k];
            let mut counts = vec![0usize; self.k];
            for (p, &k) in points.iter().zip(&labels) {
                sums[k].0 += p.x;
                sums[k].1 += p.y;
                counts[k] += 1;
            }

            let new_centroids: Vec<Point> = (0..self.k)
                .map(|k| {
                    if counts[k] > 0 {
                        let n = counts[k] as f64;
                        Point::new(sums[k].0 / n, sums[k].1 / n)
                    } else {
                        centroids[k]
                    }
                })
                .collect();

            // Check convergence
            converged = centroids
                .iter()
                .zip(&new_centroids)
                .all(|(a, b)| self.metric.distance(a, b) < self.tol);

            tracing::trace!(iteration = n_iter, converged, "kmeans pass");

            assigned_against = std::mem::replace(&mut centroids, new_centroids);

            if converged {
                break;
            }
        }

        let mut members: Vec<Vec<Point>> = vec![Vec::new(); self.k];
        for (p, &k) in points.iter().zip(&labels) {
            members[k].push(*p);
        }
        let clusters: Vec<Cluster> = members
            .into_iter()
            .zip(assigned_against)
            .map(|(pts, c)| Cluster::with_centroid(pts, c))
            .collect();

        tracing::debug!(
            n_points = points.len(),
            k = self.k,
            n_iter,
            converged,
            "kmeans finished"
        );

        KmeansFit {
            clusters,
            n_iter,
            converged,
        }
    }
}

impl Clustering for Kmeans {
    fn fit_clusters(&self, points: &[Point]) -> Result<Vec<Cluster>> {
        Ok(self.fit(points)?.clusters)
    }
}
