//! Hierarchical (agglomerative) clustering with centroid linkage.
//!
//! Bottom-up clustering: start with every point as its own cluster and
//! repeatedly merge the two clusters whose centroids are closest, until k
//! clusters remain. The merge history is available as a [`Dendrogram`].
//!
//! # Linkage
//!
//! Distance between clusters is the distance between their centroids under
//! the configured metric. Ties go to the first pair found when scanning the
//! working set in order.
//!
//! # Merged Centroids
//!
//! A merged cluster's centroid is the midpoint of its two parents' centroids,
//! not the mean of all member points. The two agree when the parents have
//! equal size; otherwise the centroid drifts toward the smaller parent, and
//! the drift compounds across merges.
//!
//! # Working Set
//!
//! Clusters live in an arena of slots indexed by handle. Merging tombstones
//! both parents and appends the child, so handles of surviving clusters never
//! shift. Slot order is the scan order.
//!
//! # Complexity
//!
//! O(m²) centroid distances per merge with m live clusters, O(n³) overall.
//! Nothing is cached between merges; intended for small inputs.

use super::traits::Clustering;
use crate::distance::Metric;
use crate::error::{Error, Result};
use crate::hierarchy::Dendrogram;
use crate::point::{Cluster, Point};

/// Hierarchical (agglomerative) clustering.
#[derive(Debug, Clone)]
pub struct Hierarchical {
    /// Number of clusters to produce.
    n_clusters: usize,
    /// Distance metric between centroids.
    metric: Metric,
}

impl Hierarchical {
    /// Create a new hierarchical clusterer.
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            metric: Metric::Euclidean,
        }
    }

    /// Set the distance metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Number of clusters to produce.
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// Merge down to `n_clusters` clusters.
    pub fn fit(&self, points: &[Point]) -> Result<Vec<Cluster>> {
        Ok(self.fit_with_dendrogram(points)?.0)
    }

    /// Merge down to `n_clusters` clusters and return the merge history.
    ///
    /// Clusters come back in working-set order: untouched singletons first,
    /// in input order, then merged clusters in the order they were formed.
    pub fn fit_with_dendrogram(&self, points: &[Point]) -> Result<(Vec<Cluster>, Dendrogram)> {
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }

        let n = points.len();
        if self.n_clusters == 0 || self.n_clusters > n {
            return Err(Error::InvalidClusterCount {
                requested: self.n_clusters,
                n_items: n,
            });
        }

        let mut slots: Vec<Option<Cluster>> = points
            .iter()
            .map(|&p| Some(Cluster::with_centroid(vec![p], p)))
            .collect();
        let mut dendro = Dendrogram::new(n);
        let mut live = n;

        while live > self.n_clusters {
            let Some((a, b, dist)) = self.closest_pair(&slots) else {
                break;
            };

            let (Some(left), Some(right)) = (slots[a].take(), slots[b].take()) else {
                break;
            };

            let centroid = Point::new(
                (left.centroid.x + right.centroid.x) / 2.0,
                (left.centroid.y + right.centroid.y) / 2.0,
            );
            let mut members = left.points;
            members.extend(right.points);

            let handle = dendro.add_merge(a, b, dist, members.len());
            tracing::trace!(
                a,
                b,
                handle,
                distance = dist,
                size = members.len(),
                "merge"
            );

            slots.push(Some(Cluster::with_centroid(members, centroid)));
            live -= 1;
        }

        let clusters: Vec<Cluster> = slots.into_iter().flatten().collect();

        tracing::debug!(
            n_points = n,
            n_clusters = clusters.len(),
            n_merges = dendro.n_merges(),
            "hierarchical finished"
        );

        Ok((clusters, dendro))
    }

    /// Closest pair of live slots `(a, b, distance)` with `a < b`.
    fn closest_pair(&self, slots: &[Option<Cluster>]) -> Option<(usize, usize, f64)> {
        let live: Vec<(usize, Point)> = slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|c| (i, c.centroid)))
            .collect();

        let mut best: Option<(usize, usize, f64)> = None;
        for (pos, &(a, ca)) in live.iter().enumerate() {
            for &(b, cb) in &live[pos + 1..] {
                let dist = self.metric.distance(&ca, &cb);
                if best.map_or(true, |(_, _, d)| dist < d) {
                    best = Some((a, b, dist));
                }
            }
        }
        best
    }
}

impl Clustering for Hierarchical {
    fn fit_clusters(&self, points: &[Point]) -> Result<Vec<Cluster>> {
        self.fit(points)
    }
}
