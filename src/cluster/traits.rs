//! Clustering traits.

use crate::error::Result;
use crate::point::{Cluster, Point};

/// Common interface for the clustering algorithms.
pub trait Clustering {
    /// Group `points` and return the resulting clusters.
    ///
    /// Algorithms that also report unclustered points (DBSCAN) drop them
    /// here; use the algorithm's own `fit` to get them.
    fn fit_clusters(&self, points: &[Point]) -> Result<Vec<Cluster>>;
}
