//! Merge history of agglomerative clustering.
//!
//! Handles follow the SciPy/MATLAB convention: leaves are `0..n_items`, and
//! merge `i` creates the cluster with handle `n_items + i`.

/// A dendrogram recording hierarchical cluster merges.
///
/// Each merge combines two clusters into one, recording:
/// - Which clusters were merged
/// - The distance at which they merged
/// - The size of the resulting cluster
#[derive(Debug, Clone, PartialEq)]
pub struct Dendrogram {
    merges: Vec<Merge>,
    /// Number of original items.
    n_items: usize,
}

/// A single merge operation in the dendrogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Merge {
    /// First cluster being merged (handle).
    pub cluster_a: usize,
    /// Second cluster being merged (handle).
    pub cluster_b: usize,
    /// Centroid distance at which the merge occurred.
    pub distance: f64,
    /// Size of resulting cluster.
    pub size: usize,
}

impl Dendrogram {
    /// Create an empty dendrogram over `n_items` leaves.
    pub fn new(n_items: usize) -> Self {
        Self {
            merges: Vec::with_capacity(n_items.saturating_sub(1)),
            n_items,
        }
    }

    /// Record a merge; returns the handle of the new cluster.
    pub fn add_merge(
        &mut self,
        cluster_a: usize,
        cluster_b: usize,
        distance: f64,
        size: usize,
    ) -> usize {
        let handle = self.n_items + self.merges.len();
        self.merges.push(Merge {
            cluster_a,
            cluster_b,
            distance,
            size,
        });
        handle
    }

    /// Number of original items.
    pub fn n_items(&self) -> usize {
        self.n_items
    }

    /// Number of merges recorded.
    pub fn n_merges(&self) -> usize {
        self.merges.len()
    }

    /// Number of clusters left after all recorded merges.
    ///
    /// Saturates at zero if more than `n_items - 1` merges were recorded.
    pub fn n_clusters(&self) -> usize {
        self.n_items.saturating_sub(self.merges.len())
    }

    /// Iterate over merges in the order they happened.
    pub fn merges(&self) -> impl Iterator<Item = &Merge> {
        self.merges.iter()
    }

    /// Merge distances, in merge order.
    pub fn distances(&self) -> Vec<f64> {
        self.merges.iter().map(|m| m.distance).collect()
    }
}
