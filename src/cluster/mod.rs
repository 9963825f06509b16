//! Clustering algorithms over 2-D points.
//!
//! All four algorithms are configured with a builder (`new` + `with_*`) and
//! run with a `fit` method that borrows the input and returns fresh
//! [`Cluster`](crate::Cluster)s. None keeps state between calls.
//!
//! ## Algorithms
//!
//! | Algorithm | Needs k | Noise | Deterministic |
//! |-----------|---------|-------|---------------|
//! | [`Kmeans`] | yes | no | per seed |
//! | [`Dbscan`] | no | yes | yes |
//! | [`Hierarchical`] | yes | no | yes |
//! | [`AffinityPropagation`] | no | no | yes |
//!
//! ### K-means
//!
//! Assign each point to the nearest centroid, move centroids to the mean of
//! their points, repeat. Seeded with k-means++.
//!
//! **Objective**: Minimize within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! ### DBSCAN
//!
//! Groups points linked by chains of ε-neighbors and sends groups smaller
//! than MinPts to noise.
//!
//! ### Hierarchical (Agglomerative)
//!
//! Start with singletons and keep merging the pair with the closest centroids
//! until k clusters remain.
//!
//! ### Affinity Propagation
//!
//! Points exchange responsibility and availability messages and settle on
//! exemplars; the number of clusters comes from the data.
//!
//! ## Usage
//!
//! ```rust
//! use geocluster::cluster::{Clustering, Dbscan, Hierarchical, Kmeans};
//! use geocluster::Point;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 1.0),
//! ];
//!
//! let fit = Dbscan::new(1.5, 2).fit(&points).unwrap();
//! assert_eq!(fit.clusters.len(), 2);
//! assert!(fit.noise.is_empty());
//!
//! // Any algorithm behind the common trait
//! let algo: Box<dyn Clustering> = Box::new(Hierarchical::new(2));
//! assert_eq!(algo.fit_clusters(&points).unwrap().len(), 2);
//!
//! let fit = Kmeans::new(2).with_seed(7).fit(&points).unwrap();
//! assert_eq!(fit.clusters.len(), 2);
//! ```

mod affinity;
mod dbscan;
mod hierarchical;
mod kmeans;
mod traits;

pub use affinity::AffinityPropagation;
pub use dbscan::{Dbscan, DbscanFit};
pub use hierarchical::Hierarchical;
pub use kmeans::{Kmeans, KmeansFit};
pub use traits::Clustering;
