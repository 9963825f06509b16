//! # geocluster
//!
//! Unsupervised clustering of 2-D points: k-means, DBSCAN, centroid-linkage
//! agglomerative clustering and affinity propagation, over a shared
//! [`Point`]/[`Cluster`] model and a pluggable [`Metric`].
//!
//! Planar data uses [`Metric::Euclidean`] (the default). Latitude/longitude
//! data can use [`Metric::Haversine`], which measures great-circle meters.
//!
//! ```rust
//! use geocluster::{AffinityPropagation, Metric, Point};
//!
//! let points = vec![
//!     Point::new(55.7558, 37.6173),
//!     Point::new(55.7570, 37.6190),
//!     Point::new(59.9343, 30.3351),
//!     Point::new(59.9350, 30.3360),
//! ];
//!
//! let clusters = AffinityPropagation::new()
//!     .with_metric(Metric::Haversine)
//!     .fit(&points)
//!     .unwrap();
//! assert!(!clusters.is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default): implements `std::error::Error` for [`Error`]. This is
//!   the only thing it gates; the crate itself always links `std`.
//! - `serde`: `Serialize`/`Deserialize` for [`Point`] and [`Cluster`]
//! - `parallel`: rayon-parallel k-means assignment

pub mod cluster;
pub mod distance;
/// Error types used across `geocluster`.
pub mod error;
pub mod hierarchy;
pub mod metrics;
pub mod point;

#[cfg(test)]
mod cluster_tests;

pub use cluster::{
    AffinityPropagation, Clustering, Dbscan, DbscanFit, Hierarchical, Kmeans, KmeansFit,
};
pub use distance::{euclidean, haversine, Metric};
pub use error::{Error, Result};
pub use hierarchy::{Dendrogram, Merge};
pub use point::{Cluster, Point};
