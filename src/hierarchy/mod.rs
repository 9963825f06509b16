//! Hierarchical structures produced by agglomerative clustering.
//!
//! - [`Dendrogram`]: ordered merge history, see
//!   [`Hierarchical::fit_with_dendrogram`](crate::cluster::Hierarchical::fit_with_dendrogram)

mod dendrogram;

pub use dendrogram::{Dendrogram, Merge};
