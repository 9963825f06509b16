//! Affinity propagation: exemplar selection by message passing.
//!
//! Every point is a candidate exemplar. Points exchange two kinds of messages
//! until each settles on the candidate that best represents it; points that
//! pick the same exemplar form a cluster. The number of clusters falls out of
//! the data and the preference value.
//!
//! # Matrices
//!
//! | Matrix | Entry | Meaning |
//! |--------|-------|---------|
//! | S | s(i,k) = −d(i,k) | How well k would represent i |
//! | R | r(i,k) | Evidence, sent i → k, that k should be i's exemplar |
//! | A | a(i,k) | Evidence, sent k → i, that k is a viable exemplar |
//!
//! The diagonal of S holds the **preference**: how much each point wants to
//! be an exemplar itself. Here it defaults to the median of S taken *before*
//! the diagonal is written, so the n zero self-similarities take part in the
//! median.
//!
//! # Updates
//!
//! With damping λ, each iteration blends new messages into old ones:
//!
//! ```text
//! r(i,k) ← λ·r(i,k) + (1−λ)·(s(i,k) − max_{k'≠k} [a(i,k') + s(i,k')])
//! a(k,k) ← λ·a(k,k) + (1−λ)·Σ_{i'≠k} max(0, r(i',k))
//! a(i,k) ← λ·a(i,k) + (1−λ)·min(0, r(k,k) + Σ_{i'≠k} max(0, r(i',k)) − r(i,k))
//! ```
//!
//! The off-diagonal availability subtracts r(i,k) unclamped from a column sum
//! that excludes only the diagonal.
//!
//! There is no convergence test: the loop always runs `max_iter` times.
//!
//! # References
//!
//! Frey & Dueck (2007). "Clustering by Passing Messages Between Data Points."
//! Science 315(5814).

use super::traits::Clustering;
use crate::distance::Metric;
use crate::error::{Error, Result};
use crate::point::{Cluster, Point};
use ndarray::{Array1, Array2};
use std::collections::BTreeMap;

/// Affinity propagation clustering.
#[derive(Debug, Clone)]
pub struct AffinityPropagation {
    /// Number of message-passing iterations.
    max_iter: usize,
    /// Weight of the previous message value, in `[0, 1)`.
    damping: f64,
    /// Diagonal of S. `None` means the median of S.
    preference: Option<f64>,
    /// Distance metric.
    metric: Metric,
}

impl AffinityPropagation {
    /// Create a clusterer with 200 iterations and damping 0.5.
    pub fn new() -> Self {
        Self {
            max_iter: 200,
            damping: 0.5,
            preference: None,
            metric: Metric::Euclidean,
        }
    }

    /// Set the number of iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Use a fixed preference instead of the median similarity.
    ///
    /// Lower (more negative) values yield fewer clusters.
    pub fn with_preference(mut self, preference: f64) -> Self {
        self.preference = Some(preference);
        self
    }

    /// Set the distance metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Cluster `points`, ordered by ascending exemplar index.
    pub fn fit(&self, points: &[Point]) -> Result<Vec<Cluster>> {
        Ok(self
            .fit_exemplars(points)?
            .into_iter()
            .map(|(_, c)| c)
            .collect())
    }

    /// Cluster `points`, pairing each cluster with its exemplar's index.
    ///
    /// The exemplar need not be a member of its own cluster.
    pub fn fit_exemplars(&self, points: &[Point]) -> Result<Vec<(usize, Cluster)>> {
        if !(0.0..1.0).contains(&self.damping) {
            return Err(Error::InvalidParameter {
                name: "damping",
                message: "must be in [0, 1)",
            });
        }
        if let Some(pref) = self.preference {
            if !pref.is_finite() {
                return Err(Error::InvalidParameter {
                    name: "preference",
                    message: "must be finite",
                });
            }
        }

        let n = points.len();
        if n == 0 {
            return Ok(Vec::new());
        }

        let mut s = self.similarity(points);
        let preference = self.preference.unwrap_or_else(|| median(&s));
        s.diag_mut().fill(preference);

        let mut r = Array2::<f64>::zeros((n, n));
        let mut a = Array2::<f64>::zeros((n, n));
        for _ in 0..self.max_iter {
            self.update_responsibility(&s, &a, &mut r);
            self.update_availability(&r, &mut a);
        }

        let mut groups: BTreeMap<usize, Vec<Point>> = BTreeMap::new();
        for (i, point) in points.iter().enumerate() {
            let exemplar = argmax_row(&r, &a, i);
            groups.entry(exemplar).or_default().push(*point);
        }

        tracing::debug!(
            n_points = n,
            n_clusters = groups.len(),
            preference,
            iterations = self.max_iter,
            "affinity propagation finished"
        );

        groups
            .into_iter()
            .map(|(k, members)| Ok((k, Cluster::from_points(members)?)))
            .collect()
    }

    /// S(i, k) = -d(i, k), diagonal still zero for identical points.
    fn similarity(&self, points: &[Point]) -> Array2<f64> {
        let n = points.len();
        Array2::from_shape_fn((n, n), |(i, k)| {
            -self.metric.distance(&points[i], &points[k])
        })
    }

    fn update_responsibility(&self, s: &Array2<f64>, a: &Array2<f64>, r: &mut Array2<f64>) {
        let n = s.nrows();
        let damping = self.damping;

        for i in 0..n {
            let mut max1 = f64::NEG_INFINITY;
            let mut max2 = f64::NEG_INFINITY;
            let mut max1_idx = None;
            for k in 0..n {
                let val = a[[i, k]] + s[[i, k]];
                if val > max1 {
                    max2 = max1;
                    max1 = val;
                    max1_idx = Some(k);
                } else if val > max2 {
                    max2 = val;
                }
            }

            for k in 0..n {
                let competitor = if max1_idx == Some(k) { max2 } else { max1 };
                r[[i, k]] = damping * r[[i, k]] + (1.0 - damping) * (s[[i, k]] - competitor);
            }
        }
    }

    fn update_availability(&self, r: &Array2<f64>, a: &mut Array2<f64>) {
        let n = r.nrows();
        let damping = self.damping;

        // Column sums of positive responsibilities, diagonal excluded.
        let column_sums = Array1::from_shape_fn(n, |k| {
            let mut sum = 0.0;
            for i in 0..n {
                if i != k {
                    sum += r[[i, k]].max(0.0);
                }
            }
            sum
        });

        for i in 0..n {
            for k in 0..n {
                let new = if i == k {
                    column_sums[k]
                } else {
                    (r[[k, k]] + column_sums[k] - r[[i, k]]).min(0.0)
                };
                a[[i, k]] = damping * a[[i, k]] + (1.0 - damping) * new;
            }
        }
    }
}

impl Default for AffinityPropagation {
    fn default() -> Self {
        Self::new()
    }
}

impl Clustering for AffinityPropagation {
    fn fit_clusters(&self, points: &[Point]) -> Result<Vec<Cluster>> {
        self.fit(points)
    }
}

/// Median over every entry of `m`; mean of the middle two for even counts.
fn median(m: &Array2<f64>) -> f64 {
    let mut values: Vec<f64> = m.iter().copied().collect();
    values.sort_by(f64::total_cmp);
    let len = values.len();
    if len == 0 {
        return 0.0;
    }
    if len % 2 == 0 {
        (values[len / 2 - 1] + values[len / 2]) / 2.0
    } else {
        values[len / 2]
    }
}

/// Column maximizing R(i, k) + A(i, k); first one wins on ties.
fn argmax_row(r: &Array2<f64>, a: &Array2<f64>, i: usize) -> usize {
    let mut best = 0;
    let mut best_val = f64::NEG_INFINITY;
    for k in 0..r.ncols() {
        let val = r[[i, k]] + a[[i, k]];
        if val > best_val {
            best_val = val;
            best = k;
        }
    }
    best
}
