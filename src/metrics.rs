//! Clustering quality measures.
//!
//! | Function | Range | Best | Needs ground truth |
//! |----------|-------|------|--------------------|
//! | [`inertia`] | [0, ∞) | 0 | no |
//! | [`ari`] | [-1, 1] | 1 | yes |
//!
//! [`labels`] turns a clustering back into one label per input point, which
//! is what [`ari`] compares.
//!
//! # References
//!
//! - Hubert & Arabie (1985). "Comparing partitions" (ARI)

use crate::distance::Metric;
use crate::point::{Cluster, Point};
use std::collections::HashMap;

/// Within-cluster sum of squared member-to-centroid distances.
///
/// ```text
/// inertia = Σₖ Σᵢ∈Cₖ d(xᵢ, μₖ)²
/// ```
pub fn inertia(clusters: &[Cluster], metric: &Metric) -> f64 {
    clusters
        .iter()
        .flat_map(|c| {
            c.points.iter().map(move |p| {
                let d = metric.distance(p, &c.centroid);
                d * d
            })
        })
        .sum()
}

/// Index of the cluster holding each point, or `None` if no cluster does.
///
/// Duplicate coordinates are matched against cluster members one-for-one, so
/// a clustering that covers every point exactly once maps every point.
pub fn labels(points: &[Point], clusters: &[Cluster]) -> Vec<Option<usize>> {
    // Remaining copies of each coordinate per cluster.
    let mut pool: HashMap<(u64, u64), Vec<(usize, usize)>> = HashMap::new();
    for (ci, c) in clusters.iter().enumerate() {
        for p in &c.points {
            let slots = pool.entry(key(p)).or_default();
            match slots.iter_mut().find(|(idx, _)| *idx == ci) {
                Some((_, count)) => *count += 1,
                None => slots.push((ci, 1)),
            }
        }
    }

    points
        .iter()
        .map(|p| {
            let slots = pool.get_mut(&key(p))?;
            let (ci, count) = slots.iter_mut().find(|(_, count)| *count > 0)?;
            *count -= 1;
            Some(*ci)
        })
        .collect()
}

fn key(p: &Point) -> (u64, u64) {
    (p.x.to_bits(), p.y.to_bits())
}

/// Adjusted Rand Index between two labelings.
///
/// Pair-counting agreement corrected for chance: 1 for identical partitions
/// (up to relabeling), around 0 for unrelated ones, negative for worse than
/// chance. Mismatched or empty inputs score 0.
pub fn ari(pred: &[usize], truth: &[usize]) -> f64 {
    if pred.len() != truth.len() || pred.is_empty() {
        return 0.0;
    }

    let mut joint: HashMap<(usize, usize), usize> = HashMap::new();
    let mut rows: HashMap<usize, usize> = HashMap::new();
    let mut cols: HashMap<usize, usize> = HashMap::new();
    for (&p, &t) in pred.iter().zip(truth) {
        *joint.entry((p, t)).or_default() += 1;
        *rows.entry(p).or_default() += 1;
        *cols.entry(t).or_default() += 1;
    }

    let pairs = |n: usize| (n * n.saturating_sub(1) / 2) as f64;
    let index: f64 = joint.values().map(|&n| pairs(n)).sum();
    let row_pairs: f64 = rows.values().map(|&n| pairs(n)).sum();
    let col_pairs: f64 = cols.values().map(|&n| pairs(n)).sum();

    let total = pairs(pred.len());
    if total == 0.0 {
        return 1.0;
    }

    let expected = row_pairs * col_pairs / total;
    let spread = (row_pairs + col_pairs) / 2.0 - expected;
    if spread.abs() < 1e-10 {
        return 1.0;
    }

    (index - expected) / spread
}
