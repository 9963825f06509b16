#[cfg(test)]
mod tests {
    use crate::cluster::{AffinityPropagation, Dbscan, Hierarchical, Kmeans};
    use crate::distance::{euclidean, haversine, Metric};
    use crate::metrics::{ari, labels};
    use crate::point::{Cluster, Point};
    use proptest::prelude::*;

    fn sorted(mut points: Vec<Point>) -> Vec<Point> {
        points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        points
    }

    fn members(clusters: &[Cluster]) -> Vec<Point> {
        clusters.iter().flat_map(|c| c.points.iter().copied()).collect()
    }

    fn assert_centroid_is_mean(c: &Cluster, tol: f64) {
        let mean = Point::mean(&c.points).unwrap();
        assert!(
            (mean.x - c.centroid.x).abs() <= tol && (mean.y - c.centroid.y).abs() <= tol,
            "centroid {:?} != mean {:?}",
            c.centroid,
            mean
        );
    }

    fn points_strategy(max_len: usize) -> impl Strategy<Value = Vec<Point>> {
        proptest::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1..max_len)
            .prop_map(|v| v.into_iter().map(Point::from).collect())
    }

    fn blobs() -> Vec<Point> {
        let mut points = Vec::new();
        for (cx, cy) in [(0.0, 0.0), (50.0, 0.0), (0.0, 50.0)] {
            for i in 0..6 {
                let t = i as f64;
                points.push(Point::new(cx + (t * 0.7).sin(), cy + (t * 1.3).cos()));
            }
        }
        points
    }

    fn blob_truth() -> Vec<usize> {
        (0..18).map(|i| i / 6).collect()
    }

    #[test]
    fn all_algorithms_recover_separated_blobs() {
        let points = blobs();
        let truth = blob_truth();

        let kmeans = Kmeans::new(3)
            .fit_from_centroids(&points, vec![points[0], points[6], points[12]])
            .unwrap();
        let dbscan = Dbscan::new(3.0, 3).fit(&points).unwrap();
        let hier = Hierarchical::new(3).fit(&points).unwrap();

        assert!(dbscan.noise.is_empty());
        for clusters in [&kmeans.clusters, &dbscan.clusters, &hier] {
            let pred: Vec<usize> = labels(&points, clusters)
                .into_iter()
                .map(|l| l.unwrap())
                .collect();
            assert!((ari(&pred, &truth) - 1.0).abs() < 1e-12);
        }
    }

    proptest! {
        #[test]
        fn dbscan_covers_every_point(
            points in points_strategy(40),
            eps in 0.0f64..40.0,
            min_pts in 1usize..6,
        ) {
            let fit = Dbscan::new(eps, min_pts).fit(&points).unwrap();

            let mut out = members(&fit.clusters);
            out.extend(fit.noise.iter().copied());
            prop_assert_eq!(sorted(out), sorted(points.clone()));

            for c in &fit.clusters {
                prop_assert!(c.len() >= min_pts);
                assert_centroid_is_mean(c, 1e-9);
            }
        }

        #[test]
        fn hierarchical_returns_exactly_k(
            (points, k) in points_strategy(25)
                .prop_flat_map(|pts| {
                    let n = pts.len();
                    (Just(pts), 1..=n)
                }),
        ) {
            let (clusters, dendro) = Hierarchical::new(k).fit_with_dendrogram(&points).unwrap();

            prop_assert_eq!(clusters.len(), k);
            prop_assert_eq!(dendro.n_merges(), points.len() - k);
            prop_assert_eq!(sorted(members(&clusters)), sorted(points.clone()));
            for c in &clusters {
                prop_assert!(!c.is_empty());
            }
        }

        #[test]
        fn kmeans_slots_and_assignment(
            (points, k) in points_strategy(40)
                .prop_flat_map(|pts| {
                    let n = pts.len();
                    (Just(pts), 1..=n.min(6))
                }),
            seed in any::<u64>(),
            max_iter in 1usize..20,
        ) {
            let fit = Kmeans::new(k)
                .with_seed(seed)
                .with_max_iter(max_iter)
                .fit(&points)
                .unwrap();

            prop_assert_eq!(fit.clusters.len(), k);
            prop_assert!(fit.n_iter >= 1 && fit.n_iter <= max_iter);
            prop_assert_eq!(sorted(members(&fit.clusters)), sorted(points.clone()));

            // Every point sits with the centroid it is closest to.
            for c in &fit.clusters {
                for p in &c.points {
                    let own = euclidean(p, &c.centroid);
                    for other in &fit.clusters {
                        prop_assert!(own <= euclidean(p, &other.centroid));
                    }
                }
            }

            if fit.converged {
                for c in fit.clusters.iter().filter(|c| !c.is_empty()) {
                    assert_centroid_is_mean(c, 1e-5);
                }
            }
        }

        #[test]
        fn affinity_covers_every_point(
            points in points_strategy(12),
            damping in 0.5f64..0.95,
        ) {
            let exemplars = AffinityPropagation::new()
                .with_max_iter(50)
                .with_damping(damping)
                .fit_exemplars(&points)
                .unwrap();

            let ids: Vec<usize> = exemplars.iter().map(|(k, _)| *k).collect();
            let mut ascending = ids.clone();
            ascending.sort_unstable();
            ascending.dedup();
            prop_assert_eq!(ids, ascending);

            let clusters: Vec<Cluster> = exemplars.into_iter().map(|(_, c)| c).collect();
            prop_assert_eq!(sorted(members(&clusters)), sorted(points.clone()));
            for c in &clusters {
                assert_centroid_is_mean(c, 1e-9);
            }
        }

        #[test]
        fn metrics_are_symmetric(
            (ax, ay) in (-80.0f64..80.0, -179.0f64..179.0),
            (bx, by) in (-80.0f64..80.0, -179.0f64..179.0),
        ) {
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);

            prop_assert_eq!(euclidean(&a, &b), euclidean(&b, &a));
            prop_assert!(euclidean(&a, &b) >= 0.0);
            prop_assert!((haversine(&a, &b) - haversine(&b, &a)).abs() < 1e-6);
            prop_assert!(Metric::Haversine.distance(&a, &a) < 1e-6);
            if a != b {
                prop_assert!(euclidean(&a, &b) > 0.0);
            }
        }
    }
}
