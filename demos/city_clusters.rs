use geocluster::{AffinityPropagation, Dbscan, Hierarchical, Kmeans, Metric, Point};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=geocluster=debug shows per-run summaries.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Landmarks in Moscow, St Petersburg and Kazan, plus one in the Urals.
    let points = vec![
        Point::new(55.7539, 37.6208),
        Point::new(55.7520, 37.6175),
        Point::new(55.7602, 37.6186),
        Point::new(59.9398, 30.3146),
        Point::new(59.9343, 30.3351),
        Point::new(59.9500, 30.3167),
        Point::new(55.7986, 49.1064),
        Point::new(55.7908, 49.1147),
        Point::new(56.8389, 60.6057),
    ];

    let fit = Dbscan::new(5_000.0, 2)
        .with_metric(Metric::Haversine)
        .fit(&points)?;
    println!("dbscan: {} clusters, {} noise", fit.clusters.len(), fit.noise.len());
    for c in &fit.clusters {
        println!(
            "  {} points around ({:.4}, {:.4})",
            c.len(),
            c.centroid.x,
            c.centroid.y
        );
    }

    let fit = Kmeans::new(3)
        .with_metric(Metric::Haversine)
        .with_seed(2024)
        .fit(&points)?;
    println!("kmeans: {} passes, converged={}", fit.n_iter, fit.converged);

    let (clusters, dendro) = Hierarchical::new(3)
        .with_metric(Metric::Haversine)
        .fit_with_dendrogram(&points)?;
    println!("hierarchical: {} clusters", clusters.len());
    for m in dendro.merges() {
        println!(
            "  merge {} + {} at {:.0} m (size {})",
            m.cluster_a,
            m.cluster_b,
            m.distance,
            m.size
        );
    }

    let exemplars = AffinityPropagation::new()
        .with_metric(Metric::Haversine)
        .with_damping(0.7)
        .fit_exemplars(&points)?;
    println!("affinity propagation: {} exemplars", exemplars.len());
    for (idx, c) in &exemplars {
        println!("  exemplar {idx}: {} points", c.len());
    }

    Ok(())
}
