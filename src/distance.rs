//! Distance metrics between points.
//!
//! Every algorithm takes a [`Metric`]. The built-in variants cover planar
//! data ([`Metric::Euclidean`]) and latitude/longitude pairs
//! ([`Metric::Haversine`]); anything else goes through [`Metric::custom`].
//!
//! Metrics are expected to be symmetric and non-negative, with `d(p, p) == 0`.
//! None of this is checked.

use crate::point::Point;
use core::fmt;
use std::sync::Arc;

/// Mean Earth radius in meters used by [`haversine`].
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Caller-supplied distance function.
pub type DistanceFn = dyn Fn(&Point, &Point) -> f64 + Send + Sync;

/// Distance metric used to compare points.
#[derive(Clone, Default)]
pub enum Metric {
    /// Planar straight-line distance.
    #[default]
    Euclidean,
    /// Great-circle distance in meters; `x` = latitude, `y` = longitude (degrees).
    Haversine,
    /// Arbitrary caller-supplied function.
    Custom(Arc<DistanceFn>),
}

impl Metric {
    /// Wrap a closure as a metric.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Point, &Point) -> f64 + Send + Sync + 'static,
    {
        Metric::Custom(Arc::new(f))
    }

    /// Distance between `a` and `b`.
    #[inline]
    pub fn distance(&self, a: &Point, b: &Point) -> f64 {
        match self {
            Metric::Euclidean => euclidean(a, b),
            Metric::Haversine => haversine(a, b),
            Metric::Custom(f) => f(a, b),
        }
    }
}

impl fmt::Debug for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Euclidean => write!(f, "Euclidean"),
            Metric::Haversine => write!(f, "Haversine"),
            Metric::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Euclidean distance.
#[inline]
pub fn euclidean(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Haversine great-circle distance in meters.
///
/// ```text
/// a = sin²(Δφ/2) + cos φ₁ · cos φ₂ · sin²(Δλ/2)
/// d = 2R · atan2(√a, √(1−a))
/// ```
pub fn haversine(a: &Point, b: &Point) -> f64 {
    let phi1 = a.x.to_radians();
    let phi2 = b.x.to_radians();
    let d_phi = (b.x - a.x).to_radians();
    let d_lambda = (b.y - a.y).to_radians();

    let s_phi = (d_phi / 2.0).sin();
    let s_lambda = (d_lambda / 2.0).sin();
    let h = s_phi * s_phi + phi1.cos() * phi2.cos() * s_lambda * s_lambda;
    // Rounding can push h just past 1 near antipodes.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}
