//! Ride distance and fare calculation.
//!
//! Formula (default configuration):
//!
//! ```text
//! distance = hops × per_hop_distance        (DistanceMode::HopCount)
//!          = Σ edge weights                 (DistanceMode::EdgeWeight)
//! fare     = distance × fare_per_unit       (LinearFare)
//! ```
//!
//! An unreachable route has no hops and no edges, so both modes give a zero
//! distance and a zero fare.

use rd_core::DistanceMode;
use rd_graph::Route;

/// Prices a ride from its distance.
pub trait FareModel: Send + Sync {
    fn fare(&self, distance: f64) -> f64;
}

/// `distance × per_unit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFare {
    pub per_unit: f64,
}

impl LinearFare {
    pub fn new(per_unit: f64) -> Self {
        Self { per_unit }
    }
}

impl FareModel for LinearFare {
    fn fare(&self, distance: f64) -> f64 {
        distance * self.per_unit
    }
}

/// The distance credited for travelling `route`.
pub fn ride_distance(route: &Route, mode: DistanceMode, per_hop_distance: f64) -> f64 {
    match mode {
        DistanceMode::HopCount   => route.hops() as f64 * per_hop_distance,
        DistanceMode::EdgeWeight => route.total_distance,
    }
}
