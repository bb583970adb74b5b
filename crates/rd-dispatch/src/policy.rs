//! Driver selection policies.
//!
//! The engine hands every policy the same inputs: the request being served
//! and the available drivers in ascending id order.  A policy returns the
//! driver to assign, or `None` to leave the request unassigned.

use rd_fleet::{Driver, DriverDirectory};
use rd_graph::{LocationGraph, Router};

use crate::RideRequest;

/// Read-only view of the world passed to [`MatchPolicy::select`].
pub struct MatchContext<'a> {
    pub request: &'a RideRequest,
    pub graph:   &'a LocationGraph,
    pub router:  &'a dyn Router,
}

impl MatchContext<'_> {
    /// Routed distance from `driver`'s location to the pickup, or
    /// `f64::INFINITY` when the pickup cannot be reached.
    pub fn distance_to_pickup(&self, driver: &Driver) -> f64 {
        self.router
            .route(self.graph, driver.location(), &self.request.pickup)
            .map(|route| route.total_distance)
            .unwrap_or(f64::INFINITY)
    }
}

/// Chooses which available driver serves a request.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so an engine can be moved between
/// threads.
pub trait MatchPolicy: Send + Sync {
    /// Pick one of `candidates` (non-empty, ascending id order).
    fn select<'d>(&self, ctx: &MatchContext<'_>, candidates: &[&'d Driver]) -> Option<&'d Driver>;
}

// ── HighestRated ──────────────────────────────────────────────────────────────

/// The default policy: highest rating wins, lowest id breaks ties.
#[derive(Debug, Default, Clone, Copy)]
pub struct HighestRated;

impl MatchPolicy for HighestRated {
    fn select<'d>(&self, _ctx: &MatchContext<'_>, candidates: &[&'d Driver]) -> Option<&'d Driver> {
        DriverDirectory::select_best(candidates)
    }
}

// ── NearestDriver ─────────────────────────────────────────────────────────────

/// Shortest routed distance to the pickup wins.
///
/// Ties go to the higher rating, then the lower id.  Drivers that cannot
/// reach the pickup rank after every driver that can, so the policy still
/// assigns someone when no route exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestDriver;

impl MatchPolicy for NearestDriver {
    fn select<'d>(&self, ctx: &MatchContext<'_>, candidates: &[&'d Driver]) -> Option<&'d Driver> {
        candidates
            .iter()
            .map(|&d| (ctx.distance_to_pickup(d), d))
            .min_by(|(da, a), (db, b)| {
                da.total_cmp(db)
                    .then_with(|| b.rating().total_cmp(&a.rating()))
                    .then_with(|| a.id().cmp(&b.id()))
            })
            .map(|(_, d)| d)
    }
}
