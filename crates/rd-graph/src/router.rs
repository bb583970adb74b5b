//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! `rd-dispatch` calls routing via the [`Router`] trait, so applications can
//! swap in custom implementations (A*, cached tables, external services)
//! without touching the engine.  The default [`DijkstraRouter`] is a
//! heap-based Dijkstra over the graph's adjacency lists.
//!
//! # Determinism
//!
//! When two frontier locations have the same tentative distance, the one
//! with the lexicographically smaller name is settled first.  Together with
//! insertion-ordered adjacency lists this makes every returned path
//! reproducible.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use rd_core::LocationId;

use crate::graph::LocationGraph;
use crate::{GraphError, GraphResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: the visited location names and the summed
/// edge weight.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Route {
    /// Locations in traversal order, from source to destination inclusive.
    pub stops: Vec<String>,
    /// Sum of the traversed edge weights.
    pub total_distance: f64,
}

impl Route {
    /// The "no route" value: no stops, zero distance.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// `true` if the source and destination are the same location.
    pub fn is_trivial(&self) -> bool {
        self.stops.len() == 1
    }

    /// `true` for the unreachable marker.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a single router can be shared by
/// parallel ranking queries.
pub trait Router: Send + Sync {
    /// Compute a route from `from` to `to`.
    ///
    /// `from == to` yields a single-stop route.  Unknown names yield
    /// [`GraphError::LocationNotFound`]; disconnected endpoints yield
    /// [`GraphError::NoRoute`].
    fn route(&self, graph: &LocationGraph, from: &str, to: &str) -> GraphResult<Route>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm with a binary min-heap.
#[derive(Debug, Default, Clone, Copy)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, graph: &LocationGraph, from: &str, to: &str) -> GraphResult<Route> {
        let source = graph
            .id_of(from)
            .ok_or_else(|| GraphError::LocationNotFound(from.to_owned()))?;
        let target = graph
            .id_of(to)
            .ok_or_else(|| GraphError::LocationNotFound(to.to_owned()))?;

        match dijkstra(graph, source, target) {
            Some(route) => {
                debug!(from, to, hops = route.hops(), distance = route.total_distance, "route found");
                Ok(route)
            }
            None => {
                debug!(from, to, "no route");
                Err(GraphError::NoRoute { from: from.to_owned(), to: to.to_owned() })
            }
        }
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Total-ordered wrapper for path costs.  Weights are validated finite and
/// non-negative on insertion, so `total_cmp` agrees with numeric order.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

fn dijkstra(graph: &LocationGraph, from: LocationId, to: LocationId) -> Option<Route> {
    if from == to {
        return Some(Route { stops: vec![graph.name(from).to_owned()], total_distance: 0.0 });
    }

    let n = graph.location_count();
    // dist[v] = best known cost to reach v.
    let mut dist    = vec![f64::INFINITY; n];
    // prev[v] = location that reached v; None for unreached nodes and `from`.
    let mut prev    = vec![None::<LocationId>; n];
    let mut settled = vec![false; n];

    dist[from.index()] = 0.0;

    // Min-heap on (cost, name).  Reverse makes BinaryHeap (max) behave as a
    // min-heap; the name key makes equal-cost pops deterministic.
    let mut heap: BinaryHeap<Reverse<(Cost, &str, LocationId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), graph.name(from), from)));

    while let Some(Reverse((Cost(cost), _, node))) = heap.pop() {
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;
        trace!(location = graph.name(node), cost, "settled");

        if node == to {
            return Some(reconstruct(graph, &prev, from, to, cost));
        }

        for edge in graph.edges(node) {
            let next = edge.to;
            if settled[next.index()] {
                continue;
            }
            let new_cost = cost + edge.weight;
            if new_cost < dist[next.index()] {
                dist[next.index()] = new_cost;
                prev[next.index()] = Some(node);
                heap.push(Reverse((Cost(new_cost), graph.name(next), next)));
            }
        }
    }

    None
}

fn reconstruct(
    graph: &LocationGraph,
    prev:  &[Option<LocationId>],
    from:  LocationId,
    to:    LocationId,
    total: f64,
) -> Route {
    let mut ids = vec![to];
    let mut cur = to;
    while let Some(p) = prev[cur.index()] {
        ids.push(p);
        cur = p;
    }
    debug_assert_eq!(cur, from, "predecessor chain must end at the source");
    ids.reverse();
    Route {
        stops:          ids.into_iter().map(|id| graph.name(id).to_owned()).collect(),
        total_distance: total,
    }
}
