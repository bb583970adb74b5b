//! Location graph representation.
//!
//! # Data layout
//!
//! Locations are interned: each distinct name gets a dense `LocationId`, and
//! every per-location array (`names`, `coords`, `adjacency`) is indexed by
//! it.  A hash index maps names back to ids.
//!
//! ```text
//! adjacency[id] = [Edge { to, weight }, ...]   // insertion order
//! ```
//!
//! Edges are stored once per direction.  Parallel edges are kept as-is;
//! relaxation in the router naturally uses the cheapest one.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) holds every location that has coordinates, so
//! `nearest_location` can snap an arbitrary point to a named location.
//! Coordinates never influence path costs.

use std::collections::{BTreeSet, VecDeque};

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use rd_core::{Coord, LocationId};

use crate::{DijkstraRouter, GraphError, GraphResult, Router};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index.
#[derive(Clone, Debug, PartialEq)]
struct LocationEntry {
    point: [f64; 2], // [x, y]
    id:    LocationId,
}

impl RTreeObject for LocationEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for LocationEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── Edge ──────────────────────────────────────────────────────────────────────

/// One directed half of an undirected route.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub to:     LocationId,
    pub weight: f64,
}

// ── LocationGraph ─────────────────────────────────────────────────────────────

/// Weighted undirected graph of named locations.
///
/// Locations are created explicitly with [`add_location`](Self::add_location)
/// or implicitly the first time a route mentions them; they are never
/// removed.  After setup the graph is only read, and it is `Send + Sync`, so
/// it can be shared by concurrent readers without locking.
///
/// # Example
///
/// ```
/// use rd_core::Coord;
/// use rd_graph::LocationGraph;
///
/// let mut g = LocationGraph::new();
/// g.add_location("Main Gate", Coord::new(0.0, 0.0)).unwrap();
/// g.add_route("Main Gate", "North Gate", 0.8).unwrap();
/// assert_eq!(g.location_count(), 2);
/// assert_eq!(g.shortest_path("Main Gate", "North Gate"), ["Main Gate", "North Gate"]);
/// ```
#[derive(Default)]
pub struct LocationGraph {
    names:       Vec<String>,
    coords:      Vec<Option<Coord>>,
    adjacency:   Vec<Vec<Edge>>,
    index:       FxHashMap<String, LocationId>,
    route_count: usize,
    spatial_idx: RTree<LocationEntry>,
}

impl LocationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Register `name` at `coord`.
    ///
    /// Idempotent: registering an existing name keeps its id and replaces its
    /// coordinates (last call wins).
    pub fn add_location(&mut self, name: &str, coord: Coord) -> GraphResult<LocationId> {
        if !coord.is_finite() {
            return Err(GraphError::InvalidCoordinate { name: name.to_owned(), coord });
        }
        let id = self.ensure_location(name);
        if let Some(old) = self.coords[id.index()] {
            self.spatial_idx.remove(&LocationEntry { point: [old.x, old.y], id });
        }
        self.coords[id.index()] = Some(coord);
        self.spatial_idx.insert(LocationEntry { point: [coord.x, coord.y], id });
        Ok(id)
    }

    /// Add an undirected route of length `distance` between `a` and `b`,
    /// creating either location if it is new.
    ///
    /// A self-loop (`a == b`) is stored once.  Fails with
    /// [`GraphError::InvalidWeight`] for negative or non-finite distances,
    /// in which case the graph is left untouched.
    pub fn add_route(&mut self, a: &str, b: &str, distance: f64) -> GraphResult<()> {
        if !(distance.is_finite() && distance >= 0.0) {
            return Err(GraphError::InvalidWeight {
                from:   a.to_owned(),
                to:     b.to_owned(),
                weight: distance,
            });
        }
        let ia = self.ensure_location(a);
        let ib = self.ensure_location(b);
        self.adjacency[ia.index()].push(Edge { to: ib, weight: distance });
        if ia != ib {
            self.adjacency[ib.index()].push(Edge { to: ia, weight: distance });
        }
        self.route_count += 1;
        Ok(())
    }

    /// Intern `name`, returning its existing id or a fresh one.
    fn ensure_location(&mut self, name: &str) -> LocationId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = LocationId(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.coords.push(None);
        self.adjacency.push(Vec::new());
        self.index.insert(name.to_owned(), id);
        id
    }

    // ── Dimensions & lookup ───────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    /// Number of undirected routes added (parallel routes counted separately).
    pub fn route_count(&self) -> usize {
        self.route_count
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn id_of(&self, name: &str) -> Option<LocationId> {
        self.index.get(name).copied()
    }

    /// Name of `id`.
    ///
    /// # Panics
    /// Panics if `id` did not come from this graph.
    #[inline]
    pub fn name(&self, id: LocationId) -> &str {
        &self.names[id.index()]
    }

    pub fn coordinates(&self, name: &str) -> Option<Coord> {
        self.id_of(name).and_then(|id| self.coords[id.index()])
    }

    /// All location names in registration order.
    pub fn location_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Outgoing edges of `id` in insertion order.
    #[inline]
    pub fn edges(&self, id: LocationId) -> &[Edge] {
        &self.adjacency[id.index()]
    }

    /// `(neighbour, weight)` pairs for `name`; empty for unknown names.
    pub fn neighbours(&self, name: &str) -> Vec<(&str, f64)> {
        match self.id_of(name) {
            None => vec![],
            Some(id) => self
                .edges(id)
                .iter()
                .map(|e| (self.name(e.to), e.weight))
                .collect(),
        }
    }

    // ── Path queries ──────────────────────────────────────────────────────

    /// Minimum-weight path from `start` to `end`, both inclusive.
    ///
    /// Returns `[start]` when `start == end`, and an empty vec when either
    /// name is unknown or `end` is unreachable.
    pub fn shortest_path(&self, start: &str, end: &str) -> Vec<String> {
        DijkstraRouter
            .route(self, start, end)
            .map(|route| route.stops)
            .unwrap_or_default()
    }

    /// Every location connected to `start` (including `start`), found by
    /// breadth-first search.  Empty for unknown names.
    pub fn reachable_from(&self, start: &str) -> BTreeSet<String> {
        let Some(origin) = self.id_of(start) else {
            return BTreeSet::new();
        };

        let mut seen = vec![false; self.location_count()];
        let mut frontier = VecDeque::from([origin]);
        seen[origin.index()] = true;

        let mut out = BTreeSet::new();
        while let Some(node) = frontier.pop_front() {
            out.insert(self.name(node).to_owned());
            for edge in self.edges(node) {
                if !seen[edge.to.index()] {
                    seen[edge.to.index()] = true;
                    frontier.push_back(edge.to);
                }
            }
        }
        out
    }

    /// Depth-first discovery order from `start`.
    ///
    /// Uses an explicit work stack, so arbitrarily deep graphs cannot
    /// overflow the call stack.  Neighbours are explored in insertion order,
    /// matching what a recursive walk over the same adjacency lists visits.
    pub fn depth_first(&self, start: &str) -> Vec<String> {
        let Some(origin) = self.id_of(start) else {
            return vec![];
        };

        let mut visited = vec![false; self.location_count()];
        let mut stack = vec![origin];
        let mut order = Vec::new();

        while let Some(node) = stack.pop() {
            if visited[node.index()] {
                continue;
            }
            visited[node.index()] = true;
            order.push(self.name(node).to_owned());

            // Reverse so the first-inserted neighbour is popped first.
            for edge in self.edges(node).iter().rev() {
                if !visited[edge.to.index()] {
                    stack.push(edge.to);
                }
            }
        }
        order
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Name of the located node nearest to `coord`.
    ///
    /// Returns `None` if no location has coordinates.
    pub fn nearest_location(&self, coord: Coord) -> Option<&str> {
        self.spatial_idx
            .nearest_neighbor(&[coord.x, coord.y])
            .map(|e| self.name(e.id))
    }

    /// Up to `k` located nodes nearest to `coord`, closest first.
    pub fn k_nearest_locations(&self, coord: Coord, k: usize) -> Vec<&str> {
        self.spatial_idx
            .nearest_neighbor_iter(&[coord.x, coord.y])
            .take(k)
            .map(|e| self.name(e.id))
            .collect()
    }
}
