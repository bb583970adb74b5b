//! Unit tests for rd-graph.
//!
//! All tests use hand-crafted or seeded-random graphs; no files are read.

#[cfg(test)]
mod helpers {
    use crate::LocationGraph;

    /// The campus network used throughout the tests.
    ///
    /// ```text
    /// Main Gate ──0.8── North Gate
    ///     │                 │
    ///    0.9               1.2
    ///     │                 │
    /// Reptile House ────────┘
    /// ```
    pub fn campus() -> LocationGraph {
        let mut g = LocationGraph::new();
        g.add_route("Main Gate", "North Gate", 0.8).unwrap();
        g.add_route("Main Gate", "Reptile House", 0.9).unwrap();
        g.add_route("North Gate", "Reptile House", 1.2).unwrap();
        g
    }

    /// A five-node grid where the fewest-hop path is not the cheapest.
    ///
    /// Path via A→B→C→E: 1+1+1 = 3
    /// Path via A→D→E:   5+1   = 6
    pub fn grid() -> LocationGraph {
        let mut g = LocationGraph::new();
        g.add_route("A", "B", 1.0).unwrap();
        g.add_route("B", "C", 1.0).unwrap();
        g.add_route("C", "E", 1.0).unwrap();
        g.add_route("A", "D", 5.0).unwrap();
        g.add_route("D", "E", 1.0).unwrap();
        g
    }

    /// Sum of edge weights along `path`, using the cheapest parallel edge.
    pub fn path_cost(g: &LocationGraph, path: &[String]) -> f64 {
        path.windows(2)
            .map(|w| {
                g.neighbours(&w[0])
                    .into_iter()
                    .filter(|(n, _)| *n == w[1])
                    .map(|(_, wt)| wt)
                    .fold(f64::INFINITY, f64::min)
            })
            .sum()
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use rd_core::Coord;

    use crate::{GraphError, LocationGraph};

    #[test]
    fn empty_graph() {
        let g = LocationGraph::new();
        assert!(g.is_empty());
        assert_eq!(g.location_count(), 0);
        assert_eq!(g.route_count(), 0);
    }

    #[test]
    fn routes_create_locations_implicitly() {
        let g = super::helpers::campus();
        assert_eq!(g.location_count(), 3);
        assert_eq!(g.route_count(), 3);
        assert!(g.contains("Reptile House"));
        assert!(g.coordinates("Reptile House").is_none());
    }

    #[test]
    fn routes_are_symmetric() {
        let g = super::helpers::campus();
        assert!(g.neighbours("Main Gate").contains(&("North Gate", 0.8)));
        assert!(g.neighbours("North Gate").contains(&("Main Gate", 0.8)));
    }

    #[test]
    fn add_location_is_idempotent_last_coords_win() {
        let mut g = LocationGraph::new();
        let a = g.add_location("Main Gate", Coord::new(0.0, 0.0)).unwrap();
        let b = g.add_location("Main Gate", Coord::new(5.0, 5.0)).unwrap();
        assert_eq!(a, b);
        assert_eq!(g.location_count(), 1);
        assert_eq!(g.coordinates("Main Gate"), Some(Coord::new(5.0, 5.0)));
        // The old R-tree entry was replaced, not duplicated.
        assert_eq!(g.k_nearest_locations(Coord::new(0.0, 0.0), 5).len(), 1);
    }

    #[test]
    fn negative_weight_rejected_without_side_effects() {
        let mut g = LocationGraph::new();
        let err = g.add_route("A", "B", -1.0).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { .. }));
        assert!(g.is_empty(), "rejected route must not create locations");
    }

    #[test]
    fn nan_and_infinite_weights_rejected() {
        let mut g = LocationGraph::new();
        assert!(g.add_route("A", "B", f64::NAN).is_err());
        assert!(g.add_route("A", "B", f64::INFINITY).is_err());
    }

    #[test]
    fn zero_weight_accepted() {
        let mut g = LocationGraph::new();
        assert!(g.add_route("A", "B", 0.0).is_ok());
    }

    #[test]
    fn non_finite_coordinates_rejected() {
        let mut g = LocationGraph::new();
        let err = g.add_location("X", Coord::new(f64::NAN, 0.0)).unwrap_err();
        assert!(matches!(err, GraphError::InvalidCoordinate { .. }));
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut g = LocationGraph::new();
        g.add_route("A", "B", 3.0).unwrap();
        g.add_route("A", "B", 1.0).unwrap();
        assert_eq!(g.neighbours("A").len(), 2);
        assert_eq!(g.route_count(), 2);
    }

    #[test]
    fn self_loop_stored_once() {
        let mut g = LocationGraph::new();
        g.add_route("A", "A", 2.0).unwrap();
        assert_eq!(g.neighbours("A"), vec![("A", 2.0)]);
    }
}

// ── Shortest paths ────────────────────────────────────────────────────────────

#[cfg(test)]
mod shortest_path {
    use crate::{DijkstraRouter, GraphError, LocationGraph, Router};

    #[test]
    fn direct_edge() {
        let g = super::helpers::campus();
        assert_eq!(g.shortest_path("Main Gate", "North Gate"), ["Main Gate", "North Gate"]);
    }

    #[test]
    fn prefers_cheaper_multi_hop_path() {
        let g = super::helpers::grid();
        assert_eq!(g.shortest_path("A", "E"), ["A", "B", "C", "E"]);
        let route = DijkstraRouter.route(&g, "A", "E").unwrap();
        assert_eq!(route.total_distance, 3.0);
        assert_eq!(route.hops(), 3);
    }

    #[test]
    fn same_location_is_single_stop() {
        let g = super::helpers::campus();
        assert_eq!(g.shortest_path("North Gate", "North Gate"), ["North Gate"]);
        let route = DijkstraRouter.route(&g, "North Gate", "North Gate").unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.total_distance, 0.0);
    }

    #[test]
    fn disconnected_components_give_empty_path() {
        let mut g = super::helpers::campus();
        g.add_route("Island", "Lighthouse", 2.0).unwrap();
        assert!(g.shortest_path("Main Gate", "Island").is_empty());
        assert!(matches!(
            DijkstraRouter.route(&g, "Main Gate", "Island"),
            Err(GraphError::NoRoute { .. })
        ));
    }

    #[test]
    fn unknown_location_gives_empty_path() {
        let g = super::helpers::campus();
        assert!(g.shortest_path("Main Gate", "Nowhere").is_empty());
        assert!(g.shortest_path("Nowhere", "Nowhere").is_empty());
        assert!(matches!(
            DijkstraRouter.route(&g, "Nowhere", "Main Gate"),
            Err(GraphError::LocationNotFound(_))
        ));
    }

    #[test]
    fn parallel_edges_use_minimum() {
        let mut g = LocationGraph::new();
        g.add_route("A", "B", 3.0).unwrap();
        g.add_route("A", "B", 1.0).unwrap();
        let route = DijkstraRouter.route(&g, "A", "B").unwrap();
        assert_eq!(route.total_distance, 1.0);
    }

    #[test]
    fn self_loop_never_used() {
        let mut g = LocationGraph::new();
        g.add_route("A", "A", 0.0).unwrap();
        g.add_route("A", "B", 1.0).unwrap();
        assert_eq!(g.shortest_path("A", "B"), ["A", "B"]);
    }

    #[test]
    fn equal_cost_tie_breaks_by_name() {
        // Two equal-cost routes S→M→T and S→Z→T; "M" < "Z" is settled first
        // and claims T.
        let mut g = LocationGraph::new();
        g.add_route("S", "Z", 1.0).unwrap();
        g.add_route("S", "M", 1.0).unwrap();
        g.add_route("Z", "T", 1.0).unwrap();
        g.add_route("M", "T", 1.0).unwrap();
        for _ in 0..5 {
            assert_eq!(g.shortest_path("S", "T"), ["S", "M", "T"]);
        }
    }

    #[test]
    fn total_distance_matches_path_cost() {
        let g = super::helpers::campus();
        let route = DijkstraRouter.route(&g, "North Gate", "Reptile House").unwrap();
        assert_eq!(route.total_distance, super::helpers::path_cost(&g, &route.stops));
        assert_eq!(route.total_distance, 1.2);
    }
}

// ── Randomised cross-check against brute force ────────────────────────────────

#[cfg(test)]
mod brute_force {
    use rd_core::SimRng;

    use crate::LocationGraph;

    /// Minimum cost over all simple paths from `cur` to `target`.
    fn best_simple_path(
        g:       &LocationGraph,
        cur:     &str,
        target:  &str,
        visited: &mut Vec<String>,
        cost:    f64,
        best:    &mut f64,
    ) {
        if cur == target {
            *best = best.min(cost);
            return;
        }
        for (next, w) in g.neighbours(cur) {
            if visited.iter().any(|v| v == next) {
                continue;
            }
            visited.push(next.to_owned());
            best_simple_path(g, next, target, visited, cost + w, best);
            visited.pop();
        }
    }

    fn random_graph(rng: &mut SimRng, nodes: usize) -> LocationGraph {
        let mut g = LocationGraph::new();
        let names: Vec<String> = (0..nodes).map(|i| format!("L{i}")).collect();
        for name in &names {
            // Register every node so isolated ones still exist.
            g.add_location(name, rd_core::Coord::new(0.0, 0.0)).unwrap();
        }
        for i in 0..nodes {
            for j in i..nodes {
                if rng.gen_bool(0.35) {
                    let w = rng.gen_range(0..10) as f64;
                    g.add_route(&names[i], &names[j], w).unwrap();
                }
            }
        }
        g
    }

    #[test]
    fn dijkstra_never_worse_than_any_simple_path() {
        let mut rng = SimRng::new(7);
        for round in 0..40 {
            let nodes = 3 + round % 5;
            let g = random_graph(&mut rng, nodes);
            for s in 0..nodes {
                for t in 0..nodes {
                    let (from, to) = (format!("L{s}"), format!("L{t}"));
                    let path = g.shortest_path(&from, &to);

                    let mut best = f64::INFINITY;
                    let mut visited = vec![from.clone()];
                    best_simple_path(&g, &from, &to, &mut visited, 0.0, &mut best);

                    if best.is_infinite() {
                        assert!(path.is_empty(), "round {round}: {from}->{to} should be unreachable");
                    } else {
                        assert_eq!(path.first(), Some(&from));
                        assert_eq!(path.last(), Some(&to));
                        let cost = super::helpers::path_cost(&g, &path);
                        assert!(
                            (cost - best).abs() < 1e-9,
                            "round {round}: {from}->{to} cost {cost} vs brute force {best}"
                        );
                    }
                }
            }
        }
    }
}

// ── Traversal ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod traversal {
    use std::collections::BTreeSet;

    use crate::LocationGraph;

    #[test]
    fn reachable_includes_start_and_component() {
        let mut g = super::helpers::campus();
        g.add_route("Island", "Lighthouse", 1.0).unwrap();
        let reach = g.reachable_from("Main Gate");
        let expected: BTreeSet<String> = ["Main Gate", "North Gate", "Reptile House"]
            .into_iter()
            .map(str::to_owned)
            .collect();
        assert_eq!(reach, expected);
    }

    #[test]
    fn reachable_from_unknown_is_empty() {
        let g = super::helpers::campus();
        assert!(g.reachable_from("Nowhere").is_empty());
    }

    #[test]
    fn depth_first_follows_insertion_order() {
        let g = super::helpers::grid();
        // A's neighbours in insertion order: B, D.  B → C → E → D.
        assert_eq!(g.depth_first("A"), ["A", "B", "C", "E", "D"]);
    }

    #[test]
    fn depth_first_long_chain_does_not_overflow() {
        let mut g = LocationGraph::new();
        for i in 0..50_000 {
            g.add_route(&format!("n{i}"), &format!("n{}", i + 1), 1.0).unwrap();
        }
        assert_eq!(g.depth_first("n0").len(), 50_001);
    }
}

// ── Spatial snap ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod snap {
    use rd_core::Coord;

    use crate::LocationGraph;

    fn located() -> LocationGraph {
        let mut g = LocationGraph::new();
        g.add_location("Main Gate", Coord::new(0.0, 0.0)).unwrap();
        g.add_location("North Gate", Coord::new(0.0, 1.0)).unwrap();
        g.add_location("Reptile House", Coord::new(2.0, 0.0)).unwrap();
        g
    }

    #[test]
    fn nearest_exact_and_between() {
        let g = located();
        assert_eq!(g.nearest_location(Coord::new(0.0, 0.0)), Some("Main Gate"));
        assert_eq!(g.nearest_location(Coord::new(0.0, 0.6)), Some("North Gate"));
        assert_eq!(g.nearest_location(Coord::new(1.9, 0.1)), Some("Reptile House"));
    }

    #[test]
    fn unlocated_graph_returns_none() {
        let g = super::helpers::campus();
        assert!(g.nearest_location(Coord::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn k_nearest_order() {
        let g = located();
        assert_eq!(g.k_nearest_locations(Coord::new(0.0, 0.0), 2), ["Main Gate", "North Gate"]);
    }

    #[test]
    fn moved_location_snaps_at_new_position() {
        let mut g = located();
        g.add_location("Main Gate", Coord::new(10.0, 10.0)).unwrap();
        assert_eq!(g.nearest_location(Coord::new(9.0, 9.0)), Some("Main Gate"));
        assert_eq!(g.nearest_location(Coord::new(0.0, 0.0)), Some("North Gate"));
    }
}

// ── CSV loading ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use rd_core::Coord;

    use crate::{load_locations_reader, load_routes_reader, GraphError, LocationGraph};

    const ROUTES: &str = "\
from,to,distance\n\
Main Gate,North Gate,0.8\n\
Main Gate,Reptile House,0.9\n\
North Gate,Reptile House,1.2\n\
";

    #[test]
    fn loads_routes() {
        let mut g = LocationGraph::new();
        let n = load_routes_reader(Cursor::new(ROUTES), &mut g).unwrap();
        assert_eq!(n, 3);
        assert_eq!(g.location_count(), 3);
        assert_eq!(g.shortest_path("North Gate", "Main Gate"), ["North Gate", "Main Gate"]);
    }

    #[test]
    fn bad_distance_is_parse_error() {
        let mut g = LocationGraph::new();
        let csv = "from,to,distance\nA,B,far\n";
        assert!(matches!(
            load_routes_reader(Cursor::new(csv), &mut g),
            Err(GraphError::Parse(_))
        ));
    }

    #[test]
    fn negative_distance_is_invalid_weight() {
        let mut g = LocationGraph::new();
        let csv = "from,to,distance\nA,B,-2\n";
        assert!(matches!(
            load_routes_reader(Cursor::new(csv), &mut g),
            Err(GraphError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn loads_locations_with_trimmed_fields() {
        let mut g = LocationGraph::new();
        let csv = "name, x, y\nMain Gate, 1.5, 2.5\n";
        assert_eq!(load_locations_reader(Cursor::new(csv), &mut g).unwrap(), 1);
        assert_eq!(g.coordinates("Main Gate"), Some(Coord::new(1.5, 2.5)));
    }
}
