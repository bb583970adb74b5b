//! `rd-graph` — named location graph, shortest paths, and route loading.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`graph`]  | `LocationGraph` (adjacency lists + R-tree), traversal queries |
//! | [`router`] | `Router` trait, `Route`, `DijkstraRouter`                    |
//! | [`loader`] | `load_routes_csv`, `load_routes_reader`, `load_locations_reader` |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize` on `Route` and enables `rd-core/serde`.  |

pub mod error;
pub mod graph;
pub mod loader;
pub mod router;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use graph::{Edge, LocationGraph};
pub use loader::{load_locations_reader, load_routes_csv, load_routes_reader};
pub use router::{DijkstraRouter, Route, Router};
