//! CSV route and location loaders.
//!
//! # CSV formats
//!
//! Routes, one undirected edge per row:
//!
//! ```csv
//! from,to,distance
//! Main Gate,North Gate,0.8
//! Main Gate,Reptile House,0.9
//! ```
//!
//! Locations, one registration per row (optional; routes create their
//! endpoints implicitly):
//!
//! ```csv
//! name,x,y
//! Main Gate,0.0,0.0
//! North Gate,0.0,0.8
//! ```
//!
//! Rows are applied in file order.  A bad row aborts the load with the
//! earlier rows already applied.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rd_core::Coord;

use crate::{GraphError, GraphResult, LocationGraph};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RouteRecord {
    from:     String,
    to:       String,
    distance: f64,
}

#[derive(Deserialize)]
struct LocationRecord {
    name: String,
    x:    f64,
    y:    f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Add every route in the CSV file at `path` to `graph`.
///
/// Returns the number of routes added.
pub fn load_routes_csv(path: &Path, graph: &mut LocationGraph) -> GraphResult<usize> {
    let file = std::fs::File::open(path).map_err(GraphError::Io)?;
    load_routes_reader(file, graph)
}

/// Like [`load_routes_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded data.
pub fn load_routes_reader<R: Read>(reader: R, graph: &mut LocationGraph) -> GraphResult<usize> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut added = 0;
    for result in csv_reader.deserialize::<RouteRecord>() {
        let row = result.map_err(|e| GraphError::Parse(e.to_string()))?;
        graph.add_route(&row.from, &row.to, row.distance)?;
        added += 1;
    }
    Ok(added)
}

/// Register every location in a `name,x,y` CSV source.
///
/// Returns the number of rows applied.
pub fn load_locations_reader<R: Read>(reader: R, graph: &mut LocationGraph) -> GraphResult<usize> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut applied = 0;
    for result in csv_reader.deserialize::<LocationRecord>() {
        let row = result.map_err(|e| GraphError::Parse(e.to_string()))?;
        graph.add_location(&row.name, Coord::new(row.x, row.y))?;
        applied += 1;
    }
    Ok(applied)
}
