//! Graph error type.

use thiserror::Error;

use rd_core::Coord;

/// Errors produced by `rd-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("invalid weight {weight} for route {from} - {to}: must be finite and non-negative")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("invalid coordinates {coord} for location {name}")]
    InvalidCoordinate { name: String, coord: Coord },

    #[error("location {0:?} not found in graph")]
    LocationNotFound(String),

    #[error("no route from {from:?} to {to:?}")]
    NoRoute { from: String, to: String },

    #[error("route file parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
