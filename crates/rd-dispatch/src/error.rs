//! Dispatch error type.
//!
//! Errors from the fleet, graph and core layers are wrapped via `#[from]`.

use rd_core::{CoreError, RequestId};
use rd_fleet::FleetError;
use rd_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no pending ride requests")]
    QueueEmpty,

    #[error("no available driver for request {request} (requeued: {requeued})")]
    NoAvailableDrivers {
        request:  RequestId,
        requeued: bool,
    },

    #[error("request {0} is not active")]
    RequestNotFound(RequestId),

    #[error("request ids exhausted")]
    RequestIdsExhausted,

    #[error("fleet error: {0}")]
    Fleet(#[from] FleetError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("configuration error: {0}")]
    Core(#[from] CoreError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
