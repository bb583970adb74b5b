//! Fleet error type.

use thiserror::Error;

use rd_core::{DriverId, PassengerId};

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("driver {0} is already registered")]
    DuplicateDriver(DriverId),

    #[error("driver {0} not found")]
    DriverNotFound(DriverId),

    #[error("passenger {0} is already registered")]
    DuplicatePassenger(PassengerId),

    #[error("passenger {0} not found")]
    PassengerNotFound(PassengerId),

    #[error("rating {0} is outside 0.0..=5.0")]
    InvalidRating(f64),

    #[error("fleet file parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FleetResult<T> = Result<T, FleetError>;
