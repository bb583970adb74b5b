//! Passenger records.

use std::collections::BTreeMap;

use tracing::debug;

use rd_core::PassengerId;

use crate::driver::check_rating;
use crate::{FleetError, FleetResult};

/// A registered passenger.  Read-only from the engine's point of view.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Passenger {
    pub id:     PassengerId,
    pub name:   String,
    pub rating: f64,
}

impl Passenger {
    pub fn new(id: PassengerId, name: impl Into<String>, rating: f64) -> Self {
        Self { id, name: name.into(), rating: rating + 0.0 }
    }
}

/// Passengers keyed by id.
#[derive(Debug, Default)]
pub struct PassengerDirectory {
    inner: BTreeMap<PassengerId, Passenger>,
}

impl PassengerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, passenger: Passenger) -> FleetResult<()> {
        check_rating(passenger.rating)?;
        if self.inner.contains_key(&passenger.id) {
            return Err(FleetError::DuplicatePassenger(passenger.id));
        }
        debug!(passenger = %passenger.id, name = %passenger.name, "passenger registered");
        self.inner.insert(passenger.id, passenger);
        Ok(())
    }

    pub fn lookup(&self, id: PassengerId) -> FleetResult<&Passenger> {
        self.inner.get(&id).ok_or(FleetError::PassengerNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Passengers in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Passenger> + '_ {
        self.inner.values()
    }
}
