//! `rd-fleet` — drivers, passengers, and the ordered driver directory.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`driver`]    | `Driver`, `Ride` (history record)                          |
//! | [`passenger`] | `Passenger`, `PassengerDirectory`                          |
//! | [`directory`] | `DriverDirectory` (`BTreeMap` by id), `RankBy`             |
//! | [`loader`]    | `load_drivers_csv`, `load_drivers_reader`, `load_passengers_reader` |
//! | [`error`]     | `FleetError`, `FleetResult<T>`                             |
//!
//! # Mutation model
//!
//! Only [`DriverDirectory::register`] changes membership.  Availability,
//! location, rating, and history change through the [`Driver`] itself,
//! reached with [`DriverDirectory::lookup_mut`] by the dispatch engine.

pub mod directory;
pub mod driver;
pub mod error;
pub mod loader;
pub mod passenger;

#[cfg(test)]
mod tests;

pub use directory::{DriverDirectory, RankBy};
pub use driver::{Driver, Ride};
pub use error::{FleetError, FleetResult};
pub use loader::{load_drivers_csv, load_drivers_reader, load_passengers_reader};
pub use passenger::{Passenger, PassengerDirectory};
