//! CSV fleet loaders.
//!
//! # CSV formats
//!
//! Drivers:
//!
//! ```csv
//! id,name,rating,location
//! 101,Ravi,4.5,Main Gate
//! 102,Anita,4.9,North Gate
//! ```
//!
//! Passengers:
//!
//! ```csv
//! id,name,rating
//! 1,John,4.7
//! ```
//!
//! Each row goes through the normal `register` path, so duplicate ids and
//! out-of-range ratings are reported exactly as for programmatic
//! registration.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rd_core::{DriverId, PassengerId};

use crate::{Driver, DriverDirectory, FleetError, FleetResult, Passenger, PassengerDirectory};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DriverRecord {
    id:       u32,
    name:     String,
    rating:   f64,
    location: String,
}

#[derive(Deserialize)]
struct PassengerRecord {
    id:     u32,
    name:   String,
    rating: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Register every driver in the CSV file at `path`.
///
/// Returns the number of drivers registered.
pub fn load_drivers_csv(path: &Path, directory: &mut DriverDirectory) -> FleetResult<usize> {
    let file = std::fs::File::open(path).map_err(FleetError::Io)?;
    load_drivers_reader(file, directory)
}

/// Like [`load_drivers_csv`] but accepts any `Read` source.
pub fn load_drivers_reader<R: Read>(reader: R, directory: &mut DriverDirectory) -> FleetResult<usize> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut count = 0;
    for result in csv_reader.deserialize::<DriverRecord>() {
        let row = result.map_err(|e| FleetError::Parse(e.to_string()))?;
        directory.register(Driver::new(DriverId(row.id), row.name, row.rating, row.location))?;
        count += 1;
    }
    Ok(count)
}

/// Register every passenger in a `id,name,rating` CSV source.
pub fn load_passengers_reader<R: Read>(
    reader:     R,
    passengers: &mut PassengerDirectory,
) -> FleetResult<usize> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut count = 0;
    for result in csv_reader.deserialize::<PassengerRecord>() {
        let row = result.map_err(|e| FleetError::Parse(e.to_string()))?;
        passengers.register(Passenger::new(PassengerId(row.id), row.name, row.rating))?;
        count += 1;
    }
    Ok(count)
}
