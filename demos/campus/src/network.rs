//! The sample campus: three landmarks, three routes, three drivers.

use std::io::Cursor;

use anyhow::Result;

use rd_fleet::{DriverDirectory, PassengerDirectory, load_drivers_reader, load_passengers_reader};
use rd_graph::{LocationGraph, load_locations_reader, load_routes_reader};

// Planar coordinates are only used for nearest-landmark snapping.
const LOCATIONS_CSV: &str = "\
name,x,y\n\
Main Gate,0.0,0.0\n\
North Gate,0.0,0.8\n\
Reptile House,0.9,0.0\n\
";

const ROUTES_CSV: &str = "\
from,to,distance\n\
Main Gate,North Gate,0.8\n\
Main Gate,Reptile House,0.9\n\
North Gate,Reptile House,1.2\n\
";

const DRIVERS_CSV: &str = "\
id,name,rating,location\n\
101,Ravi,4.5,Main Gate\n\
102,Anita,4.9,North Gate\n\
103,Karan,4.2,Reptile House\n\
";

const PASSENGERS_CSV: &str = "\
id,name,rating\n\
1,John,5.0\n\
2,Sarah,5.0\n\
";

/// Build the campus location graph.
pub fn build_graph() -> Result<LocationGraph> {
    let mut graph = LocationGraph::new();
    load_locations_reader(Cursor::new(LOCATIONS_CSV), &mut graph)?;
    load_routes_reader(Cursor::new(ROUTES_CSV), &mut graph)?;
    Ok(graph)
}

/// Register the sample drivers and passengers.
pub fn build_fleet() -> Result<(DriverDirectory, PassengerDirectory)> {
    let mut drivers = DriverDirectory::new();
    load_drivers_reader(Cursor::new(DRIVERS_CSV), &mut drivers)?;
    let mut passengers = PassengerDirectory::new();
    load_passengers_reader(Cursor::new(PASSENGERS_CSV), &mut passengers)?;
    Ok((drivers, passengers))
}
