//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `rides.csv`
//! - `events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::DispatchLogWriter;
use crate::{EventRow, OutputResult, RideRow};

/// Writes the dispatch log to two CSV files.
pub struct CsvWriter {
    rides:    Writer<File>,
    events:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut rides = Writer::from_path(dir.join("rides.csv"))?;
        rides.write_record([
            "request_id", "passenger_id", "driver_id", "pickup", "dropoff",
            "hops", "distance", "fare", "reachable", "tick", "unix_time_secs",
        ])?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["tick", "unix_time_secs", "request_id", "event", "driver_id"])?;

        Ok(Self { rides, events, finished: false })
    }
}

impl DispatchLogWriter for CsvWriter {
    fn write_ride(&mut self, row: &RideRow) -> OutputResult<()> {
        self.rides.write_record(&[
            row.request_id.to_string(),
            row.passenger_id.to_string(),
            row.driver_id.to_string(),
            row.pickup.clone(),
            row.dropoff.clone(),
            row.hops.to_string(),
            row.distance.to_string(),
            row.fare.to_string(),
            (row.reachable as u8).to_string(),
            row.tick.to_string(),
            row.unix_time_secs.to_string(),
        ])?;
        Ok(())
    }

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.tick.to_string(),
            row.unix_time_secs.to_string(),
            row.request_id.to_string(),
            row.kind.as_str().to_owned(),
            row.driver_id.map(|d| d.to_string()).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rides.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
