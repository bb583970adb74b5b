//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `dispatch.db` file in the configured output directory
//! with two tables: `rides` and `events`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::DispatchLogWriter;
use crate::{EventRow, OutputResult, RideRow};

/// Writes the dispatch log to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `dispatch.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("dispatch.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS rides (
                 request_id     INTEGER PRIMARY KEY,
                 passenger_id   INTEGER NOT NULL,
                 driver_id      INTEGER NOT NULL,
                 pickup         TEXT    NOT NULL,
                 dropoff        TEXT    NOT NULL,
                 hops           INTEGER NOT NULL,
                 distance       REAL    NOT NULL,
                 fare           REAL    NOT NULL,
                 reachable      INTEGER NOT NULL,
                 tick           INTEGER NOT NULL,
                 unix_time_secs INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS events (
                 tick           INTEGER NOT NULL,
                 unix_time_secs INTEGER NOT NULL,
                 request_id     INTEGER NOT NULL,
                 event          TEXT    NOT NULL,
                 driver_id      INTEGER
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl DispatchLogWriter for SqliteWriter {
    fn write_ride(&mut self, row: &RideRow) -> OutputResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO rides \
             (request_id, passenger_id, driver_id, pickup, dropoff, hops, distance, fare, \
              reachable, tick, unix_time_secs) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        )?;
        stmt.execute(rusqlite::params![
            row.request_id,
            row.passenger_id,
            row.driver_id,
            row.pickup,
            row.dropoff,
            row.hops,
            row.distance,
            row.fare,
            row.reachable as i64,
            row.tick as i64,
            row.unix_time_secs,
        ])?;
        Ok(())
    }

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO events (tick, unix_time_secs, request_id, event, driver_id) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                row.tick as i64,
                row.unix_time_secs,
                row.request_id,
                row.kind.as_str(),
                row.driver_id,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
