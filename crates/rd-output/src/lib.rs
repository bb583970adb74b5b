//! `rd-output` — dispatch log writers.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend     | Files created                 |
//! |-----------|-------------|-------------------------------|
//! | *(none)*  | CSV         | `rides.csv`, `events.csv`     |
//! | `sqlite`  | SQLite      | `dispatch.db`                 |
//!
//! Both implement [`DispatchLogWriter`] and are driven by
//! [`DispatchLogObserver`], which implements `rd_dispatch::DispatchObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rd_output::{CsvWriter, DispatchLogObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut log = DispatchLogObserver::new(writer, &config);
//! engine.run_pending(&mut log)?;
//! log.finish();
//! if let Some(e) = log.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::DispatchLogObserver;
pub use row::{EventKind, EventRow, RideRow};
pub use writer::DispatchLogWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
