//! The `DispatchLogWriter` trait implemented by all backend writers.

use crate::{EventRow, OutputResult, RideRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// The observer never sees these errors directly: they are stored and
/// retrieved with [`DispatchLogObserver::take_error`][crate::DispatchLogObserver::take_error].
pub trait DispatchLogWriter {
    /// Append one assigned ride.
    fn write_ride(&mut self, row: &RideRow) -> OutputResult<()>;

    /// Append one lifecycle event.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
