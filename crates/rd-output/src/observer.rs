//! `DispatchLogObserver<W>` — bridges `DispatchObserver` to a `DispatchLogWriter`.

use rd_core::{DispatchClock, DispatchConfig, RequestId, Tick};
use rd_dispatch::{Assignment, Completion, DispatchObserver, RideRequest};

use crate::row::{EventKind, EventRow, RideRow};
use crate::writer::DispatchLogWriter;
use crate::{OutputError, OutputResult};

/// A [`DispatchObserver`] that writes every assignment as a ride row and
/// every lifecycle transition as an event row to any [`DispatchLogWriter`]
/// backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  Call [`finish`][Self::finish] when done, then check
/// [`take_error`][Self::take_error].
pub struct DispatchLogObserver<W: DispatchLogWriter> {
    writer:     W,
    clock:      DispatchClock,
    last_error: Option<OutputError>,
}

impl<W: DispatchLogWriter> DispatchLogObserver<W> {
    /// Create an observer backed by `writer`, using `config` for wall-clock
    /// conversion.
    pub fn new(writer: W, config: &DispatchConfig) -> Self {
        Self {
            writer,
            clock:      config.make_clock(),
            last_error: None,
        }
    }

    /// Flush the writer.  Any failure is stored like a write error.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files afterwards).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn event(&mut self, tick: Tick, request: RequestId, kind: EventKind, driver: Option<u32>) {
        let row = EventRow {
            tick:           tick.0,
            unix_time_secs: self.clock.unix_secs(tick),
            request_id:     request.0,
            kind,
            driver_id:      driver,
        };
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: DispatchLogWriter> DispatchObserver for DispatchLogObserver<W> {
    fn on_submitted(&mut self, request: &RideRequest) {
        self.event(request.created_at, request.id, EventKind::Submitted, None);
    }

    fn on_assigned(&mut self, a: &Assignment) {
        let row = RideRow {
            request_id:     a.request.0,
            passenger_id:   a.passenger.0,
            driver_id:      a.driver.0,
            pickup:         a.pickup.clone(),
            dropoff:        a.dropoff.clone(),
            hops:           a.route.hops() as u32,
            distance:       a.distance,
            fare:           a.fare,
            reachable:      !a.is_unreachable(),
            tick:           a.tick.0,
            unix_time_secs: self.clock.unix_secs(a.tick),
        };
        let result = self.writer.write_ride(&row);
        self.store_err(result);
        self.event(a.tick, a.request, EventKind::Assigned, Some(a.driver.0));
    }

    fn on_unassignable(&mut self, request: &RideRequest, tick: Tick, requeued: bool) {
        let kind = if requeued { EventKind::Requeued } else { EventKind::Unassignable };
        self.event(tick, request.id, kind, None);
    }

    fn on_completed(&mut self, c: &Completion) {
        self.event(c.tick, c.request.id, EventKind::Completed, Some(c.driver.0));
    }
}
