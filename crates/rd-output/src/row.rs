//! Plain data row types written by output backends.

use std::fmt;

/// One assigned ride.
#[derive(Debug, Clone, PartialEq)]
pub struct RideRow {
    pub request_id:     u32,
    pub passenger_id:   u32,
    pub driver_id:      u32,
    pub pickup:         String,
    pub dropoff:        String,
    /// Route edges travelled; 0 when unreachable.
    pub hops:           u32,
    pub distance:       f64,
    pub fare:           f64,
    pub reachable:      bool,
    pub tick:           u64,
    pub unix_time_secs: i64,
}

/// Lifecycle transitions recorded in the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Submitted,
    Assigned,
    Unassignable,
    Requeued,
    Completed,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Submitted    => "submitted",
            EventKind::Assigned     => "assigned",
            EventKind::Unassignable => "unassignable",
            EventKind::Requeued     => "requeued",
            EventKind::Completed    => "completed",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRow {
    pub tick:           u64,
    pub unix_time_secs: i64,
    pub request_id:     u32,
    pub kind:           EventKind,
    /// Set for `Assigned` and `Completed`.
    pub driver_id:      Option<u32>,
}
