//! Ride requests and their lifecycle.

use std::fmt;

use rd_core::{DriverId, PassengerId, RequestId, Tick};

/// Where a request is in its lifecycle.
///
/// ```text
/// Queued ──dispatch──▶ Assigned ──complete──▶ Completed
///    │
///    └──no driver──▶ Unassignable
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum RequestStatus {
    #[default]
    Queued,
    Assigned,
    Completed,
    Unassignable,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Queued       => "queued",
            RequestStatus::Assigned     => "assigned",
            RequestStatus::Completed    => "completed",
            RequestStatus::Unassignable => "unassignable",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A passenger's request to travel from `pickup` to `dropoff`.
///
/// Location names are not checked on submission; an unknown name simply
/// produces an unreachable route at dispatch time.
#[derive(Debug, Clone, PartialEq)]
pub struct RideRequest {
    pub id:         RequestId,
    pub passenger:  PassengerId,
    pub pickup:     String,
    pub dropoff:    String,
    pub created_at: Tick,
    /// Set once a driver has been assigned.
    pub driver:     Option<DriverId>,
    pub status:     RequestStatus,
}

impl RideRequest {
    pub fn new(
        id:         RequestId,
        passenger:  PassengerId,
        pickup:     impl Into<String>,
        dropoff:    impl Into<String>,
        created_at: Tick,
    ) -> Self {
        Self {
            id,
            passenger,
            pickup:  pickup.into(),
            dropoff: dropoff.into(),
            created_at,
            driver:  None,
            status:  RequestStatus::Queued,
        }
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.status == RequestStatus::Completed
    }
}
