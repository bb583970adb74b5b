//! Driver record and its ride history.

use rd_core::{Availability, DriverId, Tick};

use crate::{FleetError, FleetResult};

/// Highest rating a driver or passenger may hold.
pub const MAX_RATING: f64 = 5.0;

/// Validate a rating against `0.0..=MAX_RATING`.  `-0.0` comes back as `0.0`.
pub(crate) fn check_rating(rating: f64) -> FleetResult<f64> {
    if (0.0..=MAX_RATING).contains(&rating) {
        Ok(rating + 0.0)
    } else {
        Err(FleetError::InvalidRating(rating))
    }
}

// ── Ride ──────────────────────────────────────────────────────────────────────

/// One entry in a driver's history.  Never modified after it is appended.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ride {
    pub source:      String,
    pub destination: String,
    pub distance:    f64,
    pub fare:        f64,
    pub timestamp:   Tick,
}

// ── Driver ────────────────────────────────────────────────────────────────────

/// A registered driver.
///
/// The id is fixed at construction.  Availability flips between
/// [`Availability::Available`] and [`Availability::Assigned`] as the engine
/// assigns and completes rides; the history only ever grows.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Driver {
    id:           DriverId,
    pub name:     String,
    rating:       f64,
    location:     String,
    availability: Availability,
    history:      Vec<Ride>,
}

impl Driver {
    /// A new, available driver with an empty history.
    ///
    /// The rating is checked when the driver is registered.  A `-0.0`
    /// rating is stored as `0.0` so equal ratings compare equal under
    /// `total_cmp`.
    pub fn new(id: DriverId, name: impl Into<String>, rating: f64, location: impl Into<String>) -> Self {
        Self {
            id,
            name:         name.into(),
            rating:       rating + 0.0,
            location:     location.into(),
            availability: Availability::Available,
            history:      Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> DriverId {
        self.id
    }

    #[inline]
    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Name of the location the driver is currently at.
    #[inline]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[inline]
    pub fn availability(&self) -> Availability {
        self.availability
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }

    /// Rides in the order they were assigned.
    pub fn history(&self) -> &[Ride] {
        &self.history
    }

    // ── Mutators used by the dispatch engine ──────────────────────────────

    pub fn assign(&mut self) {
        self.availability = Availability::Assigned;
    }

    pub fn release(&mut self) {
        self.availability = Availability::Available;
    }

    pub fn record_ride(&mut self, ride: Ride) {
        self.history.push(ride);
    }

    pub fn move_to(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    /// Replace the rating; the rating-update interface for callers outside
    /// the engine.
    pub fn set_rating(&mut self, rating: f64) -> FleetResult<()> {
        self.rating = check_rating(rating)?;
        Ok(())
    }
}
