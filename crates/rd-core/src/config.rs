//! Engine configuration.

use crate::{CoreError, CoreResult, DispatchClock};

/// How a ride's distance is derived from its route.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DistanceMode {
    /// `hops × per_hop_distance`, ignoring edge weights.
    #[default]
    HopCount,
    /// Sum of the traversed edge weights.
    EdgeWeight,
}

/// Top-level dispatch configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// `EngineBuilder`.  `Default` gives the stock settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispatchConfig {
    /// Unix timestamp for tick 0.
    pub start_unix_secs: i64,

    /// Seconds per tick, used only to render event times.
    pub tick_duration_secs: u32,

    /// Distance credited per route hop under [`DistanceMode::HopCount`].
    pub per_hop_distance: f64,

    /// Fare charged per unit of distance.
    pub fare_per_unit: f64,

    /// How ride distance is computed from a route.
    pub distance_mode: DistanceMode,

    /// Put requests that found no free driver back at the head of the queue
    /// instead of dropping them.
    pub requeue_unassignable: bool,

    /// Seed for any randomised helpers (sample data, tests).
    pub seed: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            start_unix_secs:      1_704_067_200, // 2024-01-01T00:00:00Z
            tick_duration_secs:   60,
            per_hop_distance:     1.0,
            fare_per_unit:        10.0,
            distance_mode:        DistanceMode::HopCount,
            requeue_unassignable: false,
            seed:                 42,
        }
    }
}

impl DispatchConfig {
    /// Reject settings that would produce negative or non-finite fares.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.per_hop_distance.is_finite() && self.per_hop_distance >= 0.0) {
            return Err(CoreError::Config(format!(
                "per_hop_distance must be a non-negative number, got {}",
                self.per_hop_distance
            )));
        }
        if !(self.fare_per_unit.is_finite() && self.fare_per_unit >= 0.0) {
            return Err(CoreError::Config(format!(
                "fare_per_unit must be a non-negative number, got {}",
                self.fare_per_unit
            )));
        }
        if self.tick_duration_secs == 0 {
            return Err(CoreError::Config("tick_duration_secs must be > 0".into()));
        }
        Ok(())
    }

    /// Construct a `DispatchClock` pre-configured for this run.
    pub fn make_clock(&self) -> DispatchClock {
        DispatchClock::new(self.start_unix_secs, self.tick_duration_secs)
    }
}
