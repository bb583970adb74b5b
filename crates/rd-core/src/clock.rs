//! Logical time for dispatch events.
//!
//! # Design
//!
//! Every engine event (submit, dispatch, complete) is stamped with a `Tick`
//! taken from a monotonically increasing counter.  The mapping to wall-clock
//! time is held in `DispatchClock`:
//!
//!   wall_time = start_unix_secs + tick * tick_duration_secs
//!
//! Integer ticks keep event ordering exact and reproducible across runs; no
//! system clock is ever read by the engine.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute logical timestamp.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── DispatchClock ─────────────────────────────────────────────────────────────

/// Hands out event ticks and converts them to Unix seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchClock {
    /// Unix timestamp (seconds since epoch) of tick 0.
    pub start_unix_secs: i64,
    /// How many real seconds one tick represents.
    pub tick_duration_secs: u32,
    /// The most recently issued tick.
    pub current_tick: Tick,
}

impl DispatchClock {
    pub fn new(start_unix_secs: i64, tick_duration_secs: u32) -> Self {
        Self {
            start_unix_secs,
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance by one tick and return the new current tick.
    #[inline]
    pub fn advance(&mut self) -> Tick {
        self.current_tick = self.current_tick + 1;
        self.current_tick
    }

    /// Unix timestamp corresponding to `tick`.
    #[inline]
    pub fn unix_secs(&self, tick: Tick) -> i64 {
        self.start_unix_secs + tick.0 as i64 * self.tick_duration_secs as i64
    }

    /// Unix timestamp of the current tick.
    #[inline]
    pub fn current_unix_secs(&self) -> i64 {
        self.unix_secs(self.current_tick)
    }
}

impl fmt::Display for DispatchClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (unix {})", self.current_tick, self.current_unix_secs())
    }
}
