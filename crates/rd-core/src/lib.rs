//! `rd-core` — foundational types for the ride dispatch engine.
//!
//! This crate is a dependency of every other `rd-*` crate.  It has no `rd-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module           | Contents                                              |
//! |------------------|-------------------------------------------------------|
//! | [`ids`]          | `DriverId`, `PassengerId`, `RequestId`, `LocationId`  |
//! | [`coord`]        | `Coord` (planar x/y), euclidean distance              |
//! | [`clock`]        | `Tick`, `DispatchClock`                               |
//! | [`config`]       | `DispatchConfig`, `DistanceMode`                      |
//! | [`availability`] | `Availability` enum                                   |
//! | [`rng`]          | `SimRng` (seeded, deterministic)                      |
//! | [`error`]        | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod availability;
pub mod clock;
pub mod config;
pub mod coord;
pub mod error;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use availability::Availability;
pub use clock::{DispatchClock, Tick};
pub use config::{DispatchConfig, DistanceMode};
pub use coord::Coord;
pub use error::{CoreError, CoreResult};
pub use ids::{DriverId, LocationId, PassengerId, RequestId};
pub use rng::SimRng;
