//! `rd-dispatch` — request queue and dispatch engine.
//!
//! # Dispatch cycle
//!
//! ```text
//! submit(passenger, pickup, dropoff)
//!   → RideRequest (Queued) appended to RequestQueue
//!
//! dispatch_next():
//!   ① Dequeue   — oldest request; QueueEmpty if none.
//!   ② Candidates — available drivers, ascending DriverId.
//!   ③ Select    — MatchPolicy picks one (default: HighestRated);
//!                 none → NoAvailableDrivers (dropped, or re-queued).
//!   ④ Route     — Router from pickup to drop-off; unreachable → empty.
//!   ⑤ Price     — distance from DistanceMode, fare from FareModel.
//!   ⑥ Commit    — driver Assigned, Ride appended to its history,
//!                 request Assigned and tracked as active.
//!
//! complete(request):
//!   driver Available at the drop-off, request Completed.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `drivers_nearest` routes on Rayon's thread pool.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rd_core::{DispatchConfig, PassengerId};
//! use rd_dispatch::{EngineBuilder, HighestRated, NoopObserver};
//! use rd_graph::DijkstraRouter;
//!
//! let mut engine = EngineBuilder::new(DispatchConfig::default(), HighestRated, DijkstraRouter)
//!     .graph(graph)
//!     .drivers(drivers)
//!     .build()?;
//! engine.submit(PassengerId(1), "Main Gate", "North Gate", &mut NoopObserver)?;
//! let summary = engine.run_pending(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod fare;
pub mod observer;
pub mod policy;
pub mod queue;
pub mod request;


pub use builder::EngineBuilder;
pub use engine::{Assignment, Completion, DispatchEngine, DispatchSummary};
pub use error::{DispatchError, DispatchResult};
pub use fare::{FareModel, LinearFare, ride_distance};
pub use observer::{DispatchObserver, NoopObserver};
pub use policy::{HighestRated, MatchContext, MatchPolicy, NearestDriver};
pub use queue::RequestQueue;
pub use request::{RequestStatus, RideRequest};
