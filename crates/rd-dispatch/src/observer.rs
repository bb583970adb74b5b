//! Dispatch observer trait for reporting and data collection.

use rd_core::Tick;

use crate::{Assignment, Completion, RideRequest};

/// Callbacks invoked by [`DispatchEngine`][crate::DispatchEngine] as requests
/// move through their lifecycle.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: assignment printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl DispatchObserver for Printer {
///     fn on_assigned(&mut self, a: &Assignment) {
///         println!("{} -> {} ({:.1})", a.request, a.driver, a.fare);
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// A request was accepted and queued.
    fn on_submitted(&mut self, _request: &RideRequest) {}

    /// A driver was assigned.
    fn on_assigned(&mut self, _assignment: &Assignment) {}

    /// No driver could take `request` at `tick`.  `requeued` is `true` when
    /// the request went back to the head of the queue instead of being
    /// dropped.
    fn on_unassignable(&mut self, _request: &RideRequest, _tick: Tick, _requeued: bool) {}

    /// A ride finished and its driver is free again.
    fn on_completed(&mut self, _completion: &Completion) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
