//! The `DispatchEngine` and its request lifecycle.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use rd_core::{Coord, DispatchClock, DispatchConfig, DriverId, LocationId, PassengerId, RequestId, Tick};
use rd_fleet::{Driver, DriverDirectory, Passenger, PassengerDirectory, RankBy, Ride};
use rd_graph::{LocationGraph, Route, Router};

use crate::fare::ride_distance;
use crate::{
    DispatchError, DispatchObserver, DispatchResult, FareModel, MatchContext, MatchPolicy,
    RequestQueue, RequestStatus, RideRequest,
};

// ── Results ───────────────────────────────────────────────────────────────────

/// The outcome of a successful [`DispatchEngine::dispatch_next`].
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub request:   RequestId,
    pub passenger: PassengerId,
    pub driver:    DriverId,
    pub pickup:    String,
    pub dropoff:   String,
    /// Pickup to drop-off.  Empty when no route exists.
    pub route:     Route,
    pub distance:  f64,
    pub fare:      f64,
    pub tick:      Tick,
}

impl Assignment {
    /// `true` if the driver was assigned without a route between pickup and
    /// drop-off (the ride is recorded with zero distance and fare).
    pub fn is_unreachable(&self) -> bool {
        self.route.is_empty()
    }
}

/// The outcome of [`DispatchEngine::complete`].
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// The finished request, with status `Completed`.
    pub request: RideRequest,
    pub driver:  DriverId,
    pub tick:    Tick,
}

/// Counts returned by [`DispatchEngine::run_pending`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSummary {
    pub assigned:     usize,
    /// Requests dropped because no driver was available.
    pub unassignable: usize,
}

// ── DispatchEngine ────────────────────────────────────────────────────────────

/// Owns the location graph, the fleet, and the request queue, and moves
/// requests through their lifecycle.
///
/// Every event (submit, dispatch attempt, completion) advances the clock by
/// one tick, so no two events share a timestamp.  Dispatching is pull-based:
/// nothing happens to a queued request until [`dispatch_next`] is called.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
///
/// [`dispatch_next`]: Self::dispatch_next
pub struct DispatchEngine<P: MatchPolicy, R: Router> {
    pub config: DispatchConfig,

    /// Hands out event ticks.
    pub clock: DispatchClock,

    pub(crate) graph:        LocationGraph,
    pub(crate) drivers:      DriverDirectory,
    pub(crate) passengers:   PassengerDirectory,
    pub(crate) queue:        RequestQueue,
    /// Assigned, not yet completed requests.
    pub(crate) active:       BTreeMap<RequestId, RideRequest>,
    pub(crate) next_request: RequestId,
    pub(crate) policy:       P,
    pub(crate) router:       R,
    pub(crate) fare:         Box<dyn FareModel>,
}

impl<P: MatchPolicy, R: Router> DispatchEngine<P, R> {
    // ── Setup ─────────────────────────────────────────────────────────────

    pub fn register_driver(&mut self, driver: Driver) -> DispatchResult<()> {
        Ok(self.drivers.register(driver)?)
    }

    pub fn register_passenger(&mut self, passenger: Passenger) -> DispatchResult<()> {
        Ok(self.passengers.register(passenger)?)
    }

    pub fn add_location(&mut self, name: &str, coord: Coord) -> DispatchResult<LocationId> {
        Ok(self.graph.add_location(name, coord)?)
    }

    pub fn add_route(&mut self, a: &str, b: &str, distance: f64) -> DispatchResult<()> {
        Ok(self.graph.add_route(a, b, distance)?)
    }

    /// Update a driver's rating (`0.0..=5.0`).
    pub fn set_driver_rating(&mut self, id: DriverId, rating: f64) -> DispatchResult<()> {
        Ok(self.drivers.lookup_mut(id)?.set_rating(rating)?)
    }

    // ── Request lifecycle ─────────────────────────────────────────────────

    /// Queue a ride request and return its id.
    ///
    /// Neither the passenger nor the location names are validated here.
    /// Fails with [`DispatchError::RequestIdsExhausted`] once the id space
    /// is used up; nothing is queued and the clock does not advance.
    pub fn submit<O: DispatchObserver>(
        &mut self,
        passenger: PassengerId,
        pickup:    impl Into<String>,
        dropoff:   impl Into<String>,
        observer:  &mut O,
    ) -> DispatchResult<RequestId> {
        let id = self.next_request;
        self.next_request = id.next().ok_or(DispatchError::RequestIdsExhausted)?;
        let tick = self.clock.advance();

        let request = RideRequest::new(id, passenger, pickup, dropoff, tick);
        debug!(
            request = %id,
            passenger = %passenger,
            pickup = %request.pickup,
            dropoff = %request.dropoff,
            "ride requested"
        );
        observer.on_submitted(&request);
        self.queue.enqueue(request);
        Ok(id)
    }

    /// Serve the oldest queued request.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::QueueEmpty`] when nothing is queued; no state
    ///   changes, the clock included.
    /// - [`DispatchError::NoAvailableDrivers`] when no driver can take the
    ///   request.  The request is dropped, or put back at the head of the
    ///   queue when `config.requeue_unassignable` is set.
    pub fn dispatch_next<O: DispatchObserver>(&mut self, observer: &mut O) -> DispatchResult<Assignment> {
        let Some(mut request) = self.queue.dequeue() else {
            return Err(DispatchError::QueueEmpty);
        };
        let tick = self.clock.advance();

        let selected = {
            let candidates = self.drivers.find_available();
            let ctx = MatchContext {
                request: &request,
                graph:   &self.graph,
                router:  &self.router,
            };
            self.policy.select(&ctx, &candidates).map(Driver::id)
        };
        let Some(driver_id) = selected else {
            return Err(self.reject(request, tick, observer));
        };

        let route = self.route(&request.pickup, &request.dropoff);
        if route.is_empty() {
            warn!(
                request = %request.id,
                pickup = %request.pickup,
                dropoff = %request.dropoff,
                "no route between pickup and drop-off; assigning with zero distance"
            );
        }
        let distance = ride_distance(&route, self.config.distance_mode, self.config.per_hop_distance);
        let fare = self.fare.fare(distance);

        let driver = self.drivers.lookup_mut(driver_id)?;
        driver.assign();
        driver.record_ride(Ride {
            source:      request.pickup.clone(),
            destination: request.dropoff.clone(),
            distance,
            fare,
            timestamp:   tick,
        });
        request.status = RequestStatus::Assigned;
        request.driver = Some(driver_id);

        info!(request = %request.id, driver = %driver_id, distance, fare, "ride assigned");

        let assignment = Assignment {
            request:   request.id,
            passenger: request.passenger,
            driver:    driver_id,
            pickup:    request.pickup.clone(),
            dropoff:   request.dropoff.clone(),
            route,
            distance,
            fare,
            tick,
        };
        observer.on_assigned(&assignment);
        self.active.insert(request.id, request);
        Ok(assignment)
    }

    /// Finish an assigned ride: the driver becomes available again at the
    /// drop-off location.
    ///
    /// Fails with [`DispatchError::RequestNotFound`] unless `request` is
    /// currently assigned.
    pub fn complete<O: DispatchObserver>(
        &mut self,
        request:  RequestId,
        observer: &mut O,
    ) -> DispatchResult<Completion> {
        let driver_id = self
            .active
            .get(&request)
            .and_then(|r| r.driver)
            .ok_or(DispatchError::RequestNotFound(request))?;
        let driver = self.drivers.lookup_mut(driver_id)?;
        let Some(mut finished) = self.active.remove(&request) else {
            return Err(DispatchError::RequestNotFound(request));
        };
        let tick = self.clock.advance();

        driver.release();
        driver.move_to(finished.dropoff.clone());
        finished.status = RequestStatus::Completed;

        info!(request = %request, driver = %driver_id, location = %finished.dropoff, "ride completed");

        let completion = Completion { request: finished, driver: driver_id, tick };
        observer.on_completed(&completion);
        Ok(completion)
    }

    /// Dispatch until the queue is empty.
    ///
    /// Stops early, leaving the queue intact, if a request is put back by the
    /// re-queue policy; that request is not counted as unassignable.
    pub fn run_pending<O: DispatchObserver>(&mut self, observer: &mut O) -> DispatchResult<DispatchSummary> {
        let mut summary = DispatchSummary::default();
        loop {
            match self.dispatch_next(observer) {
                Ok(_) => summary.assigned += 1,
                Err(DispatchError::QueueEmpty) => break,
                Err(DispatchError::NoAvailableDrivers { requeued: false, .. }) => {
                    summary.unassignable += 1;
                }
                Err(DispatchError::NoAvailableDrivers { requeued: true, .. }) => break,
                Err(e) => return Err(e),
            }
        }
        Ok(summary)
    }

    fn reject<O: DispatchObserver>(
        &mut self,
        mut request: RideRequest,
        tick:        Tick,
        observer:    &mut O,
    ) -> DispatchError {
        let id = request.id;
        let requeued = self.config.requeue_unassignable;
        if requeued {
            warn!(request = %id, "no available driver; request returned to queue head");
            observer.on_unassignable(&request, tick, true);
            self.queue.restore_front(request);
        } else {
            request.status = RequestStatus::Unassignable;
            warn!(request = %id, "no available driver; request dropped");
            observer.on_unassignable(&request, tick, false);
        }
        DispatchError::NoAvailableDrivers { request: id, requeued }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn graph(&self) -> &LocationGraph {
        &self.graph
    }

    pub fn drivers(&self) -> &DriverDirectory {
        &self.drivers
    }

    pub fn driver(&self, id: DriverId) -> DispatchResult<&Driver> {
        Ok(self.drivers.lookup(id)?)
    }

    pub fn passengers(&self) -> &PassengerDirectory {
        &self.passengers
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// A driver's rides, oldest first.
    pub fn history(&self, id: DriverId) -> DispatchResult<&[Ride]> {
        Ok(self.drivers.lookup(id)?.history())
    }

    /// Route between two named locations; [`Route::empty`] when either name
    /// is unknown or no path exists.
    pub fn route(&self, from: &str, to: &str) -> Route {
        self.router.route(&self.graph, from, to).unwrap_or_else(|e| {
            debug!(from, to, error = %e, "route lookup failed");
            Route::empty()
        })
    }

    /// Assigned requests in ascending id order.
    pub fn active_requests(&self) -> impl Iterator<Item = &RideRequest> + '_ {
        self.active.values()
    }

    /// Every driver that can reach `location`, closest first by routed
    /// distance (ties by id).  Availability is ignored.
    ///
    /// Distances are computed once, then ordered through
    /// [`DriverDirectory::rank`].  With the `parallel` feature the routing
    /// runs on Rayon's thread pool; the result is identical either way.
    pub fn drivers_nearest(&self, location: &str) -> Vec<(DriverId, f64)> {
        let graph = &self.graph;
        let router = &self.router;
        let distance = move |d: &Driver| {
            router
                .route(graph, d.location(), location)
                .ok()
                .map(|r| (d.id(), r.total_distance))
        };

        #[cfg(not(feature = "parallel"))]
        let distances: BTreeMap<DriverId, f64> = self.drivers.iter().filter_map(distance).collect();

        #[cfg(feature = "parallel")]
        let distances: BTreeMap<DriverId, f64> = {
            use rayon::prelude::*;

            let drivers: Vec<&Driver> = self.drivers.iter().collect();
            drivers.par_iter().filter_map(|&d| distance(d)).collect::<Vec<_>>().into_iter().collect()
        };

        let key = |d: &Driver| distances.get(&d.id()).copied().unwrap_or(f64::INFINITY);
        self.drivers
            .rank(RankBy::Key(&key))
            .into_iter()
            .filter_map(|d| distances.get(&d.id()).map(|&dist| (d.id(), dist)))
            .collect()
    }
}
