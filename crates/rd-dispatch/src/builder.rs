//! Fluent builder for constructing a [`DispatchEngine`].

use std::collections::BTreeMap;

use tracing::warn;

use rd_core::{DispatchConfig, RequestId};
use rd_fleet::{DriverDirectory, PassengerDirectory};
use rd_graph::{LocationGraph, Router};

use crate::{DispatchEngine, DispatchResult, FareModel, LinearFare, MatchPolicy, RequestQueue};

/// Fluent builder for [`DispatchEngine<P, R>`].
///
/// # Required inputs
///
/// - [`DispatchConfig`]: fare rate, distance mode, clock origin, …
/// - `P: MatchPolicy`: driver selection (e.g. [`HighestRated`][crate::HighestRated])
/// - `R: Router`: the routing algorithm (e.g. [`rd_graph::DijkstraRouter`])
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                  |
/// |---------------------|------------------------------------------|
/// | `.graph(g)`         | Empty `LocationGraph`                    |
/// | `.drivers(d)`       | Empty `DriverDirectory`                  |
/// | `.passengers(p)`    | Empty `PassengerDirectory`               |
/// | `.fare_model(f)`    | `LinearFare` at `config.fare_per_unit`   |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(DispatchConfig::default(), HighestRated, DijkstraRouter)
///     .graph(graph)
///     .drivers(drivers)
///     .build()?;
/// let id = engine.submit(PassengerId(1), "Main Gate", "North Gate", &mut NoopObserver)?;
/// let assignment = engine.dispatch_next(&mut NoopObserver)?;
/// ```
pub struct EngineBuilder<P: MatchPolicy, R: Router> {
    config:     DispatchConfig,
    policy:     P,
    router:     R,
    graph:      Option<LocationGraph>,
    drivers:    Option<DriverDirectory>,
    passengers: Option<PassengerDirectory>,
    fare:       Option<Box<dyn FareModel>>,
}

impl<P: MatchPolicy, R: Router> EngineBuilder<P, R> {
    /// Create a builder with all required inputs.
    pub fn new(config: DispatchConfig, policy: P, router: R) -> Self {
        Self {
            config,
            policy,
            router,
            graph:      None,
            drivers:    None,
            passengers: None,
            fare:       None,
        }
    }

    pub fn graph(mut self, graph: LocationGraph) -> Self {
        self.graph = Some(graph);
        self
    }

    pub fn drivers(mut self, drivers: DriverDirectory) -> Self {
        self.drivers = Some(drivers);
        self
    }

    pub fn passengers(mut self, passengers: PassengerDirectory) -> Self {
        self.passengers = Some(passengers);
        self
    }

    /// Replace the default linear fare.
    pub fn fare_model(mut self, fare: impl FareModel + 'static) -> Self {
        self.fare = Some(Box::new(fare));
        self
    }

    /// Validate the configuration and return a ready [`DispatchEngine`].
    ///
    /// Drivers placed at locations the graph does not know are accepted with
    /// a warning: they can still be assigned, but routed distances from them
    /// are unavailable.
    pub fn build(self) -> DispatchResult<DispatchEngine<P, R>> {
        self.config.validate()?;

        let graph = self.graph.unwrap_or_default();
        let drivers = self.drivers.unwrap_or_default();

        if !graph.is_empty() {
            for driver in drivers.iter().filter(|d| !graph.contains(d.location())) {
                warn!(driver = %driver.id(), location = driver.location(), "driver location not in graph");
            }
        }

        let fare: Box<dyn FareModel> = match self.fare {
            Some(fare) => fare,
            None       => Box::new(LinearFare::new(self.config.fare_per_unit)),
        };

        Ok(DispatchEngine {
            clock:        self.config.make_clock(),
            config:       self.config,
            graph,
            drivers,
            passengers:   self.passengers.unwrap_or_default(),
            queue:        RequestQueue::new(),
            active:       BTreeMap::new(),
            next_request: RequestId(1),
            policy:       self.policy,
            router:       self.router,
            fare,
        })
    }
}
