//! campus — smallest example for the ride dispatch engine.
//!
//! Seeds a three-landmark campus with three drivers, submits a handful of
//! ride requests, dispatches them, completes the rides, and writes the
//! dispatch log to `output/campus/`.
//!
//! Usage: `campus [config.json]`.  Without a path the default
//! `DispatchConfig` is used.  Log verbosity follows `RUST_LOG` (default
//! `info`).

mod network;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use rd_core::{Coord, DispatchConfig, PassengerId, RequestId, SimRng};
use rd_dispatch::{DispatchEngine, DispatchError, EngineBuilder, HighestRated, MatchPolicy};
use rd_graph::{DijkstraRouter, Router};
use rd_output::{CsvWriter, DispatchLogObserver};

use network::{build_fleet, build_graph};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/campus";

/// Extra requests drawn from `config.seed` after the scripted ones.
const RANDOM_REQUESTS: usize = 3;

/// (passenger, pickup, drop-off).  One more request than there are drivers.
const REQUESTS: [(u32, &str, &str); 4] = [
    (1, "Main Gate",     "North Gate"),
    (2, "Reptile House", "Main Gate"),
    (1, "North Gate",    "Reptile House"),
    (2, "Main Gate",     "Reptile House"),
];

// ── Setup ─────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_config() -> Result<DispatchConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
        }
        None => Ok(DispatchConfig::default()),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();
    let config = load_config()?;

    println!("=== campus — ride dispatch ===");
    println!(
        "Fare: {:.2}/unit  |  Distance: {:?}  |  Re-queue: {}",
        config.fare_per_unit, config.distance_mode, config.requeue_unassignable
    );
    println!();

    // 1. Network and fleet.
    let graph = build_graph()?;
    let (drivers, passengers) = build_fleet()?;
    println!(
        "Campus: {} locations, {} routes, {} drivers, {} passengers",
        graph.location_count(),
        graph.route_count(),
        drivers.len(),
        passengers.len()
    );

    // 2. Engine.
    let mut engine = EngineBuilder::new(config.clone(), HighestRated, DijkstraRouter)
        .graph(graph)
        .drivers(drivers)
        .passengers(passengers)
        .build()?;

    // 3. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut log = DispatchLogObserver::new(writer, &config);

    print_drivers(&engine);

    // 4. Requests.
    for (passenger, pickup, dropoff) in REQUESTS {
        let id = engine.submit(PassengerId(passenger), pickup, dropoff, &mut log)?;
        println!("Queued {id}: passenger {passenger} {pickup} -> {dropoff}");
    }
    println!("Queue depth: {}", engine.queue_len());
    println!();

    // 5. Dispatch until the fleet runs out or the queue drains.
    loop {
        match engine.dispatch_next(&mut log) {
            Ok(a) => println!(
                "{} -> {}  route {:?}  distance {:.1}  fare {:.2}",
                a.request, a.driver, a.route.stops, a.distance, a.fare
            ),
            Err(DispatchError::QueueEmpty) => break,
            Err(e @ DispatchError::NoAvailableDrivers { requeued, .. }) => {
                println!("{e}");
                if requeued {
                    break;
                }
            }
            Err(e) => return Err(e.into()),
        }
    }

    // 6. Finish every active ride, then serve whatever was put back plus a
    //    few seeded random requests.
    let active: Vec<RequestId> = engine.active_requests().map(|r| r.id).collect();
    for id in active {
        let c = engine.complete(id, &mut log)?;
        println!("Completed {id}: {} now free at {}", c.driver, c.request.dropoff);
    }

    let mut rng = SimRng::new(config.seed);
    let names: Vec<String> = engine.graph().location_names().map(str::to_owned).collect();
    for _ in 0..RANDOM_REQUESTS {
        let (Some(pickup), Some(dropoff)) = (rng.choose(&names), rng.choose(&names)) else {
            break;
        };
        let passenger = PassengerId(rng.gen_range(1..=2));
        let id = engine.submit(passenger, pickup.clone(), dropoff.clone(), &mut log)?;
        println!("Queued {id}: passenger {} {pickup} -> {dropoff}", passenger.0);
    }

    let summary = engine.run_pending(&mut log)?;
    println!(
        "Second pass: {} assigned, {} unassignable",
        summary.assigned, summary.unassignable
    );
    println!();

    print_drivers(&engine);

    // 7. Histories and proximity.
    for driver in engine.drivers().iter() {
        println!("History of {} ({}):", driver.name, driver.id());
        for ride in driver.history() {
            println!(
                "  {} {} -> {}  {:.1}  {:.2}",
                ride.timestamp, ride.source, ride.destination, ride.distance, ride.fare
            );
        }
    }
    println!();

    let here = Coord::new(0.1, 0.7);
    if let Some(name) = engine.graph().nearest_location(here) {
        println!("Nearest landmark to {here}: {name}");
        for (id, distance) in engine.drivers_nearest(name) {
            println!("  {id} at {distance:.1}");
        }
    }

    log.finish();
    if let Some(e) = log.take_error() {
        eprintln!("output error: {e}");
    }

    // 8. Final fleet state.
    let snapshot = std::fs::File::create(Path::new(OUTPUT_DIR).join("drivers.json"))?;
    let fleet: Vec<_> = engine.drivers().iter().collect();
    serde_json::to_writer_pretty(snapshot, &fleet)?;

    println!();
    println!("Dispatch log and drivers.json written to {OUTPUT_DIR}/");

    Ok(())
}

fn print_drivers<P: MatchPolicy, R: Router>(engine: &DispatchEngine<P, R>) {
    println!("{:<6} {:<8} {:<6} {:<14} {:<10}", "Id", "Name", "Rating", "Location", "Status");
    println!("{}", "-".repeat(48));
    for d in engine.drivers().iter() {
        println!(
            "{:<6} {:<8} {:<6.1} {:<14} {:<10}",
            d.id().0,
            d.name,
            d.rating(),
            d.location(),
            d.availability().as_str()
        );
    }
    println!();
}
