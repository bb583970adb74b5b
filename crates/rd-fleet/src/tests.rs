//! Unit tests for rd-fleet.

use rd_core::DriverId;

use crate::{Driver, DriverDirectory};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn driver(id: u32, rating: f64) -> Driver {
    Driver::new(DriverId(id), format!("driver-{id}"), rating, "Main Gate")
}

/// Three drivers registered out of id order.
fn directory() -> DriverDirectory {
    let mut dir = DriverDirectory::new();
    dir.register(driver(103, 4.2)).unwrap();
    dir.register(driver(101, 4.5)).unwrap();
    dir.register(driver(102, 4.9)).unwrap();
    dir
}

// ── Registration & lookup ─────────────────────────────────────────────────────

#[cfg(test)]
mod registration {
    use super::*;
    use crate::FleetError;

    #[test]
    fn register_then_lookup() {
        let mut dir = DriverDirectory::new();
        dir.register(driver(7, 4.0)).unwrap();
        let d = dir.lookup(DriverId(7)).unwrap();
        assert_eq!(d.id(), DriverId(7));
        assert_eq!(d.name, "driver-7");
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut dir = DriverDirectory::new();
        dir.register(driver(7, 4.0)).unwrap();
        let err = dir.register(driver(7, 3.0)).unwrap_err();
        assert!(matches!(err, FleetError::DuplicateDriver(DriverId(7))));
        // The first registration is untouched.
        assert_eq!(dir.lookup(DriverId(7)).unwrap().rating(), 4.0);
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn unknown_id_not_found() {
        let dir = directory();
        assert!(matches!(dir.lookup(DriverId(999)), Err(FleetError::DriverNotFound(_))));
    }

    #[test]
    fn out_of_range_rating_rejected() {
        let mut dir = DriverDirectory::new();
        assert!(matches!(dir.register(driver(1, 5.5)), Err(FleetError::InvalidRating(_))));
        assert!(matches!(dir.register(driver(1, f64::NAN)), Err(FleetError::InvalidRating(_))));
        assert!(dir.is_empty());
    }

    #[test]
    fn iteration_is_sorted_by_id() {
        let dir = directory();
        let ids: Vec<u32> = dir.ids().map(|id| id.0).collect();
        assert_eq!(ids, [101, 102, 103]);
    }
}

// ── Driver state ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod driver_state {
    use rd_core::{Availability, Tick};

    use super::*;
    use crate::Ride;

    #[test]
    fn new_driver_is_available_with_empty_history() {
        let d = driver(1, 4.0);
        assert!(d.is_available());
        assert!(d.history().is_empty());
    }

    #[test]
    fn assign_and_release() {
        let mut d = driver(1, 4.0);
        d.assign();
        assert_eq!(d.availability(), Availability::Assigned);
        d.release();
        assert!(d.is_available());
    }

    #[test]
    fn history_appends_in_order() {
        let mut d = driver(1, 4.0);
        for (i, dest) in ["North Gate", "Reptile House"].into_iter().enumerate() {
            d.record_ride(Ride {
                source:      "Main Gate".into(),
                destination: dest.into(),
                distance:    1.0,
                fare:        10.0,
                timestamp:   Tick(i as u64),
            });
        }
        let dests: Vec<&str> = d.history().iter().map(|r| r.destination.as_str()).collect();
        assert_eq!(dests, ["North Gate", "Reptile House"]);
    }

    #[test]
    fn set_rating_validates() {
        let mut d = driver(1, 4.0);
        d.set_rating(4.8).unwrap();
        assert_eq!(d.rating(), 4.8);
        assert!(d.set_rating(-0.1).is_err());
        assert_eq!(d.rating(), 4.8);
        d.set_rating(-0.0).unwrap();
        assert!(d.rating().is_sign_positive());
    }

    #[test]
    fn lookup_mut_changes_are_visible() {
        let mut dir = directory();
        dir.lookup_mut(DriverId(101)).unwrap().move_to("North Gate");
        assert_eq!(dir.lookup(DriverId(101)).unwrap().location(), "North Gate");
    }
}

// ── Selection & ranking ───────────────────────────────────────────────────────

#[cfg(test)]
mod selection {
    use super::*;
    use crate::RankBy;

    #[test]
    fn find_available_in_id_order() {
        let mut dir = directory();
        dir.lookup_mut(DriverId(102)).unwrap().assign();
        let ids: Vec<u32> = dir.find_available().iter().map(|d| d.id().0).collect();
        assert_eq!(ids, [101, 103]);
    }

    #[test]
    fn select_best_highest_rating() {
        let dir = directory();
        let best = DriverDirectory::select_best(&dir.find_available()).unwrap();
        assert_eq!(best.id(), DriverId(102));
        assert_eq!(best.rating(), 4.9);
    }

    #[test]
    fn select_best_tie_goes_to_lowest_id() {
        let a = driver(205, 4.9);
        let b = driver(204, 4.9);
        // Input order must not matter.
        assert_eq!(DriverDirectory::select_best(&[&a, &b]).unwrap().id(), DriverId(204));
        assert_eq!(DriverDirectory::select_best(&[&b, &a]).unwrap().id(), DriverId(204));
    }

    #[test]
    fn negative_zero_rating_ties_with_zero() {
        let mut dir = DriverDirectory::new();
        dir.register(driver(2, 0.0)).unwrap();
        dir.register(driver(1, -0.0)).unwrap();
        assert!(dir.lookup(DriverId(1)).unwrap().rating().is_sign_positive());

        let best = DriverDirectory::select_best(&dir.find_available()).unwrap();
        assert_eq!(best.id(), DriverId(1));
        let ids: Vec<u32> = dir.rank(RankBy::Rating).iter().map(|d| d.id().0).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn select_best_empty_is_none() {
        assert!(DriverDirectory::select_best(&[]).is_none());
    }

    #[test]
    fn rank_by_rating_descending_stable() {
        let mut dir = directory();
        dir.register(driver(100, 4.5)).unwrap();
        let ids: Vec<u32> = dir.rank(RankBy::Rating).iter().map(|d| d.id().0).collect();
        // 100 and 101 tie at 4.5 and keep ascending id order.
        assert_eq!(ids, [102, 100, 101, 103]);
    }

    #[test]
    fn rank_by_external_key() {
        let dir = directory();
        let key = |d: &Driver| match d.id().0 {
            101 => 3.0,
            102 => 1.0,
            _   => 1.0,
        };
        let ids: Vec<u32> = dir.rank(RankBy::Key(&key)).iter().map(|d| d.id().0).collect();
        assert_eq!(ids, [102, 103, 101]);
    }
}

// ── Passengers ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod passengers {
    use rd_core::PassengerId;

    use crate::{FleetError, Passenger, PassengerDirectory};

    #[test]
    fn register_and_lookup() {
        let mut p = PassengerDirectory::new();
        p.register(Passenger::new(PassengerId(1), "John", 4.7)).unwrap();
        assert_eq!(p.lookup(PassengerId(1)).unwrap().name, "John");
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn duplicate_and_missing() {
        let mut p = PassengerDirectory::new();
        p.register(Passenger::new(PassengerId(1), "John", 4.7)).unwrap();
        assert!(matches!(
            p.register(Passenger::new(PassengerId(1), "Sarah", 4.0)),
            Err(FleetError::DuplicatePassenger(_))
        ));
        assert!(matches!(p.lookup(PassengerId(2)), Err(FleetError::PassengerNotFound(_))));
    }
}

// ── CSV loading ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::{load_drivers_reader, load_passengers_reader, FleetError, PassengerDirectory};

    const DRIVERS: &str = "\
id,name,rating,location\n\
101,Ravi,4.5,Main Gate\n\
102,Anita,4.9,North Gate\n\
103,Karan,4.2,Reptile House\n\
";

    #[test]
    fn loads_drivers() {
        let mut dir = DriverDirectory::new();
        assert_eq!(load_drivers_reader(Cursor::new(DRIVERS), &mut dir).unwrap(), 3);
        let anita = dir.lookup(DriverId(102)).unwrap();
        assert_eq!(anita.name, "Anita");
        assert_eq!(anita.location(), "North Gate");
    }

    #[test]
    fn duplicate_row_reported() {
        let mut dir = DriverDirectory::new();
        let csv = "id,name,rating,location\n1,A,4.0,X\n1,B,4.0,Y\n";
        assert!(matches!(
            load_drivers_reader(Cursor::new(csv), &mut dir),
            Err(FleetError::DuplicateDriver(_))
        ));
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let mut dir = DriverDirectory::new();
        let csv = "id,name,rating,location\nabc,A,4.0,X\n";
        assert!(matches!(
            load_drivers_reader(Cursor::new(csv), &mut dir),
            Err(FleetError::Parse(_))
        ));
    }

    #[test]
    fn negative_zero_rating_row_loads_as_zero() {
        let mut dir = DriverDirectory::new();
        let csv = "id,name,rating,location\n2,B,0,X\n1,A,-0,X\n";
        load_drivers_reader(Cursor::new(csv), &mut dir).unwrap();
        let best = DriverDirectory::select_best(&dir.find_available()).unwrap();
        assert_eq!(best.id(), DriverId(1));
    }

    #[test]
    fn loads_passengers() {
        let mut p = PassengerDirectory::new();
        let csv = "id,name,rating\n1,John,4.7\n2,Sarah,4.8\n";
        assert_eq!(load_passengers_reader(Cursor::new(csv), &mut p).unwrap(), 2);
    }
}
