//! `DriverDirectory` — drivers kept in ascending id order.
//!
//! # Ordering
//!
//! The backing `BTreeMap<DriverId, Driver>` keeps the directory sorted after
//! every insertion, giving O(log n) `register` and `lookup` without any
//! re-sorting.  Every listing (`iter`, `find_available`, `rank`) walks the
//! map in ascending id order, which is the canonical order all tie-breaks
//! fall back to.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::debug;

use rd_core::DriverId;

use crate::driver::check_rating;
use crate::{Driver, FleetError, FleetResult};

/// Sort criterion for [`DriverDirectory::rank`].
pub enum RankBy<'a> {
    /// Highest rating first.
    Rating,
    /// Smallest key first, with the key supplied by the caller (e.g. routed
    /// distance to a pickup).
    Key(&'a dyn Fn(&Driver) -> f64),
}

/// The set of registered drivers.
#[derive(Debug, Default)]
pub struct DriverDirectory {
    drivers: BTreeMap<DriverId, Driver>,
}

impl DriverDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Membership ────────────────────────────────────────────────────────

    /// Add a new driver.
    ///
    /// Fails with [`FleetError::DuplicateDriver`] if the id is taken and with
    /// [`FleetError::InvalidRating`] for ratings outside `0.0..=5.0`.
    pub fn register(&mut self, driver: Driver) -> FleetResult<()> {
        check_rating(driver.rating())?;
        if self.drivers.contains_key(&driver.id()) {
            return Err(FleetError::DuplicateDriver(driver.id()));
        }
        debug!(driver = %driver.id(), name = %driver.name, rating = driver.rating(), "driver registered");
        self.drivers.insert(driver.id(), driver);
        Ok(())
    }

    pub fn lookup(&self, id: DriverId) -> FleetResult<&Driver> {
        self.drivers.get(&id).ok_or(FleetError::DriverNotFound(id))
    }

    pub fn lookup_mut(&mut self, id: DriverId) -> FleetResult<&mut Driver> {
        self.drivers.get_mut(&id).ok_or(FleetError::DriverNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// All drivers in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Driver> + '_ {
        self.drivers.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = DriverId> + '_ {
        self.drivers.keys().copied()
    }

    // ── Selection ─────────────────────────────────────────────────────────

    /// Every available driver, in directory (ascending id) order.
    pub fn find_available(&self) -> Vec<&Driver> {
        self.drivers.values().filter(|d| d.is_available()).collect()
    }

    /// The candidate with the strictly highest rating; among equal ratings
    /// the lowest id wins regardless of slice order.  `None` for an empty
    /// slice.
    pub fn select_best<'a>(candidates: &[&'a Driver]) -> Option<&'a Driver> {
        candidates.iter().copied().reduce(|best, d| {
            match d.rating().total_cmp(&best.rating()) {
                Ordering::Greater                       => d,
                Ordering::Equal if d.id() < best.id()   => d,
                _                                       => best,
            }
        })
    }

    /// All drivers sorted by `by`.  The sort is stable, so ties keep
    /// ascending id order.
    pub fn rank(&self, by: RankBy<'_>) -> Vec<&Driver> {
        match by {
            RankBy::Rating => {
                let mut out: Vec<&Driver> = self.drivers.values().collect();
                out.sort_by(|a, b| b.rating().total_cmp(&a.rating()));
                out
            }
            RankBy::Key(key) => {
                let mut keyed: Vec<(f64, &Driver)> =
                    self.drivers.values().map(|d| (key(d), d)).collect();
                keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
                keyed.into_iter().map(|(_, d)| d).collect()
            }
        }
    }
}
