//! Driver availability state shared by the fleet and dispatch crates.

/// Whether a driver can take a new ride.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Availability {
    /// Free for assignment (default state).
    #[default]
    Available,
    /// Holding an active, unfinished request.
    Assigned,
}

impl Availability {
    #[inline]
    pub fn is_available(self) -> bool {
        matches!(self, Availability::Available)
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Assigned  => "assigned",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
