//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as `BTreeMap` keys and
//! sorted collection elements without ceremony.  Ordering is numeric, which
//! is what the directory's "lowest id wins" tie-break relies on.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Externally assigned driver identifier.  Unique within a directory.
    pub struct DriverId(u32);
}

typed_id! {
    /// Externally assigned passenger identifier.
    pub struct PassengerId(u32);
}

typed_id! {
    /// Engine-assigned ride request identifier, increasing from 1.
    pub struct RequestId(u32);
}

typed_id! {
    /// Dense index of a location inside a `LocationGraph`.
    pub struct LocationId(u32);
}

impl RequestId {
    /// The id following `self`; `None` once `u32::MAX` is reached.
    #[inline]
    pub fn next(self) -> Option<RequestId> {
        self.0.checked_add(1).map(RequestId)
    }
}
