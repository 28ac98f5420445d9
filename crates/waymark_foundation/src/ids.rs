//! 1-based identifiers for rooms, items, verbs, and nouns.
//!
//! Content tables are numbered from 1; id 0 is reserved and never names a
//! real entry. Each id is a distinct newtype so a room number can never be
//! passed where an item number is expected.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! content_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw 1-based number.
            #[must_use]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Returns the raw 1-based number.
            #[must_use]
            pub const fn get(self) -> u32 {
                self.0
            }

            /// Returns the 0-based slot for a table holding entries `1..`.
            ///
            /// Returns `None` for the reserved id 0.
            #[must_use]
            pub const fn slot(self) -> Option<usize> {
                if self.0 == 0 {
                    None
                } else {
                    Some((self.0 - 1) as usize)
                }
            }

            /// Builds the id of the entry stored at a 0-based slot.
            #[must_use]
            pub fn from_slot(slot: usize) -> Self {
                Self(u32::try_from(slot + 1).unwrap_or(u32::MAX))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", $label, self.0)
            }
        }
    };
}

content_id!(
    /// A room number. Rooms sit on a grid [`ROW_WIDTH`](crate::constants::ROW_WIDTH) wide.
    RoomId,
    "room"
);
content_id!(
    /// An item number.
    ItemId,
    "item"
);
content_id!(
    /// A position in the verb table. One past the end means "not found".
    VerbId,
    "verb"
);
content_id!(
    /// A position in the noun table.
    NounId,
    "noun"
);

impl RoomId {
    /// Adds a signed grid offset, returning `None` when the result drops below 1.
    #[must_use]
    pub fn offset(self, delta: i32) -> Option<Self> {
        let target = i64::from(self.0) + i64::from(delta);
        if target < 1 {
            return None;
        }
        u32::try_from(target).ok().map(Self)
    }
}
