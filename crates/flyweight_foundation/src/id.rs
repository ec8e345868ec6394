//! Sequential identifiers for interned bundles and entities.
//!
//! Both id spaces start at 1 and only grow. They are separate types so a
//! bundle id can never be passed where an entity id is expected.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! sequential_id {
    ($(#[$meta:meta])* $name:ident, $display:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(u64);

        impl $name {
            /// The first id handed out by a fresh allocator.
            pub const FIRST: Self = Self(1);

            /// Creates an id from its raw value.
            #[must_use]
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Returns the raw value of this id.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }

            /// Returns the id allocated after this one, or `None` on overflow.
            #[must_use]
            pub const fn next(self) -> Option<Self> {
                match self.0.checked_add(1) {
                    Some(raw) => Some(Self(raw)),
                    None => None,
                }
            }

            /// Zero-based slot of this id in a dense table.
            ///
            /// Returns `None` for the raw value 0, which is never allocated, and
            /// for ids whose slot does not fit in `usize`.
            #[must_use]
            pub fn slot(self) -> Option<usize> {
                self.0
                    .checked_sub(1)
                    .and_then(|slot| usize::try_from(slot).ok())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $display, self.0)
            }
        }
    };
}

sequential_id!(
    /// Identifier of a canonical bundle inside an intern pool.
    BundleId,
    "Bundle"
);

sequential_id!(
    /// Identifier of a record inside an entity store.
    EntityId,
    "Entity"
);
