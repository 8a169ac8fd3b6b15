//! Feed record identifiers.
//!
//! Every record in a feed is keyed by an opaque string. Each kind of record
//! gets its own newtype so a trip id can't be passed where a stop id is
//! expected.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from anything string-like.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a stop record.
    StopId
);
string_id!(
    /// Identifier of a trip record.
    TripId
);
string_id!(
    /// Identifier of a route record.
    RouteId
);
string_id!(
    /// Identifier of an agency record.
    AgencyId
);
string_id!(
    /// Identifier of a weekly service calendar.
    ServiceId
);
