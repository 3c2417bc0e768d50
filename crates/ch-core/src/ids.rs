//! Strongly typed identifier wrappers.
//!
//! The simulation service names every node, customer and zone with an opaque
//! string.  Wrapping them keeps a customer id from being passed where a node
//! id is expected.  All IDs are `Clone + Ord + Hash` so they can be used as
//! map keys and sorted collection elements without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around an owned `String`.
macro_rules! string_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub String);

        impl $name {
            #[inline]
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// `true` for the empty id that missing snapshot fields default to.
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(raw: &str) -> Self {
                Self(raw.to_owned())
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }
    };
}

string_id! {
    /// A map node.  Charging stations are nodes too, so a station is
    /// addressed by its `NodeId`.
    pub struct NodeId;
}

string_id! {
    /// A customer (vehicle) travelling through the map.
    pub struct CustomerId;
}

string_id! {
    /// A zone grouping nearby nodes and stations.
    pub struct ZoneId;
}
