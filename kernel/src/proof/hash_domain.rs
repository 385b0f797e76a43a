//! Typed domain separators for canonical hashing.
//!
//! Every hash computation selects a domain via [`HashDomain`]. Adding a domain
//! is a single change to the macro invocation below; the enum, `as_bytes()`,
//! `ALL`, and `Display` are generated together.

macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Each variant maps to a unique, null-terminated byte prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domains in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    /// `Grid` identity bytes (dimensions + obstacle flags).
    GridIdentity => b"WAYPOINT::GRID_IDENTITY::V1\0",

    /// Reconstructed path cell sequence.
    GridPath => b"WAYPOINT::GRID_PATH::V1\0",

    /// Canonical JSON of a `SearchGraph`.
    SearchGraph => b"WAYPOINT::SEARCH_GRAPH::V1\0",

    /// Canonical JSON of a harness scenario.
    Scenario => b"WAYPOINT::SCENARIO::V1\0",

    /// Canonical JSON of a run report's digest basis.
    RunReport => b"WAYPOINT::RUN_REPORT::V1\0",
}
