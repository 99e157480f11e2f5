//! Typed domain separators for canonical hashing.
//!
//! Every hash computation selects a domain via [`HashDomain`]. Adding a domain
//! is a single change here; the enum, `as_bytes()`, `ALL` and `Display` are
//! generated from the same macro invocation.

macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Each variant maps to a unique, null-terminated prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// Raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All variants in declaration order.
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
    /// Canonical world snapshot (`WorldState::fingerprint`).
    WorldState => b"BLOCKSWORLD::WORLD_STATE::V1\0",

    /// Goal formula in display notation.
    GoalFormula => b"BLOCKSWORLD::GOAL_FORMULA::V1\0",

    /// Plan step sequence (`Plan::digest`).
    Plan => b"BLOCKSWORLD::PLAN::V1\0",
}
