//! Strongly-typed indices and component layout constants.
//!
//! [`SampleIndex`] keeps batch positions from being confused with vector
//! component indices. The [`conservative`] and [`primitive`] modules name the
//! component slots of the 4-vectors used throughout the crate.

use std::fmt;

/// Macro to generate index newtypes with common functionality.
macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $display_prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }

            /// First index (0).
            pub const ZERO: Self = Self(0);
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(idx: $name) -> usize {
                idx.0
            }
        }

        // Allow using as slice index
        impl<T> std::ops::Index<$name> for [T] {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }
    };
}

define_index!(
    /// Position of an interface sample within a batch.
    SampleIndex,
    "sample#"
);

/// Number of components in a 2D Euler state vector.
pub const N_VARS: usize = 4;

/// Component slots of a conservative state `[rho, rho*u, rho*v, E]`.
pub mod conservative {
    /// Density ρ.
    pub const DENSITY: usize = 0;
    /// x-momentum ρu.
    pub const MOMENTUM_X: usize = 1;
    /// y-momentum ρv.
    pub const MOMENTUM_Y: usize = 2;
    /// Total energy per unit volume E.
    pub const ENERGY: usize = 3;
}

/// Component slots of a primitive state `[rho, u, v, p]`.
pub mod primitive {
    /// Density ρ.
    pub const DENSITY: usize = 0;
    /// x-velocity u.
    pub const VELOCITY_X: usize = 1;
    /// y-velocity v.
    pub const VELOCITY_Y: usize = 2;
    /// Pressure p.
    pub const PRESSURE: usize = 3;
}
