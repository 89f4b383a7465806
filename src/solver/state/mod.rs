//! Physical state types for the 2D Euler equations.
//!
//! - [`EulerState2D`]: conservative variables (ρ, ρu, ρv, E)
//! - [`PrimitiveState2D`]: primitive variables (ρ, u, v, p)

mod euler_2d;

pub use euler_2d::{EulerState2D, PrimitiveState2D};
