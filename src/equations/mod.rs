//! Gas dynamics closures.
//!
//! Provides the ideal-gas closure for the 2D compressible Euler equations:
//!
//! ∂q/∂t + ∂F(q)/∂x + ∂G(q)/∂y = 0
//!
//! with q = (ρ, ρu, ρv, E).

mod euler_2d;

pub use euler_2d::{GAMMA_AIR, IdealGas2D};
