//! Numerical dissipation for the 2D Euler equations.
//!
//! - [`roe`]: Roe averaging, eigensystem, wave strengths and the upwind
//!   dissipation D = Σ |λ_k| α_k r_k at a single interface
//! - [`rotation`]: evaluation across faces with arbitrary unit normals

pub mod roe;
pub mod rotation;

pub use roe::{RoeAverage, RoeEigensystem, WaveStrengths, roe_dissipation, roe_flux_x};
pub use rotation::{
    roe_dissipation_normal, rotate_from_normal, rotate_primitive_to_normal, rotate_to_normal,
};
