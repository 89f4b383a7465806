//! # euler-roe
//!
//! Roe-averaged upwind dissipation for finite-volume solvers of the 2D
//! compressible Euler equations.
//!
//! Given reconstructed left/right states at a batch of cell interfaces, the
//! [`RoeStabilizer`] returns the dissipation vector
//!
//! D = Σ |λ_k| α_k r_k
//!
//! per interface, which turns a central flux 0.5 (F_L + F_R) into the Roe
//! flux 0.5 (F_L + F_R) - 0.5 D.
//!
//! This crate provides:
//! - Conservative and primitive state types
//! - Ideal-gas closure (pressure, enthalpy, sound speed, physical fluxes)
//! - Roe averaging, eigensystem and wave strengths
//! - Batch evaluation with shape checks, optional domain checks and an
//!   optional rayon-parallel path (`parallel` feature)
//!
//! # Sign convention
//!
//! The interface normal points from the left state into the right state.
//! Swapping the two sides negates the dissipation.

pub mod equations;
pub mod flux;
pub mod solver;
pub mod types;

// Re-export main types for convenience
pub use equations::{GAMMA_AIR, IdealGas2D};
pub use flux::{
    RoeAverage, RoeEigensystem, WaveStrengths, roe_dissipation, roe_dissipation_normal,
    roe_flux_x,
};
pub use solver::{
    DomainPolicy, EntropyFix, EulerState2D, InterfaceSide, InterfaceStates, PrimitiveState2D,
    RoeStabilizer, StabilizerConfig, StabilizerError,
};
pub use types::SampleIndex;
