//! Interface-normal frame for 2D Roe dissipation.
//!
//! The Roe solver in [`super::roe`] works along the x-axis. For a face with
//! unit normal n = (nx, ny), pointing from the left state into the right one:
//! - Normal velocity: u_n = u·n = u*nx + v*ny
//! - Tangential velocity: u_t = -u*ny + v*nx
//!
//! States are rotated into the (n, t) frame, the dissipation is evaluated
//! there and rotated back to (x, y).

use crate::equations::IdealGas2D;
use crate::solver::{EntropyFix, EulerState2D, PrimitiveState2D};

use super::roe::roe_dissipation;

/// Rotate a conservative state to face-aligned coordinates.
///
/// Transforms (ρu, ρv) to (ρu_n, ρu_t); ρ and E are frame-invariant.
#[inline]
pub fn rotate_to_normal(state: &EulerState2D, normal: (f64, f64)) -> EulerState2D {
    let (nx, ny) = normal;
    EulerState2D {
        rho: state.rho,
        rho_u: state.rho_u * nx + state.rho_v * ny,
        rho_v: -state.rho_u * ny + state.rho_v * nx,
        energy: state.energy,
    }
}

/// Rotate a primitive state to face-aligned coordinates.
#[inline]
pub fn rotate_primitive_to_normal(state: &PrimitiveState2D, normal: (f64, f64)) -> PrimitiveState2D {
    let (nx, ny) = normal;
    PrimitiveState2D {
        rho: state.rho,
        u: state.u * nx + state.v * ny,
        v: -state.u * ny + state.v * nx,
        p: state.p,
    }
}

/// Rotate a conservative-space vector from face-aligned back to physical coordinates.
///
/// - F_x = F_n * nx - F_t * ny
/// - F_y = F_n * ny + F_t * nx
#[inline]
pub fn rotate_from_normal(flux: &EulerState2D, normal: (f64, f64)) -> EulerState2D {
    let (nx, ny) = normal;
    EulerState2D {
        rho: flux.rho,
        rho_u: flux.rho_u * nx - flux.rho_v * ny,
        rho_v: flux.rho_u * ny + flux.rho_v * nx,
        energy: flux.energy,
    }
}

/// Roe dissipation across a face with unit normal (nx, ny).
///
/// Satisfies D(R, L; -n) = -D(L, R; n).
pub fn roe_dissipation_normal(
    q_l: &EulerState2D,
    w_l: &PrimitiveState2D,
    q_r: &EulerState2D,
    w_r: &PrimitiveState2D,
    normal: (f64, f64),
    gas: &IdealGas2D,
    entropy_fix: EntropyFix,
) -> EulerState2D {
    let q_l_rot = rotate_to_normal(q_l, normal);
    let q_r_rot = rotate_to_normal(q_r, normal);
    let w_l_rot = rotate_primitive_to_normal(w_l, normal);
    let w_r_rot = rotate_primitive_to_normal(w_r, normal);

    let d_rot = roe_dissipation(&q_l_rot, &w_l_rot, &q_r_rot, &w_r_rot, gas, entropy_fix);

    rotate_from_normal(&d_rot, normal)
}
