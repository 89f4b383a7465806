//! 2D compressible Euler equations for a calorically perfect gas.
//!
//! ∂ρ/∂t + ∂(ρu)/∂x + ∂(ρv)/∂y = 0                                  (mass)
//! ∂(ρu)/∂t + ∂(ρu² + p)/∂x + ∂(ρuv)/∂y = 0                         (x-momentum)
//! ∂(ρv)/∂t + ∂(ρuv)/∂x + ∂(ρv² + p)/∂y = 0                         (y-momentum)
//! ∂E/∂t + ∂(u(E + p))/∂x + ∂(v(E + p))/∂y = 0                      (energy)
//!
//! closed by the ideal gas law p = (γ - 1)(E - ρ(u² + v²)/2).
//!
//! # Flux formulation
//!
//! F(q) = [ρu, ρu² + p, ρuv, u(E + p)]ᵀ  (x-direction flux)
//! G(q) = [ρv, ρuv, ρv² + p, v(E + p)]ᵀ  (y-direction flux)

use crate::solver::{EulerState2D, PrimitiveState2D};

/// Ratio of specific heats for a diatomic ideal gas (air).
pub const GAMMA_AIR: f64 = 1.4;

/// Ideal-gas closure for the 2D Euler equations.
///
/// # Example
///
/// ```
/// use euler_roe::equations::IdealGas2D;
/// use euler_roe::solver::PrimitiveState2D;
///
/// let gas = IdealGas2D::air();
/// let w = PrimitiveState2D::new(1.0, 0.0, 0.0, 1.0);
/// let q = gas.conservative(&w);
/// assert!((q.energy - 2.5).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdealGas2D {
    /// Ratio of specific heats γ
    pub gamma: f64,
}

impl IdealGas2D {
    /// Create a gas with the given ratio of specific heats.
    pub fn new(gamma: f64) -> Self {
        Self { gamma }
    }

    /// Diatomic ideal gas, γ = 1.4.
    pub fn air() -> Self {
        Self::new(GAMMA_AIR)
    }

    /// γ - 1.
    #[inline]
    pub fn gamma_minus_one(&self) -> f64 {
        self.gamma - 1.0
    }

    /// Pressure from a conservative state.
    #[inline]
    pub fn pressure(&self, q: &EulerState2D) -> f64 {
        let kinetic = 0.5 * (q.rho_u * q.rho_u + q.rho_v * q.rho_v) / q.rho;
        self.gamma_minus_one() * (q.energy - kinetic)
    }

    /// Total energy per unit volume E = p/(γ-1) + ρ(u² + v²)/2.
    #[inline]
    pub fn total_energy(&self, w: &PrimitiveState2D) -> f64 {
        w.p / self.gamma_minus_one() + 0.5 * w.rho * w.speed_squared()
    }

    /// Conservative state from primitive variables.
    pub fn conservative(&self, w: &PrimitiveState2D) -> EulerState2D {
        EulerState2D::new(w.rho, w.rho * w.u, w.rho * w.v, self.total_energy(w))
    }

    /// Primitive state from conservative variables.
    pub fn primitive(&self, q: &EulerState2D) -> PrimitiveState2D {
        let inv_rho = 1.0 / q.rho;
        PrimitiveState2D::new(q.rho, q.rho_u * inv_rho, q.rho_v * inv_rho, self.pressure(q))
    }

    /// Total specific enthalpy H = (E + p)/ρ.
    #[inline]
    pub fn enthalpy(&self, q: &EulerState2D, w: &PrimitiveState2D) -> f64 {
        (q.energy + w.p) / q.rho
    }

    /// Speed of sound c = sqrt(γp/ρ).
    #[inline]
    pub fn sound_speed(&self, w: &PrimitiveState2D) -> f64 {
        (self.gamma * w.p / w.rho).sqrt()
    }

    /// Speed of sound from enthalpy and velocity: c² = (γ-1)(H - (u² + v²)/2).
    #[inline]
    pub fn sound_speed_from_enthalpy(&self, h: f64, u: f64, v: f64) -> f64 {
        (self.gamma_minus_one() * (h - 0.5 * (u * u + v * v))).sqrt()
    }

    /// Compute the x-direction flux F(q).
    ///
    /// F(q) = [ρu, ρu² + p, ρuv, u(E + p)]ᵀ
    pub fn flux_x(&self, q: &EulerState2D, w: &PrimitiveState2D) -> EulerState2D {
        EulerState2D {
            rho: q.rho_u,
            rho_u: q.rho_u * w.u + w.p,
            rho_v: q.rho_u * w.v,
            energy: w.u * (q.energy + w.p),
        }
    }

    /// Compute the y-direction flux G(q).
    ///
    /// G(q) = [ρv, ρuv, ρv² + p, v(E + p)]ᵀ
    pub fn flux_y(&self, q: &EulerState2D, w: &PrimitiveState2D) -> EulerState2D {
        EulerState2D {
            rho: q.rho_v,
            rho_u: q.rho_v * w.u,
            rho_v: q.rho_v * w.v + w.p,
            energy: w.v * (q.energy + w.p),
        }
    }

    /// Compute the normal flux F·n where n = (nx, ny).
    pub fn normal_flux(
        &self,
        q: &EulerState2D,
        w: &PrimitiveState2D,
        normal: (f64, f64),
    ) -> EulerState2D {
        let (nx, ny) = normal;
        nx * self.flux_x(q, w) + ny * self.flux_y(q, w)
    }
}

impl Default for IdealGas2D {
    fn default() -> Self {
        Self::air()
    }
}
