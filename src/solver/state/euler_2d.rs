//! State vector types for the 2D Euler equations.
//!
//! Two representations of the same gas state are carried side by side:
//! - [`EulerState2D`]: conservative variables (ρ, ρu, ρv, E)
//! - [`PrimitiveState2D`]: primitive variables (ρ, u, v, p)
//!
//! Conversion between them needs the gas closure, see
//! [`IdealGas2D`](crate::equations::IdealGas2D).

use std::ops::{Add, Mul, Neg, Sub};

use crate::types::{conservative, primitive};

/// 2D Euler conservative state: (ρ, ρu, ρv, E).
///
/// Also used for quantities living in conservative-variable space, such as
/// jumps, eigenvectors and the dissipation flux.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EulerState2D {
    /// Density ρ
    pub rho: f64,
    /// x-momentum ρu
    pub rho_u: f64,
    /// y-momentum ρv
    pub rho_v: f64,
    /// Total energy per unit volume E
    pub energy: f64,
}

impl EulerState2D {
    /// Create a new conservative state.
    #[inline(always)]
    pub fn new(rho: f64, rho_u: f64, rho_v: f64, energy: f64) -> Self {
        Self {
            rho,
            rho_u,
            rho_v,
            energy,
        }
    }

    /// Create a zero state.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Convert to array representation `[ρ, ρu, ρv, E]`.
    #[inline(always)]
    pub fn to_array(&self) -> [f64; 4] {
        let mut arr = [0.0; 4];
        arr[conservative::DENSITY] = self.rho;
        arr[conservative::MOMENTUM_X] = self.rho_u;
        arr[conservative::MOMENTUM_Y] = self.rho_v;
        arr[conservative::ENERGY] = self.energy;
        arr
    }

    /// Create from array representation `[ρ, ρu, ρv, E]`.
    #[inline(always)]
    pub fn from_array(arr: [f64; 4]) -> Self {
        Self {
            rho: arr[conservative::DENSITY],
            rho_u: arr[conservative::MOMENTUM_X],
            rho_v: arr[conservative::MOMENTUM_Y],
            energy: arr[conservative::ENERGY],
        }
    }

    /// True if every component is finite.
    pub fn is_finite(&self) -> bool {
        self.rho.is_finite()
            && self.rho_u.is_finite()
            && self.rho_v.is_finite()
            && self.energy.is_finite()
    }

    /// Largest absolute component.
    pub fn max_abs(&self) -> f64 {
        self.rho
            .abs()
            .max(self.rho_u.abs())
            .max(self.rho_v.abs())
            .max(self.energy.abs())
    }
}

impl Add for EulerState2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            rho: self.rho + other.rho,
            rho_u: self.rho_u + other.rho_u,
            rho_v: self.rho_v + other.rho_v,
            energy: self.energy + other.energy,
        }
    }
}

impl Sub for EulerState2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            rho: self.rho - other.rho,
            rho_u: self.rho_u - other.rho_u,
            rho_v: self.rho_v - other.rho_v,
            energy: self.energy - other.energy,
        }
    }
}

impl Neg for EulerState2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            rho: -self.rho,
            rho_u: -self.rho_u,
            rho_v: -self.rho_v,
            energy: -self.energy,
        }
    }
}

impl Mul<f64> for EulerState2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            rho: self.rho * scalar,
            rho_u: self.rho_u * scalar,
            rho_v: self.rho_v * scalar,
            energy: self.energy * scalar,
        }
    }
}

impl Mul<EulerState2D> for f64 {
    type Output = EulerState2D;

    fn mul(self, state: EulerState2D) -> EulerState2D {
        state * self
    }
}

/// 2D Euler primitive state: (ρ, u, v, p).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PrimitiveState2D {
    /// Density ρ (must be positive)
    pub rho: f64,
    /// x-velocity u
    pub u: f64,
    /// y-velocity v
    pub v: f64,
    /// Pressure p (must be positive)
    pub p: f64,
}

impl PrimitiveState2D {
    /// Create a new primitive state.
    #[inline(always)]
    pub fn new(rho: f64, u: f64, v: f64, p: f64) -> Self {
        Self { rho, u, v, p }
    }

    /// Convert to array representation `[ρ, u, v, p]`.
    #[inline(always)]
    pub fn to_array(&self) -> [f64; 4] {
        let mut arr = [0.0; 4];
        arr[primitive::DENSITY] = self.rho;
        arr[primitive::VELOCITY_X] = self.u;
        arr[primitive::VELOCITY_Y] = self.v;
        arr[primitive::PRESSURE] = self.p;
        arr
    }

    /// Create from array representation `[ρ, u, v, p]`.
    #[inline(always)]
    pub fn from_array(arr: [f64; 4]) -> Self {
        Self {
            rho: arr[primitive::DENSITY],
            u: arr[primitive::VELOCITY_X],
            v: arr[primitive::VELOCITY_Y],
            p: arr[primitive::PRESSURE],
        }
    }

    /// Squared velocity magnitude u² + v².
    #[inline]
    pub fn speed_squared(&self) -> f64 {
        self.u * self.u + self.v * self.v
    }

    /// Check the physical gas invariant: finite, ρ > 0 and p > 0.
    pub fn is_physical(&self) -> bool {
        self.rho.is_finite() && self.p.is_finite() && self.rho > 0.0 && self.p > 0.0
    }
}
