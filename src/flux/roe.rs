//! Roe approximate Riemann solver for the 2D Euler equations.
//!
//! The Roe solver linearizes the Riemann problem at each interface using
//! Roe-averaged states. The upwind dissipation it contributes is
//!
//! D = Σ |λ_k| α_k r_k
//!
//! where λ_k are the Roe-averaged eigenvalues, α_k the wave strengths and
//! r_k the right eigenvectors, so that the numerical flux reads
//!
//! F* = 0.5 * (F_L + F_R) - 0.5 * D
//!
//! The x-axis is the interface normal; it points from the left state into
//! the right state. Other orientations go through [`super::rotation`].
//!
//! Reference: Toro, "Riemann Solvers and Numerical Methods for Fluid Dynamics"

use crate::equations::IdealGas2D;
use crate::solver::{EntropyFix, EulerState2D, PrimitiveState2D};

/// Roe-averaged state at an interface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoeAverage {
    /// Averaged x-velocity
    pub u: f64,
    /// Averaged y-velocity
    pub v: f64,
    /// Averaged total specific enthalpy
    pub h: f64,
    /// Sound speed of the averaged state
    pub c: f64,
}

impl RoeAverage {
    /// Density-square-root weighted average of the two sides.
    ///
    /// Enthalpy is H = (E + p)/ρ on each side. No positivity checks are
    /// made; ρ ≤ 0 or p ≤ 0 give NaN or infinite components.
    pub fn new(
        q_l: &EulerState2D,
        w_l: &PrimitiveState2D,
        q_r: &EulerState2D,
        w_r: &PrimitiveState2D,
        gas: &IdealGas2D,
    ) -> Self {
        let h_l = gas.enthalpy(q_l, w_l);
        let h_r = gas.enthalpy(q_r, w_r);

        let sqrt_rho_l = w_l.rho.sqrt();
        let sqrt_rho_r = w_r.rho.sqrt();
        let inv_denom = 1.0 / (sqrt_rho_l + sqrt_rho_r);

        let u = (sqrt_rho_l * w_l.u + sqrt_rho_r * w_r.u) * inv_denom;
        let v = (sqrt_rho_l * w_l.v + sqrt_rho_r * w_r.v) * inv_denom;
        let h = (sqrt_rho_l * h_l + sqrt_rho_r * h_r) * inv_denom;
        let c = gas.sound_speed_from_enthalpy(h, u, v);

        Self { u, v, h, c }
    }

    /// Specific kinetic energy (u² + v²)/2.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * (self.u * self.u + self.v * self.v)
    }
}

/// Eigenvalues and right eigenvectors of the Roe matrix.
///
/// Ordering: left acoustic, entropy, shear, right acoustic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoeEigensystem {
    /// Wave speeds [u - c, u, u, u + c]
    pub eigenvalues: [f64; 4],
    /// Right eigenvectors in conservative-variable space
    pub eigenvectors: [EulerState2D; 4],
}

impl RoeEigensystem {
    /// Build the eigensystem from a Roe-averaged state.
    pub fn new(avg: &RoeAverage) -> Self {
        let RoeAverage { u, v, h, c } = *avg;

        let eigenvalues = [u - c, u, u, u + c];

        // r1 = [1, u-c, v, H-uc]ᵀ   (left acoustic)
        // r2 = [1, u, v, |u|²/2]ᵀ   (entropy)
        // r3 = [0, 0, 1, v]ᵀ        (shear)
        // r4 = [1, u+c, v, H+uc]ᵀ   (right acoustic)
        let eigenvectors = [
            EulerState2D::new(1.0, u - c, v, h - u * c),
            EulerState2D::new(1.0, u, v, avg.kinetic_energy()),
            EulerState2D::new(0.0, 0.0, 1.0, v),
            EulerState2D::new(1.0, u + c, v, h + u * c),
        ];

        Self {
            eigenvalues,
            eigenvectors,
        }
    }
}

/// Projection of a conservative jump onto the Roe eigenvectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveStrengths {
    /// α_k, same ordering as [`RoeEigensystem`]
    pub alpha: [f64; 4],
}

impl WaveStrengths {
    /// Decompose `jump = q_r - q_l` into wave strengths.
    pub fn new(avg: &RoeAverage, jump: &EulerState2D, gas: &IdealGas2D) -> Self {
        let RoeAverage { u, v, h, c } = *avg;
        let d_rho = jump.rho;
        let d_mx = jump.rho_u;
        let d_my = jump.rho_v;

        // Energy jump with the transverse (shear) contribution removed
        let d_e = jump.energy - (d_my - v * d_rho) * v;

        let alpha_2 = -gas.gamma_minus_one() / (c * c) * (d_rho * (u * u - h) + d_e - d_mx * u);
        let alpha_1 = -0.5 / c * (d_mx - d_rho * (u + c)) - 0.5 * alpha_2;
        let alpha_4 = d_rho - alpha_1 - alpha_2;
        let alpha_3 = d_my - v * d_rho;

        Self {
            alpha: [alpha_1, alpha_2, alpha_3, alpha_4],
        }
    }

    /// Σ α_k r_k, which equals the decomposed jump.
    pub fn reconstruct_jump(&self, eig: &RoeEigensystem) -> EulerState2D {
        self.alpha
            .iter()
            .zip(eig.eigenvectors.iter())
            .fold(EulerState2D::zero(), |acc, (&alpha, &r)| acc + alpha * r)
    }
}

/// Roe upwind dissipation D = Σ |λ_k| α_k r_k for one interface.
///
/// # Arguments
/// * `q_l`, `w_l` - Left state (conservative and primitive)
/// * `q_r`, `w_r` - Right state (conservative and primitive)
/// * `gas` - Ideal-gas closure
/// * `entropy_fix` - Correction applied to the two acoustic wave speeds
///
/// # Returns
/// Dissipation vector in conservative-variable space. Swapping the sides
/// negates the result.
pub fn roe_dissipation(
    q_l: &EulerState2D,
    w_l: &PrimitiveState2D,
    q_r: &EulerState2D,
    w_r: &PrimitiveState2D,
    gas: &IdealGas2D,
    entropy_fix: EntropyFix,
) -> EulerState2D {
    let avg = RoeAverage::new(q_l, w_l, q_r, w_r, gas);
    let eig = RoeEigensystem::new(&avg);
    let strengths = WaveStrengths::new(&avg, &(*q_r - *q_l), gas);

    let [l1, l2, l3, l4] = eig.eigenvalues;
    let speeds = [
        entropy_fix.acoustic_speed(l1),
        l2.abs(),
        l3.abs(),
        entropy_fix.acoustic_speed(l4),
    ];

    let [r1, r2, r3, r4] = eig.eigenvectors;
    let [a1, a2, a3, a4] = strengths.alpha;

    (a1 * speeds[0]) * r1 + (a2 * speeds[1]) * r2 + (a3 * speeds[2]) * r3 + (a4 * speeds[3]) * r4
}

/// Roe numerical flux in the x-direction for one interface.
///
/// F* = 0.5 * (F_L + F_R) - 0.5 * D
pub fn roe_flux_x(
    q_l: &EulerState2D,
    w_l: &PrimitiveState2D,
    q_r: &EulerState2D,
    w_r: &PrimitiveState2D,
    gas: &IdealGas2D,
    entropy_fix: EntropyFix,
) -> EulerState2D {
    let central = 0.5 * (gas.flux_x(q_l, w_l) + gas.flux_x(q_r, w_r));
    let dissipation = roe_dissipation(q_l, w_l, q_r, w_r, gas, entropy_fix);

    central - 0.5 * dissipation
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn states(w: PrimitiveState2D) -> (EulerState2D, PrimitiveState2D) {
        (IdealGas2D::air().conservative(&w), w)
    }

    fn assert_close(a: &EulerState2D, b: &EulerState2D, tol: f64) {
        let diff = (*a - *b).max_abs();
        assert!(diff < tol, "{a:?} != {b:?} (max diff {diff:e})");
    }

    #[test]
    fn test_roe_average_identical_states() {
        let gas = IdealGas2D::air();
        let (q, w) = states(PrimitiveState2D::new(1.2, 0.3, -0.4, 0.9));
        let avg = RoeAverage::new(&q, &w, &q, &w, &gas);

        assert!((avg.u - w.u).abs() < TOL);
        assert!((avg.v - w.v).abs() < TOL);
        assert!((avg.h - gas.enthalpy(&q, &w)).abs() < TOL);
        assert!((avg.c - gas.sound_speed(&w)).abs() < TOL);
    }

    #[test]
    fn test_roe_average_weighting() {
        // ρ_l = 4, ρ_r = 1 -> weights 2/3 and 1/3
        let gas = IdealGas2D::air();
        let (q_l, w_l) = states(PrimitiveState2D::new(4.0, 3.0, 0.0, 1.0));
        let (q_r, w_r) = states(PrimitiveState2D::new(1.0, 0.0, 3.0, 1.0));
        let avg = RoeAverage::new(&q_l, &w_l, &q_r, &w_r, &gas);

        assert!((avg.u - 2.0).abs() < TOL);
        assert!((avg.v - 1.0).abs() < TOL);
    }

    #[test]
    fn test_sod_average() {
        let gas = IdealGas2D::air();
        let (q_l, w_l) = states(PrimitiveState2D::new(1.0, 0.0, 0.0, 1.0));
        let (q_r, w_r) = states(PrimitiveState2D::new(0.125, 0.0, 0.0, 0.1));
        let avg = RoeAverage::new(&q_l, &w_l, &q_r, &w_r, &gas);

        assert!(avg.u.abs() < TOL);
        assert!((avg.h - 3.3171572875253807).abs() < 1e-10);
        assert!((avg.c - 1.1518953576649886).abs() < 1e-10);
    }

    #[test]
    fn test_eigensystem_ordering() {
        let avg = RoeAverage {
            u: 0.5,
            v: 0.25,
            h: 4.0,
            c: 1.0,
        };
        let eig = RoeEigensystem::new(&avg);

        assert_eq!(eig.eigenvalues, [-0.5, 0.5, 0.5, 1.5]);
        assert_eq!(eig.eigenvectors[0], EulerState2D::new(1.0, -0.5, 0.25, 3.5));
        assert_eq!(eig.eigenvectors[2], EulerState2D::new(0.0, 0.0, 1.0, 0.25));
        assert_eq!(eig.eigenvectors[3], EulerState2D::new(1.0, 1.5, 0.25, 4.5));
        assert!((eig.eigenvectors[1].energy - 0.15625).abs() < TOL);
    }

    #[test]
    fn test_wave_strengths_reconstruct_jump() {
        let gas = IdealGas2D::air();
        let (q_l, w_l) = states(PrimitiveState2D::new(1.0, 0.75, 0.2, 1.0));
        let (q_r, w_r) = states(PrimitiveState2D::new(0.125, -0.3, 0.5, 0.1));

        let avg = RoeAverage::new(&q_l, &w_l, &q_r, &w_r, &gas);
        let eig = RoeEigensystem::new(&avg);
        let jump = q_r - q_l;
        let strengths = WaveStrengths::new(&avg, &jump, &gas);

        assert_close(&strengths.reconstruct_jump(&eig), &jump, TOL);
    }

    #[test]
    fn test_zero_jump_gives_zero_strengths() {
        let gas = IdealGas2D::air();
        let (q, w) = states(PrimitiveState2D::new(0.7, -1.2, 0.4, 2.0));
        let avg = RoeAverage::new(&q, &w, &q, &w, &gas);
        let strengths = WaveStrengths::new(&avg, &(q - q), &gas);

        for alpha in strengths.alpha {
            assert!(alpha.abs() < TOL, "alpha = {alpha}");
        }
        let d = roe_dissipation(&q, &w, &q, &w, &gas, EntropyFix::None);
        assert_close(&d, &EulerState2D::zero(), TOL);
    }

    #[test]
    fn test_shear_only_jump() {
        // Only v jumps: pure shear wave, α_3 = Δ(ρv), others zero
        let gas = IdealGas2D::air();
        let (q_l, w_l) = states(PrimitiveState2D::new(1.0, 0.5, 0.0, 1.0));
        let (q_r, w_r) = states(PrimitiveState2D::new(1.0, 0.5, 1.0, 1.0));

        let avg = RoeAverage::new(&q_l, &w_l, &q_r, &w_r, &gas);
        let strengths = WaveStrengths::new(&avg, &(q_r - q_l), &gas);

        assert!(strengths.alpha[0].abs() < TOL);
        assert!(strengths.alpha[1].abs() < TOL);
        assert!((strengths.alpha[2] - 1.0).abs() < TOL);
        assert!(strengths.alpha[3].abs() < TOL);

        // D = |u| α_3 r_3 = 0.5 * [0, 0, 1, 0.5]
        let d = roe_dissipation(&q_l, &w_l, &q_r, &w_r, &gas, EntropyFix::None);
        assert_close(&d, &EulerState2D::new(0.0, 0.0, 0.5, 0.25), TOL);
    }

    #[test]
    fn test_antisymmetry() {
        let gas = IdealGas2D::air();
        let (q_l, w_l) = states(PrimitiveState2D::new(1.0, 0.75, 0.2, 1.0));
        let (q_r, w_r) = states(PrimitiveState2D::new(0.125, -0.3, 0.5, 0.1));

        let forward = roe_dissipation(&q_l, &w_l, &q_r, &w_r, &gas, EntropyFix::None);
        let backward = roe_dissipation(&q_r, &w_r, &q_l, &w_l, &gas, EntropyFix::None);

        assert_close(&forward, &(-backward), TOL);
    }

    #[test]
    fn test_roe_flux_consistency() {
        // F*(q, q) = F(q)
        let gas = IdealGas2D::air();
        let (q, w) = states(PrimitiveState2D::new(1.3, 2.0, -0.7, 0.8));
        let flux = roe_flux_x(&q, &w, &q, &w, &gas, EntropyFix::None);

        assert_close(&flux, &gas.flux_x(&q, &w), TOL);
    }

    #[test]
    fn test_supersonic_flux_is_upwind() {
        // All waves move right: F* = F_L exactly (up to round-off)
        let gas = IdealGas2D::air();
        let (q_l, w_l) = states(PrimitiveState2D::new(1.0, 5.0, 0.1, 1.0));
        let (q_r, w_r) = states(PrimitiveState2D::new(0.9, 4.8, 0.0, 0.9));

        let flux = roe_flux_x(&q_l, &w_l, &q_r, &w_r, &gas, EntropyFix::None);
        let avg = RoeAverage::new(&q_l, &w_l, &q_r, &w_r, &gas);
        assert!(avg.u - avg.c > 0.0);

        assert_close(&flux, &gas.flux_x(&q_l, &w_l), 1e-10);
    }

    #[test]
    fn test_entropy_fix_adds_dissipation_at_sonic_point() {
        // Left acoustic wave speed near zero
        let gas = IdealGas2D::air();
        let (q_l, w_l) = states(PrimitiveState2D::new(1.4, 0.95, 0.0, 1.0));
        let (q_r, w_r) = states(PrimitiveState2D::new(1.2, 1.05, 0.0, 0.8));

        let plain = roe_dissipation(&q_l, &w_l, &q_r, &w_r, &gas, EntropyFix::None);
        let fixed = roe_dissipation(
            &q_l,
            &w_l,
            &q_r,
            &w_r,
            &gas,
            EntropyFix::Harten { delta: 0.5 },
        );

        assert!(plain.is_finite() && fixed.is_finite());
        assert!((plain - fixed).max_abs() > 1e-6);
    }

    #[test]
    fn test_entropy_fix_inactive_away_from_sonic_points() {
        let gas = IdealGas2D::air();
        let (q_l, w_l) = states(PrimitiveState2D::new(1.0, 0.0, 0.0, 1.0));
        let (q_r, w_r) = states(PrimitiveState2D::new(0.125, 0.0, 0.0, 0.1));

        let plain = roe_dissipation(&q_l, &w_l, &q_r, &w_r, &gas, EntropyFix::None);
        let fixed = roe_dissipation(
            &q_l,
            &w_l,
            &q_r,
            &w_r,
            &gas,
            EntropyFix::Harten { delta: 0.1 },
        );

        assert_eq!(plain, fixed);
    }
}
