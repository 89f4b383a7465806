//! Batch Roe stabilizer.
//!
//! [`RoeStabilizer`] evaluates the Roe upwind dissipation at a batch of
//! interface samples. The inputs are four index-aligned slices:
//! conservative-left, primitive-left, conservative-right and primitive-right.
//! Sample `i` of the output depends only on sample `i` of the inputs.
//!
//! # Error policy
//!
//! - Batches of unequal length are always rejected with
//!   [`StabilizerError::ShapeMismatch`] before any arithmetic is done.
//! - Non-physical samples (ρ ≤ 0, p ≤ 0 or non-finite) are not checked by
//!   [`RoeStabilizer::compute`] under [`DomainPolicy::Propagate`]; they produce
//!   NaN or infinite output. [`RoeStabilizer::compute_checked`] (or
//!   [`DomainPolicy::Reject`], which every batch entry point honors) rejects
//!   the batch at the first such sample.
//!
//! # Example
//!
//! ```
//! use euler_roe::equations::IdealGas2D;
//! use euler_roe::solver::{PrimitiveState2D, RoeStabilizer};
//!
//! let gas = IdealGas2D::air();
//! let w_l = vec![PrimitiveState2D::new(1.0, 0.0, 0.0, 1.0)];
//! let w_r = vec![PrimitiveState2D::new(0.125, 0.0, 0.0, 0.1)];
//! let q_l: Vec<_> = w_l.iter().map(|w| gas.conservative(w)).collect();
//! let q_r: Vec<_> = w_r.iter().map(|w| gas.conservative(w)).collect();
//!
//! let stabilizer = RoeStabilizer::default();
//! let d = stabilizer.compute(&q_l, &w_l, &q_r, &w_r).unwrap();
//! assert_eq!(d.len(), 1);
//! assert!((d[0].rho + 0.7813209715719257).abs() < 1e-10);
//! ```

use super::config::{DomainPolicy, StabilizerConfig};
use super::error::{InterfaceSide, StabilizerError};
use super::state::{EulerState2D, PrimitiveState2D};
use crate::equations::IdealGas2D;
use crate::flux::roe_dissipation;
use crate::types::SampleIndex;

/// Shape-checked view of a batch of interface states.
#[derive(Clone, Copy, Debug)]
pub struct InterfaceStates<'a> {
    cons_l: &'a [EulerState2D],
    prim_l: &'a [PrimitiveState2D],
    cons_r: &'a [EulerState2D],
    prim_r: &'a [PrimitiveState2D],
}

impl<'a> InterfaceStates<'a> {
    /// Bundle the four batches, requiring equal lengths.
    ///
    /// The conservative-left batch fixes the expected length.
    pub fn new(
        cons_l: &'a [EulerState2D],
        prim_l: &'a [PrimitiveState2D],
        cons_r: &'a [EulerState2D],
        prim_r: &'a [PrimitiveState2D],
    ) -> Result<Self, StabilizerError> {
        let n = cons_l.len();
        for (what, len) in [
            ("primitive-left", prim_l.len()),
            ("conservative-right", cons_r.len()),
            ("primitive-right", prim_r.len()),
        ] {
            if len != n {
                return Err(StabilizerError::shape_mismatch(what, n, len));
            }
        }

        Ok(Self {
            cons_l,
            prim_l,
            cons_r,
            prim_r,
        })
    }

    /// Number of interface samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.cons_l.len()
    }

    /// True if the batch has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cons_l.is_empty()
    }

    /// States of one sample: (q_l, w_l, q_r, w_r).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn sample(
        &self,
        index: SampleIndex,
    ) -> (
        &'a EulerState2D,
        &'a PrimitiveState2D,
        &'a EulerState2D,
        &'a PrimitiveState2D,
    ) {
        let Self {
            cons_l,
            prim_l,
            cons_r,
            prim_r,
        } = *self;
        (&cons_l[index], &prim_l[index], &cons_r[index], &prim_r[index])
    }

    /// Check ρ > 0 and p > 0 on both sides of every sample.
    ///
    /// Both the conservative and primitive density are checked since the
    /// enthalpy divides by the former and the Roe weights take the root of
    /// the latter.
    pub fn validate_domain(&self) -> Result<(), StabilizerError> {
        let sides = [
            (InterfaceSide::Left, self.cons_l, self.prim_l),
            (InterfaceSide::Right, self.cons_r, self.prim_r),
        ];

        for i in 0..self.len() {
            for (side, cons, prim) in sides {
                let rho = cons[i].rho;
                if prim[i].is_physical() && rho.is_finite() && rho > 0.0 {
                    continue;
                }
                let checks = [
                    ("density", cons[i].rho),
                    ("density", prim[i].rho),
                    ("pressure", prim[i].p),
                ];
                for (quantity, value) in checks {
                    if !(value.is_finite() && value > 0.0) {
                        log::warn!(
                            "Rejecting interface batch: sample {i} has {side} {quantity} = {value}"
                        );
                        return Err(StabilizerError::domain_violation(i, side, quantity, value));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Roe upwind dissipation over batches of interface states.
///
/// Holds only configuration; every call is a pure function of its inputs.
#[derive(Clone, Debug, Default)]
pub struct RoeStabilizer {
    config: StabilizerConfig,
    gas: IdealGas2D,
}

impl RoeStabilizer {
    /// Create a stabilizer without validating the configuration.
    pub fn new(config: StabilizerConfig) -> Self {
        Self {
            gas: IdealGas2D::new(config.gamma),
            config,
        }
    }

    /// Create a stabilizer, rejecting an invalid configuration.
    pub fn try_new(config: StabilizerConfig) -> Result<Self, StabilizerError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Default configuration with a custom ratio of specific heats.
    pub fn with_gamma(gamma: f64) -> Self {
        Self::new(StabilizerConfig::new().with_gamma(gamma))
    }

    /// Active configuration.
    pub fn config(&self) -> &StabilizerConfig {
        &self.config
    }

    /// Gas closure derived from the configuration.
    pub fn gas(&self) -> &IdealGas2D {
        &self.gas
    }

    /// Dissipation at a single interface sample.
    #[inline]
    pub fn dissipation(
        &self,
        q_l: &EulerState2D,
        w_l: &PrimitiveState2D,
        q_r: &EulerState2D,
        w_r: &PrimitiveState2D,
    ) -> EulerState2D {
        roe_dissipation(q_l, w_l, q_r, w_r, &self.gas, self.config.entropy_fix)
    }

    /// Dissipation for every sample of a batch.
    ///
    /// Returns one conservative-space vector per sample, in input order.
    pub fn compute(
        &self,
        cons_l: &[EulerState2D],
        prim_l: &[PrimitiveState2D],
        cons_r: &[EulerState2D],
        prim_r: &[PrimitiveState2D],
    ) -> Result<Vec<EulerState2D>, StabilizerError> {
        let states = InterfaceStates::new(cons_l, prim_l, cons_r, prim_r)?;
        self.compute_states(&states)
    }

    /// Dissipation for a pre-checked batch view.
    pub fn compute_states(
        &self,
        states: &InterfaceStates<'_>,
    ) -> Result<Vec<EulerState2D>, StabilizerError> {
        self.prepare(states)?;

        let out = states
            .cons_l
            .iter()
            .zip(states.prim_l)
            .zip(states.cons_r)
            .zip(states.prim_r)
            .map(|(((q_l, w_l), q_r), w_r)| self.dissipation(q_l, w_l, q_r, w_r))
            .collect();
        Ok(out)
    }

    /// Dissipation written into a caller-owned buffer.
    ///
    /// `out` must have the same length as the input batches.
    pub fn compute_into(
        &self,
        cons_l: &[EulerState2D],
        prim_l: &[PrimitiveState2D],
        cons_r: &[EulerState2D],
        prim_r: &[PrimitiveState2D],
        out: &mut [EulerState2D],
    ) -> Result<(), StabilizerError> {
        let states = InterfaceStates::new(cons_l, prim_l, cons_r, prim_r)?;
        if out.len() != states.len() {
            return Err(StabilizerError::shape_mismatch(
                "output",
                states.len(),
                out.len(),
            ));
        }
        self.prepare(&states)?;

        for (i, d) in out.iter_mut().enumerate() {
            let (q_l, w_l, q_r, w_r) = states.sample(SampleIndex::new(i));
            *d = self.dissipation(q_l, w_l, q_r, w_r);
        }
        Ok(())
    }

    /// Validated-input variant of [`compute`](Self::compute).
    ///
    /// Fails with [`StabilizerError::DomainViolation`] at the first sample
    /// with ρ ≤ 0 or p ≤ 0, regardless of the configured domain policy.
    pub fn compute_checked(
        &self,
        cons_l: &[EulerState2D],
        prim_l: &[PrimitiveState2D],
        cons_r: &[EulerState2D],
        prim_r: &[PrimitiveState2D],
    ) -> Result<Vec<EulerState2D>, StabilizerError> {
        let states = InterfaceStates::new(cons_l, prim_l, cons_r, prim_r)?;
        states.validate_domain()?;
        self.compute_states(&states)
    }

    /// Parallel version of [`compute`](Self::compute) using rayon.
    ///
    /// Produces the same output as the serial path and applies the same
    /// [`DomainPolicy`]. Enable with the `parallel` feature.
    #[cfg(feature = "parallel")]
    pub fn compute_parallel(
        &self,
        cons_l: &[EulerState2D],
        prim_l: &[PrimitiveState2D],
        cons_r: &[EulerState2D],
        prim_r: &[PrimitiveState2D],
    ) -> Result<Vec<EulerState2D>, StabilizerError> {
        use rayon::prelude::*;

        let states = InterfaceStates::new(cons_l, prim_l, cons_r, prim_r)?;
        self.prepare(&states)?;

        let out = states
            .cons_l
            .par_iter()
            .zip(states.prim_l.par_iter())
            .zip(states.cons_r.par_iter())
            .zip(states.prim_r.par_iter())
            .map(|(((q_l, w_l), q_r), w_r)| self.dissipation(q_l, w_l, q_r, w_r))
            .collect();
        Ok(out)
    }

    /// Apply the domain policy and log the batch.
    fn prepare(&self, states: &InterfaceStates<'_>) -> Result<(), StabilizerError> {
        if self.config.domain_policy == DomainPolicy::Reject {
            states.validate_domain()?;
        }
        log::debug!(
            "Roe dissipation: {} samples, gamma = {}, entropy fix = {}",
            states.len(),
            self.gas.gamma,
            self.config.entropy_fix.name()
        );
        Ok(())
    }
}
