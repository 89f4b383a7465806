//! Error types for interface dissipation computations.

use std::fmt;

use thiserror::Error;

use crate::types::SampleIndex;

/// Which side of an interface a state belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InterfaceSide {
    /// State on the side the normal points away from
    Left,
    /// State on the side the normal points into
    Right,
}

impl fmt::Display for InterfaceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterfaceSide::Left => write!(f, "left"),
            InterfaceSide::Right => write!(f, "right"),
        }
    }
}

/// Errors reported by the Roe stabilizer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StabilizerError {
    /// Batches passed together do not have the same number of samples.
    #[error("Shape mismatch in {what}: expected {expected} samples, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A sample violates ρ > 0, p > 0 (or is not finite).
    #[error("Domain violation at {sample}: {side} {quantity} = {value}")]
    DomainViolation {
        sample: SampleIndex,
        side: InterfaceSide,
        quantity: &'static str,
        value: f64,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl StabilizerError {
    /// Create a shape mismatch error.
    pub fn shape_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            what,
            expected,
            actual,
        }
    }

    /// Create a domain violation error.
    pub fn domain_violation(
        sample: impl Into<SampleIndex>,
        side: InterfaceSide,
        quantity: &'static str,
        value: f64,
    ) -> Self {
        Self::DomainViolation {
            sample: sample.into(),
            side,
            quantity,
            value,
        }
    }
}
