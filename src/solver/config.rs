//! Configuration for the Roe stabilizer.
//!
//! All fields have serde defaults, so a host solver can embed the config in
//! its own input file and only spell out what it changes:
//!
//! ```
//! use euler_roe::solver::{EntropyFix, StabilizerConfig};
//!
//! let config: StabilizerConfig =
//!     serde_json::from_str(r#"{ "entropy_fix": { "harten": { "delta": 0.1 } } }"#).unwrap();
//! assert_eq!(config.gamma, 1.4);
//! assert_eq!(config.entropy_fix, EntropyFix::Harten { delta: 0.1 });
//! ```

use serde::{Deserialize, Serialize};

use super::error::StabilizerError;
use crate::equations::GAMMA_AIR;

/// Correction of the acoustic wave speeds near sonic points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntropyFix {
    /// Plain Roe: |λ| everywhere.
    #[default]
    None,
    /// Harten's fix: |λ| is replaced by (λ² + δ²)/(2δ) when |λ| < δ.
    Harten {
        /// Width of the smoothing region around λ = 0
        delta: f64,
    },
}

impl EntropyFix {
    /// Wave-speed magnitude used for an acoustic wave.
    #[inline]
    pub fn acoustic_speed(self, lambda: f64) -> f64 {
        match self {
            EntropyFix::None => lambda.abs(),
            EntropyFix::Harten { delta } => {
                let abs = lambda.abs();
                if abs < delta {
                    log::trace!("Harten fix active: lambda = {lambda:.3e}, delta = {delta:.3e}");
                    0.5 * (lambda * lambda + delta * delta) / delta
                } else {
                    abs
                }
            }
        }
    }

    /// Human-readable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            EntropyFix::None => "none",
            EntropyFix::Harten { .. } => "harten",
        }
    }
}

/// What to do with samples that violate ρ > 0, p > 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainPolicy {
    /// No checks; invalid samples produce non-finite output.
    #[default]
    Propagate,
    /// Reject the whole batch at the first invalid sample.
    Reject,
}

fn default_gamma() -> f64 {
    GAMMA_AIR
}

/// Roe stabilizer configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StabilizerConfig {
    /// Ratio of specific heats γ
    #[serde(default = "default_gamma")]
    pub gamma: f64,

    /// Sonic-point correction of the acoustic waves
    #[serde(default)]
    pub entropy_fix: EntropyFix,

    /// Handling of non-physical input samples
    #[serde(default)]
    pub domain_policy: DomainPolicy,
}

impl StabilizerConfig {
    /// Default configuration: γ = 1.4, plain Roe, unchecked inputs.
    pub fn new() -> Self {
        Self {
            gamma: default_gamma(),
            entropy_fix: EntropyFix::None,
            domain_policy: DomainPolicy::Propagate,
        }
    }

    /// Set the ratio of specific heats.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the entropy fix.
    pub fn with_entropy_fix(mut self, entropy_fix: EntropyFix) -> Self {
        self.entropy_fix = entropy_fix;
        self
    }

    /// Set the domain policy.
    pub fn with_domain_policy(mut self, domain_policy: DomainPolicy) -> Self {
        self.domain_policy = domain_policy;
        self
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<(), StabilizerError> {
        if !self.gamma.is_finite() || self.gamma <= 1.0 {
            return Err(StabilizerError::InvalidConfig(format!(
                "gamma must be finite and > 1, got {}",
                self.gamma
            )));
        }
        if let EntropyFix::Harten { delta } = self.entropy_fix {
            if !delta.is_finite() || delta <= 0.0 {
                return Err(StabilizerError::InvalidConfig(format!(
                    "Harten delta must be finite and > 0, got {delta}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-14;

    #[test]
    fn test_defaults() {
        let config = StabilizerConfig::default();
        assert_eq!(config.gamma, 1.4);
        assert_eq!(config.entropy_fix, EntropyFix::None);
        assert_eq!(config.domain_policy, DomainPolicy::Propagate);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_empty() {
        let config: StabilizerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StabilizerConfig::default());
    }

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "gamma": 1.67,
            "entropy_fix": { "harten": { "delta": 0.05 } },
            "domain_policy": "reject"
        }"#;
        let config: StabilizerConfig = serde_json::from_str(json).unwrap();

        assert!((config.gamma - 1.67).abs() < TOL);
        assert_eq!(config.entropy_fix, EntropyFix::Harten { delta: 0.05 });
        assert_eq!(config.domain_policy, DomainPolicy::Reject);
    }

    #[test]
    fn test_unit_variant_spelling() {
        let config: StabilizerConfig =
            serde_json::from_str(r#"{ "entropy_fix": "none", "domain_policy": "propagate" }"#)
                .unwrap();
        assert_eq!(config, StabilizerConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_gamma() {
        assert!(StabilizerConfig::new().with_gamma(1.0).validate().is_err());
        assert!(StabilizerConfig::new().with_gamma(f64::NAN).validate().is_err());
        assert!(StabilizerConfig::new().with_gamma(5.0 / 3.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_delta() {
        let config = StabilizerConfig::new().with_entropy_fix(EntropyFix::Harten { delta: 0.0 });
        assert!(matches!(
            config.validate(),
            Err(StabilizerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_plain_speed_is_abs() {
        assert!((EntropyFix::None.acoustic_speed(-0.3) - 0.3).abs() < TOL);
        assert_eq!(EntropyFix::None.acoustic_speed(0.0), 0.0);
    }

    #[test]
    fn test_harten_speed() {
        let fix = EntropyFix::Harten { delta: 0.2 };

        // Inside the smoothing region: (λ² + δ²)/(2δ)
        assert!((fix.acoustic_speed(0.0) - 0.1).abs() < TOL);
        assert!((fix.acoustic_speed(-0.1) - 0.125).abs() < TOL);

        // Outside: unchanged
        assert!((fix.acoustic_speed(0.5) - 0.5).abs() < TOL);
        assert!((fix.acoustic_speed(-0.5) - 0.5).abs() < TOL);

        // Continuous at |λ| = δ
        assert!((fix.acoustic_speed(0.2 - 1e-12) - 0.2).abs() < 1e-10);
    }
}
