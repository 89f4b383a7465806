//! Batch stabilizer components.
//!
//! # Submodules
//!
//! - [`state`]: Conservative and primitive state types
//! - [`config`]: Stabilizer configuration (serde-deserializable)
//! - [`error`]: Error types
//! - [`stabilizer`]: [`RoeStabilizer`] batch entry points

pub mod config;
pub mod error;
pub mod stabilizer;
pub mod state;

pub use config::{DomainPolicy, EntropyFix, StabilizerConfig};
pub use error::{InterfaceSide, StabilizerError};
pub use stabilizer::{InterfaceStates, RoeStabilizer};
pub use state::{EulerState2D, PrimitiveState2D};
