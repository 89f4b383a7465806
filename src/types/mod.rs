//! Strongly-typed domain types for safer APIs.
//!
//! # Example
//!
//! ```
//! use euler_roe::types::{SampleIndex, conservative, primitive};
//!
//! let q = [1.0, 0.5, 0.0, 2.5];
//! assert_eq!(q[conservative::ENERGY], 2.5);
//! assert_eq!(primitive::PRESSURE, 3);
//! assert_eq!(SampleIndex::new(4).to_string(), "sample#4");
//! ```

mod indices;

pub use indices::{N_VARS, SampleIndex, conservative, primitive};
