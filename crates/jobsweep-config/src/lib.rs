//! Configuration types for jobsweep.
//!
//! A `SweepConfig` is assembled from CLI flags by the binary crate and
//! validated here before any cluster access happens.

mod errors;
mod types;

pub use errors::ConfigError;
pub use types::{DEFAULT_AGE_THRESHOLD_DAYS, DEFAULT_KUBECONFIG_PATH, SweepConfig};
