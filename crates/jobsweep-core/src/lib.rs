//! Core library for jobsweep.
//!
//! The sweep pipeline is strictly sequential: list jobs, evaluate
//! eligibility, cascade-delete each eligible job (pods first), then
//! optionally correlate and sweep orphaned pods. All cluster access goes
//! through the `ClusterOps` trait in [`cluster`]; everything else is
//! plain data in, structured outcomes out.

pub mod cascade;
pub mod cluster;
pub mod eligibility;
pub mod errors;
pub mod events;
pub mod orphans;
pub mod sweep;

pub use errors::{SweepError, SweepResult};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the current process.
///
/// Quiet mode (the default) only surfaces warnings and errors; verbose
/// mode enables debug-level events. The `JOBSWEEP_LOG` env var overrides
/// both when set.
pub fn init_logging(quiet: bool) {
    let default_directive = if quiet { "warn" } else { "debug" };

    let filter = EnvFilter::try_from_env("JOBSWEEP_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
