mod handler;
mod types;

// Public API exports
pub use handler::run_sweep;
pub use types::{SweepReport, SweepSummary};
