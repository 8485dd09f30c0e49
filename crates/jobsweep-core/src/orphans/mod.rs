mod handler;
mod types;

// Public API exports
pub use handler::{correlate_orphans, group_pods_by_job};
pub use types::{LookupFailure, OrphanGroup, OrphanScan};
