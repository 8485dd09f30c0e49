mod handler;
mod types;

// Public API exports
pub use handler::{cascade_job, cascade_orphans};
pub use types::{JobAction, JobCascade, OrphanCascade, PodAction, PodOutcome};
