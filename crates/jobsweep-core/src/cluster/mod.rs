mod errors;
mod kube;
#[cfg(test)]
pub(crate) mod mock;
mod traits;
mod types;

// Public API exports
pub use errors::{ClusterError, ResourceKind};
pub use kube::KubeCluster;
pub use traits::ClusterOps;
pub use types::{JOB_NAME_LABEL, JobRecord, PodPhase, PodRecord};
