//! Cluster access trait definition.

use crate::cluster::errors::ClusterError;
use crate::cluster::types::{JobRecord, PodRecord};

/// Trait defining the interface to the cluster API.
///
/// The production backend talks to a live Kubernetes API server; tests
/// substitute an in-memory implementation. All sweep logic is written
/// against this trait and never touches API types directly.
///
/// An empty `namespace` means "all namespaces" for the list operations.
#[allow(async_fn_in_trait)]
pub trait ClusterOps {
    /// List jobs in the given namespace scope.
    async fn list_jobs(&self, namespace: &str) -> Result<Vec<JobRecord>, ClusterError>;

    /// List pods in the given namespace scope, optionally restricted to
    /// an exact-match label equality filter.
    async fn list_pods(
        &self,
        namespace: &str,
        label: Option<(&str, &str)>,
    ) -> Result<Vec<PodRecord>, ClusterError>;

    /// Look up a single job. `Ok(None)` means the job does not exist;
    /// any other failure propagates as an error and must not be treated
    /// as nonexistence.
    async fn get_job(
        &self,
        name: &str,
        namespace: &str,
    ) -> Result<Option<JobRecord>, ClusterError>;

    /// Delete a single pod.
    async fn delete_pod(&self, name: &str, namespace: &str) -> Result<(), ClusterError>;

    /// Delete a single job.
    async fn delete_job(&self, name: &str, namespace: &str) -> Result<(), ClusterError>;
}
