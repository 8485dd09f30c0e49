//! In-memory `ClusterOps` implementation for tests.
//!
//! Holds jobs and pods in vectors, records every delete call in order,
//! and can be told to fail specific operations to exercise the
//! partial-failure paths.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::cluster::errors::{ClusterError, ResourceKind};
use crate::cluster::traits::ClusterOps;
use crate::cluster::types::{JOB_NAME_LABEL, JobRecord, PodRecord};

#[derive(Default)]
pub(crate) struct MockCluster {
    pub jobs: Vec<JobRecord>,
    pub pods: Vec<PodRecord>,
    /// Pod names whose delete call should fail.
    pub fail_pod_deletes: HashSet<String>,
    /// Job names whose delete call should fail.
    pub fail_job_deletes: HashSet<String>,
    /// Job names whose lookup should fail with a non-NotFound error.
    pub fail_lookups: HashSet<String>,
    /// Fail every pod list call.
    pub fail_pod_list: bool,
    /// Fail only unfiltered pod list calls (no label selector).
    pub fail_unfiltered_pod_list: bool,
    /// Fail every job list call.
    pub fail_job_list: bool,
    /// Every delete call in issue order, as "kind/namespace/name".
    pub delete_log: RefCell<Vec<String>>,
}

impl MockCluster {
    pub fn deletes(&self) -> Vec<String> {
        self.delete_log.borrow().clone()
    }

    fn in_scope(namespace: &str, resource_namespace: &str) -> bool {
        namespace.is_empty() || namespace == resource_namespace
    }
}

impl ClusterOps for MockCluster {
    async fn list_jobs(&self, namespace: &str) -> Result<Vec<JobRecord>, ClusterError> {
        if self.fail_job_list {
            return Err(ClusterError::ListFailed {
                kind: ResourceKind::Job,
                message: "injected job list failure".to_string(),
            });
        }
        Ok(self
            .jobs
            .iter()
            .filter(|j| Self::in_scope(namespace, &j.namespace))
            .cloned()
            .collect())
    }

    async fn list_pods(
        &self,
        namespace: &str,
        label: Option<(&str, &str)>,
    ) -> Result<Vec<PodRecord>, ClusterError> {
        if self.fail_pod_list || (self.fail_unfiltered_pod_list && label.is_none()) {
            return Err(ClusterError::ListFailed {
                kind: ResourceKind::Pod,
                message: "injected pod list failure".to_string(),
            });
        }
        Ok(self
            .pods
            .iter()
            .filter(|p| Self::in_scope(namespace, &p.namespace))
            .filter(|p| match label {
                Some((key, value)) => {
                    key == JOB_NAME_LABEL && p.job_name.as_deref() == Some(value)
                }
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn get_job(
        &self,
        name: &str,
        namespace: &str,
    ) -> Result<Option<JobRecord>, ClusterError> {
        if self.fail_lookups.contains(name) {
            return Err(ClusterError::LookupFailed {
                name: name.to_string(),
                namespace: namespace.to_string(),
                message: "injected lookup failure".to_string(),
            });
        }
        Ok(self
            .jobs
            .iter()
            .find(|j| j.name == name && Self::in_scope(namespace, &j.namespace))
            .cloned())
    }

    async fn delete_pod(&self, name: &str, namespace: &str) -> Result<(), ClusterError> {
        self.delete_log
            .borrow_mut()
            .push(format!("pod/{}/{}", namespace, name));
        if self.fail_pod_deletes.contains(name) {
            return Err(ClusterError::DeleteFailed {
                kind: ResourceKind::Pod,
                name: name.to_string(),
                message: "injected pod delete failure".to_string(),
            });
        }
        Ok(())
    }

    async fn delete_job(&self, name: &str, namespace: &str) -> Result<(), ClusterError> {
        self.delete_log
            .borrow_mut()
            .push(format!("job/{}/{}", namespace, name));
        if self.fail_job_deletes.contains(name) {
            return Err(ClusterError::DeleteFailed {
                kind: ResourceKind::Job,
                name: name.to_string(),
                message: "injected job delete failure".to_string(),
            });
        }
        Ok(())
    }
}
