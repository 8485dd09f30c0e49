use serde::{Deserialize, Serialize};

use crate::cluster::PodRecord;

/// Pods whose named job no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrphanGroup {
    pub namespace: String,
    /// The `job-name` label value the pods carry; no live job matches it.
    pub job_name: String,
    pub pods: Vec<PodRecord>,
}

/// A job-existence check that failed with something other than NotFound.
/// The key is left unclassified rather than assumed orphaned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupFailure {
    pub namespace: String,
    pub job_name: String,
    pub message: String,
}

/// Result of one orphan-correlation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrphanScan {
    pub groups: Vec<OrphanGroup>,
    pub lookup_failures: Vec<LookupFailure>,
}
