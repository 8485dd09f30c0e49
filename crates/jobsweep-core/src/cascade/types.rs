use serde::{Deserialize, Serialize};

use crate::cluster::PodPhase;

/// What the executor did (or would do) with one pod.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PodAction {
    /// Deleted in apply mode.
    Deleted,
    /// Deletion candidate reported in simulate mode.
    WouldDelete,
    /// Not in a terminal phase; never deleted.
    SkippedNotTerminal,
    /// Delete call failed; the sweep moved on.
    DeleteFailed { message: String },
}

/// Outcome for one pod inside a cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodOutcome {
    pub name: String,
    pub namespace: String,
    pub phase: PodPhase,
    #[serde(flatten)]
    pub action: PodAction,
}

/// What the executor did (or would do) with the job itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum JobAction {
    Deleted,
    WouldDelete,
    DeleteFailed { message: String },
    /// The fresh pod listing failed, so the whole cascade (pods and
    /// job) was skipped for this job.
    SkippedPodListFailed { message: String },
}

/// Full outcome of one eligible job's cascade: pods first, then the job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobCascade {
    pub name: String,
    pub namespace: String,
    pub age_days: i64,
    pub pods: Vec<PodOutcome>,
    pub job: JobAction,
}

/// Outcome of sweeping one orphan group. There is no job to delete;
/// only terminal pods are acted on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrphanCascade {
    pub namespace: String,
    pub job_name: String,
    pub pods: Vec<PodOutcome>,
}
