use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label key linking a pod back to the batch job that created it.
pub const JOB_NAME_LABEL: &str = "job-name";

/// A batch job as seen by the sweep, reduced to the fields the
/// eligibility rules read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub name: String,
    pub namespace: String,
    /// Number of actively running pods; `None` when the API reports no
    /// active count.
    pub active: Option<i32>,
    pub completion_time: Option<DateTime<Utc>>,
}

impl JobRecord {
    /// A job is terminal when its active count is zero or unset.
    pub fn is_terminal(&self) -> bool {
        self.active.unwrap_or(0) == 0
    }
}

/// Pod lifecycle phase. Only `Succeeded` and `Failed` are terminal;
/// anything the API reports that we don't recognize maps to `Unknown`
/// and is never treated as terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PodPhase {
    Pending,
    Running,
    Succeeded,
    Failed,
    Unknown,
}

impl PodPhase {
    pub fn parse(phase: &str) -> Self {
        match phase {
            "Pending" => PodPhase::Pending,
            "Running" => PodPhase::Running,
            "Succeeded" => PodPhase::Succeeded,
            "Failed" => PodPhase::Failed,
            _ => PodPhase::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PodPhase::Pending => "Pending",
            PodPhase::Running => "Running",
            PodPhase::Succeeded => "Succeeded",
            PodPhase::Failed => "Failed",
            PodPhase::Unknown => "Unknown",
        }
    }

    /// Whether no further phase transition can occur.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PodPhase::Succeeded | PodPhase::Failed)
    }
}

impl std::fmt::Display for PodPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pod as seen by the sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodRecord {
    pub name: String,
    pub namespace: String,
    pub phase: PodPhase,
    /// Value of the `job-name` label, when present.
    pub job_name: Option<String>,
}
