use serde::{Deserialize, Serialize};

use crate::cascade::{JobAction, JobCascade, OrphanCascade, PodAction};
use crate::orphans::LookupFailure;

/// Aggregate counters over one sweep, for the summary line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepSummary {
    pub jobs_scanned: usize,
    pub jobs_eligible: usize,
    pub jobs_deleted: usize,
    pub pods_deleted: usize,
    pub pods_would_delete: usize,
    pub pods_skipped: usize,
    pub pod_delete_failures: usize,
    /// Pods found under absent job names, regardless of phase.
    pub orphaned_pods: usize,
    /// Distinct absent job names with pods still attached.
    pub orphan_job_names: usize,
    pub lookup_failures: usize,
}

/// Everything one invocation decided and did, ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Apply mode was on; otherwise every action is a would-delete.
    pub apply: bool,
    /// The orphan-correlation pass ran.
    pub orphan_pass: bool,
    pub cascades: Vec<JobCascade>,
    pub orphans: Vec<OrphanCascade>,
    pub lookup_failures: Vec<LookupFailure>,
    /// The orphan pass's pod listing failed; the pass was skipped but
    /// the job cascades above still stand.
    pub orphan_list_error: Option<String>,
    pub summary: SweepSummary,
}

impl SweepReport {
    pub(crate) fn summarize(&mut self, jobs_scanned: usize) {
        let mut summary = SweepSummary {
            jobs_scanned,
            jobs_eligible: self.cascades.len(),
            orphan_job_names: self.orphans.len(),
            lookup_failures: self.lookup_failures.len(),
            ..SweepSummary::default()
        };

        let pod_outcomes = self
            .cascades
            .iter()
            .flat_map(|c| c.pods.iter())
            .chain(self.orphans.iter().flat_map(|o| o.pods.iter()));
        for outcome in pod_outcomes {
            match &outcome.action {
                PodAction::Deleted => summary.pods_deleted += 1,
                PodAction::WouldDelete => summary.pods_would_delete += 1,
                PodAction::SkippedNotTerminal => summary.pods_skipped += 1,
                PodAction::DeleteFailed { .. } => summary.pod_delete_failures += 1,
            }
        }

        summary.jobs_deleted = self
            .cascades
            .iter()
            .filter(|c| c.job == JobAction::Deleted)
            .count();

        // Orphan status is defined by job absence alone; skipped
        // non-terminal pods still count as orphaned
        summary.orphaned_pods = self.orphans.iter().map(|o| o.pods.len()).sum();

        self.summary = summary;
    }
}
