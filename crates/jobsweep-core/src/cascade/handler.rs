use tracing::{debug, info, warn};

use crate::cascade::types::{JobAction, JobCascade, OrphanCascade, PodAction, PodOutcome};
use crate::cluster::{ClusterOps, JOB_NAME_LABEL, PodRecord};
use crate::eligibility::EligibleJob;
use crate::orphans::OrphanGroup;

/// Run the deletion cascade for one eligible job: its terminal pods
/// first, then the job itself.
///
/// The pod listing is a fresh query against the job's association label
/// so the cascade reflects current state rather than the earlier scan.
/// A listing failure skips this job entirely. Per-pod delete failures
/// are recorded and do not block the job deletion. In simulate mode no
/// mutating call is issued anywhere.
pub async fn cascade_job<C: ClusterOps>(
    client: &C,
    candidate: &EligibleJob,
    apply: bool,
) -> JobCascade {
    let job = &candidate.job;
    info!(
        event = "core.cascade.job_started",
        job = %job.name,
        namespace = %job.namespace,
        age_days = candidate.age_days,
        apply = apply,
    );

    let pods = match client
        .list_pods(&job.namespace, Some((JOB_NAME_LABEL, &job.name)))
        .await
    {
        Ok(pods) => pods,
        Err(e) => {
            warn!(
                event = "core.cascade.pod_list_failed",
                job = %job.name,
                namespace = %job.namespace,
                error = %e,
            );
            return JobCascade {
                name: job.name.clone(),
                namespace: job.namespace.clone(),
                age_days: candidate.age_days,
                pods: Vec::new(),
                job: JobAction::SkippedPodListFailed {
                    message: e.to_string(),
                },
            };
        }
    };

    let mut outcomes = Vec::with_capacity(pods.len());
    for pod in &pods {
        outcomes.push(sweep_pod(client, pod, apply).await);
    }

    let job_action = if !apply {
        JobAction::WouldDelete
    } else {
        match client.delete_job(&job.name, &job.namespace).await {
            Ok(()) => JobAction::Deleted,
            Err(e) => {
                warn!(
                    event = "core.cascade.job_delete_failed",
                    job = %job.name,
                    namespace = %job.namespace,
                    error = %e,
                );
                JobAction::DeleteFailed {
                    message: e.to_string(),
                }
            }
        }
    };

    info!(
        event = "core.cascade.job_completed",
        job = %job.name,
        namespace = %job.namespace,
        pods = outcomes.len(),
    );

    JobCascade {
        name: job.name.clone(),
        namespace: job.namespace.clone(),
        age_days: candidate.age_days,
        pods: outcomes,
        job: job_action,
    }
}

/// Sweep one orphan group: terminal pods are deleted (or reported),
/// everything else is reported and left alone. Orphan status alone is
/// never grounds for deleting a pod that is still running.
pub async fn cascade_orphans<C: ClusterOps>(
    client: &C,
    group: &OrphanGroup,
    apply: bool,
) -> OrphanCascade {
    info!(
        event = "core.cascade.orphans_started",
        job = %group.job_name,
        namespace = %group.namespace,
        pods = group.pods.len(),
        apply = apply,
    );

    if group.pods.is_empty() {
        // Impossible by construction, but an empty group is reported
        // rather than trusted
        warn!(
            event = "core.cascade.orphan_group_empty",
            job = %group.job_name,
            namespace = %group.namespace,
        );
    }

    let mut outcomes = Vec::with_capacity(group.pods.len());
    for pod in &group.pods {
        outcomes.push(sweep_pod(client, pod, apply).await);
    }

    OrphanCascade {
        namespace: group.namespace.clone(),
        job_name: group.job_name.clone(),
        pods: outcomes,
    }
}

async fn sweep_pod<C: ClusterOps>(client: &C, pod: &PodRecord, apply: bool) -> PodOutcome {
    let action = if !pod.phase.is_terminal() {
        debug!(
            event = "core.cascade.pod_not_terminal",
            pod = %pod.name,
            namespace = %pod.namespace,
            phase = %pod.phase,
        );
        PodAction::SkippedNotTerminal
    } else if !apply {
        PodAction::WouldDelete
    } else {
        match client.delete_pod(&pod.name, &pod.namespace).await {
            Ok(()) => PodAction::Deleted,
            Err(e) => {
                warn!(
                    event = "core.cascade.pod_delete_failed",
                    pod = %pod.name,
                    namespace = %pod.namespace,
                    error = %e,
                );
                PodAction::DeleteFailed {
                    message: e.to_string(),
                }
            }
        }
    };

    PodOutcome {
        name: pod.name.clone(),
        namespace: pod.namespace.clone(),
        phase: pod.phase,
        action,
    }
}
