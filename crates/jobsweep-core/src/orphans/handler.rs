use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::cluster::{ClusterOps, PodRecord};
use crate::orphans::types::{LookupFailure, OrphanGroup, OrphanScan};

/// Group labeled pods by the job they claim to belong to.
///
/// Keyed by (namespace, label value): a job's pods live in the job's own
/// namespace, and an all-namespaces scan must not merge same-named jobs
/// from different namespaces. Pods without the association label are
/// ignored. Built once per pass and never mutated afterwards; pods keep
/// their source listing order within each key.
pub fn group_pods_by_job(pods: &[PodRecord]) -> BTreeMap<(String, String), Vec<PodRecord>> {
    let mut groups: BTreeMap<(String, String), Vec<PodRecord>> = BTreeMap::new();

    for pod in pods {
        if let Some(job_name) = &pod.job_name {
            groups
                .entry((pod.namespace.clone(), job_name.clone()))
                .or_default()
                .push(pod.clone());
        }
    }

    groups
}

/// Cross-reference each pod group against the live jobs.
///
/// A group whose job lookup returns NotFound is an orphan group. A
/// lookup that fails for any other reason is recorded and skipped; an
/// outage must never classify pods as orphaned.
pub async fn correlate_orphans<C: ClusterOps>(client: &C, pods: &[PodRecord]) -> OrphanScan {
    let groups = group_pods_by_job(pods);
    info!(
        event = "core.orphans.correlate_started",
        labeled_groups = groups.len(),
        pods = pods.len(),
    );

    let mut scan = OrphanScan::default();

    for ((namespace, job_name), group_pods) in groups {
        match client.get_job(&job_name, &namespace).await {
            Ok(Some(_)) => {
                debug!(
                    event = "core.orphans.job_exists",
                    job = %job_name,
                    namespace = %namespace,
                );
            }
            Ok(None) => {
                debug!(
                    event = "core.orphans.group_found",
                    job = %job_name,
                    namespace = %namespace,
                    pods = group_pods.len(),
                );
                scan.groups.push(OrphanGroup {
                    namespace,
                    job_name,
                    pods: group_pods,
                });
            }
            Err(e) => {
                warn!(
                    event = "core.orphans.lookup_failed",
                    job = %job_name,
                    namespace = %namespace,
                    error = %e,
                );
                scan.lookup_failures.push(LookupFailure {
                    namespace,
                    job_name,
                    message: e.to_string(),
                });
            }
        }
    }

    info!(
        event = "core.orphans.correlate_completed",
        orphan_groups = scan.groups.len(),
        lookup_failures = scan.lookup_failures.len(),
    );

    scan
}
