use chrono::{DateTime, Utc};
use tracing::{info, warn};

use jobsweep_config::SweepConfig;

use crate::cascade::{cascade_job, cascade_orphans};
use crate::cluster::{ClusterError, ClusterOps};
use crate::eligibility::eligible_jobs;
use crate::orphans::correlate_orphans;
use crate::sweep::types::SweepReport;

/// Run one full sweep: list jobs, evaluate eligibility, cascade each
/// eligible job, then (when enabled) correlate and sweep orphaned pods.
///
/// Only the top-level job listing is fatal; everything after it is
/// best-effort and lands in the report, including a failed pod listing
/// at the start of the orphan pass (the job cascades still stand). The
/// whole pipeline is read-only in simulate mode, so re-running it on an
/// unchanged cluster yields an identical report.
pub async fn run_sweep<C: ClusterOps>(
    client: &C,
    config: &SweepConfig,
    now: DateTime<Utc>,
) -> Result<SweepReport, ClusterError> {
    info!(
        event = "core.sweep.started",
        namespace = %config.namespace,
        apply = config.apply,
        days = config.days,
        orphans = config.orphans,
    );

    let jobs = client.list_jobs(&config.namespace).await?;
    let eligible = eligible_jobs(&jobs, now, config.days);

    // Evaluation is complete before the first mutating call
    let mut report = SweepReport {
        apply: config.apply,
        orphan_pass: config.orphans,
        ..SweepReport::default()
    };
    for candidate in &eligible {
        report
            .cascades
            .push(cascade_job(client, candidate, config.apply).await);
    }

    if config.orphans {
        // The job cascades above may already have deleted resources, so
        // a failed pod listing here must not throw the report away
        match client.list_pods(&config.namespace, None).await {
            Ok(pods) => {
                let scan = correlate_orphans(client, &pods).await;
                for group in &scan.groups {
                    report
                        .orphans
                        .push(cascade_orphans(client, group, config.apply).await);
                }
                report.lookup_failures = scan.lookup_failures;
            }
            Err(e) => {
                warn!(event = "core.sweep.orphan_list_failed", error = %e);
                report.orphan_list_error = Some(e.to_string());
            }
        }
    }

    report.summarize(jobs.len());

    info!(
        event = "core.sweep.completed",
        jobs_scanned = report.summary.jobs_scanned,
        jobs_eligible = report.summary.jobs_eligible,
        pods_deleted = report.summary.pods_deleted,
        orphaned_pods = report.summary.orphaned_pods,
    );

    Ok(report)
}
