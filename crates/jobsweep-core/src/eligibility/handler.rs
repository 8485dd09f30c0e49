use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::cluster::JobRecord;
use crate::eligibility::types::EligibleJob;

/// Select the jobs old enough to sweep.
///
/// A job qualifies when it is terminal (no active pods) and its age in
/// whole days is at least `threshold_days`. Jobs with no completion
/// timestamp are aged from the Unix epoch, which makes them always old
/// enough; an incomplete status block on a terminal job is itself stale.
///
/// Pure evaluation over an already-fetched listing: no API calls, and
/// output preserves listing order.
pub fn eligible_jobs(
    jobs: &[JobRecord],
    now: DateTime<Utc>,
    threshold_days: u32,
) -> Vec<EligibleJob> {
    let mut eligible = Vec::new();

    for job in jobs {
        if !job.is_terminal() {
            debug!(
                event = "core.eligibility.job_active",
                job = %job.name,
                namespace = %job.namespace,
                active = ?job.active,
            );
            continue;
        }

        let age_days = age_in_days(job.completion_time, now);
        if age_days >= i64::from(threshold_days) {
            eligible.push(EligibleJob {
                job: job.clone(),
                age_days,
            });
        } else {
            debug!(
                event = "core.eligibility.job_too_young",
                job = %job.name,
                namespace = %job.namespace,
                age_days = age_days,
            );
        }
    }

    info!(
        event = "core.eligibility.evaluated",
        scanned = jobs.len(),
        eligible = eligible.len(),
        threshold_days = threshold_days,
    );

    eligible
}

/// Whole days between completion and now, floored via whole hours.
/// Missing completion time counts from the Unix epoch.
fn age_in_days(completion_time: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    let completed = completion_time.unwrap_or(DateTime::UNIX_EPOCH);
    (now - completed).num_hours() / 24
}
