//! Text rendering of a sweep report.
//!
//! All decisions happen in jobsweep-core; this module only turns the
//! structured outcomes into lines on stdout.

use jobsweep_core::cascade::{JobAction, JobCascade, OrphanCascade, PodAction, PodOutcome};
use jobsweep_core::sweep::SweepReport;

pub fn print_report(report: &SweepReport) {
    if report.cascades.is_empty() {
        println!("No jobs eligible for deletion.");
    } else if report.apply {
        println!("Deleting eligible jobs:");
    } else {
        println!("Jobs eligible for deletion with -f flag:");
    }

    for cascade in &report.cascades {
        print_job_cascade(cascade);
    }

    if report.orphan_pass {
        if let Some(message) = &report.orphan_list_error {
            eprintln!("Orphan sweep skipped: could not list pods: {}", message);
        } else {
            print_orphans(report);
        }
    }

    for failure in &report.lookup_failures {
        eprintln!(
            "  Could not check job '{}' in namespace '{}': {}",
            failure.job_name, failure.namespace, failure.message
        );
    }

    print_summary(report);
}

fn print_job_cascade(cascade: &JobCascade) {
    println!(
        "  Job: {}\tNamespace: {}\tAge: {}d",
        cascade.name, cascade.namespace, cascade.age_days
    );

    for pod in &cascade.pods {
        print_pod_outcome(pod);
    }

    match &cascade.job {
        JobAction::Deleted => println!("    job deleted"),
        JobAction::WouldDelete => println!("    job would be deleted"),
        JobAction::DeleteFailed { message } => {
            println!("    job delete failed: {}", message)
        }
        JobAction::SkippedPodListFailed { message } => {
            println!("    skipped: could not list pods ({})", message)
        }
    }
}

fn print_orphans(report: &SweepReport) {
    if report.orphans.is_empty() {
        println!("No orphaned pods found.");
        return;
    }

    println!("Orphaned pods (owning job no longer exists):");
    for orphan in &report.orphans {
        print_orphan_cascade(orphan);
    }
}

fn print_orphan_cascade(cascade: &OrphanCascade) {
    println!(
        "  Job name: {}\tNamespace: {}\t({} pods)",
        cascade.job_name,
        cascade.namespace,
        cascade.pods.len()
    );

    if cascade.pods.is_empty() {
        println!("    no pods found");
        return;
    }

    for pod in &cascade.pods {
        print_pod_outcome(pod);
    }
}

fn print_pod_outcome(pod: &PodOutcome) {
    println!(
        "    pod {} ({}): {}",
        pod.name,
        pod.phase,
        pod_action_label(&pod.action)
    );
}

fn pod_action_label(action: &PodAction) -> String {
    match action {
        PodAction::Deleted => "deleted".to_string(),
        PodAction::WouldDelete => "would be deleted".to_string(),
        PodAction::SkippedNotTerminal => "skipped (not terminal)".to_string(),
        PodAction::DeleteFailed { message } => format!("delete failed: {}", message),
    }
}

fn print_summary(report: &SweepReport) {
    println!("Total eligible jobs: {}", report.summary.jobs_eligible);

    if report.orphan_pass && report.orphan_list_error.is_none() {
        println!(
            "Total orphaned pods: {} (across {} job names)",
            report.summary.orphaned_pods, report.summary.orphan_job_names
        );
    }

    if report.summary.pod_delete_failures > 0 {
        println!(
            "Pod delete failures: {}",
            report.summary.pod_delete_failures
        );
    }
}
