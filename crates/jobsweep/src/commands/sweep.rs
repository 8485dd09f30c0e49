use std::path::PathBuf;

use chrono::Utc;
use clap::ArgMatches;
use tracing::{error, info};

use jobsweep_config::SweepConfig;
use jobsweep_core::cluster::KubeCluster;
use jobsweep_core::{events, sweep};

use crate::report;

pub(crate) async fn handle_sweep_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_from_matches(matches);
    let json_output = matches.get_flag("json");

    info!(
        event = "cli.sweep_started",
        namespace = %config.namespace,
        apply = config.apply,
        days = config.days,
        orphans = config.orphans,
    );

    if let Err(e) = config.validate() {
        eprintln!("{}", e);
        error!(event = "cli.config_invalid", error = %e);
        events::log_app_error(&e);
        return Err(e.into());
    }

    let client = match KubeCluster::connect(&config).await {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            error!(event = "cli.connect_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    match sweep::run_sweep(&client, &config, Utc::now()).await {
        Ok(report) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report::print_report(&report);
            }

            info!(
                event = "cli.sweep_completed",
                jobs_eligible = report.summary.jobs_eligible,
                pods_deleted = report.summary.pods_deleted,
                orphaned_pods = report.summary.orphaned_pods,
            );

            // Per-resource failures are already in the report; only a
            // failed listing reaches the Err arm and a non-zero exit
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            error!(event = "cli.sweep_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn config_from_matches(matches: &ArgMatches) -> SweepConfig {
    SweepConfig {
        kubeconfig: matches
            .get_one::<String>("kubeconfig")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./config")),
        context: matches.get_one::<String>("context").cloned(),
        in_cluster: matches.get_flag("in-cluster"),
        namespace: matches
            .get_one::<String>("namespace")
            .cloned()
            .unwrap_or_default(),
        apply: matches.get_flag("delete"),
        days: *matches.get_one::<u32>("days").unwrap_or(&7),
        orphans: matches.get_flag("orphans"),
    }
}
