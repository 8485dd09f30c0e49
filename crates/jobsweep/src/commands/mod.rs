mod sweep;

use clap::ArgMatches;

use jobsweep_core::events;

pub async fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();
    sweep::handle_sweep_command(matches).await
}
