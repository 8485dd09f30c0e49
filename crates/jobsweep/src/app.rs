use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("jobsweep")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Remove stale Kubernetes batch jobs and their dependent pods")
        .long_about(
            "Finds completed jobs older than the age threshold, deletes their \
             terminal pods and then the jobs themselves. Runs in simulate mode \
             unless -f/--delete is given; -o/--orphans additionally sweeps pods \
             whose owning job no longer exists.",
        )
        .arg(
            Arg::new("kubeconfig")
                .long("kubeconfig")
                .value_name("PATH")
                .default_value("./config")
                .help("Path to the kubeconfig file"),
        )
        .arg(
            Arg::new("in-cluster")
                .long("in-cluster")
                .action(ArgAction::SetTrue)
                .help("Use in-cluster credentials instead of a kubeconfig"),
        )
        .arg(
            Arg::new("context")
                .long("context")
                .value_name("NAME")
                .help("Override current-context (default: current-context in kubeconfig)"),
        )
        .arg(
            Arg::new("namespace")
                .short('n')
                .long("namespace")
                .value_name("NAME")
                .help("Restrict to one namespace (default: all namespaces)"),
        )
        .arg(
            Arg::new("delete")
                .short('f')
                .long("delete")
                .action(ArgAction::SetTrue)
                .help("Actually delete eligible resources (default: simulate)"),
        )
        .arg(
            Arg::new("days")
                .long("days")
                .value_name("DAYS")
                .value_parser(value_parser!(u32))
                .default_value("7")
                .help("Age threshold in days for job eligibility"),
        )
        .arg(
            Arg::new("orphans")
                .short('o')
                .long("orphans")
                .action(ArgAction::SetTrue)
                .help("Also sweep pods whose owning job no longer exists"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the report as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable verbose logging"),
        )
}
