// CLI command definitions

use super::deploy::DeployCommand;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "postgres-kube",
    version,
    about = "Kubernetes deployment tool for the assisted-installer PostgreSQL instance",
    long_about = "A standalone CLI tool that stages the PostgreSQL manifest templates into a build directory and applies them to a Kubernetes cluster"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Stage the PostgreSQL manifests and apply them to the cluster
    Deploy(DeployCommand),
}
