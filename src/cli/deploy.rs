//! PostgreSQL deployment command

use crate::domain::deployer::PostgresDeployer;
use crate::infrastructure::constants;
use crate::infrastructure::kubernetes::PostgresKubeClientImpl;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
pub struct DeployCommand {
    /// Kubernetes namespace holding the PostgreSQL resources
    #[arg(long, short = 'n', default_value = constants::DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Path to kubeconfig file
    /// If not specified, uses default kubeconfig resolution (KUBECONFIG env or ~/.kube/config)
    #[arg(long)]
    pub kubeconfig: Option<String>,

    /// Kubernetes context to use
    /// If not specified, uses current context from kubeconfig
    #[arg(long)]
    pub context: Option<String>,

    /// Directory holding the manifest templates
    #[arg(long, default_value = constants::SOURCE_DIR)]
    pub source_dir: PathBuf,

    /// Directory the staged manifests are written to (must exist)
    #[arg(long, default_value = constants::BUILD_DIR)]
    pub build_dir: PathBuf,

    /// Name of the PersistentVolumeClaim whose capacity is preserved across redeployments
    #[arg(long, default_value = constants::PVC_NAME)]
    pub pvc_name: String,

    /// Storage size to stamp into the storage manifest (e.g. "20Gi")
    /// If not specified, the existing claim's capacity is used, falling back to "10Gi"
    #[arg(long)]
    pub storage_size: Option<String>,
}

impl DeployCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let client = if self.kubeconfig.is_some() || self.context.is_some() {
            PostgresKubeClientImpl::new_with_config(
                self.namespace.clone(),
                self.kubeconfig.clone(),
                self.context.clone(),
            )
            .await
        } else {
            PostgresKubeClientImpl::new(self.namespace.clone()).await
        }
        .map_err(|e| anyhow::anyhow!("Failed to create Kubernetes client: {}", e))?;

        let deployer = PostgresDeployer::new(
            Box::new(client),
            self.source_dir.clone(),
            self.build_dir.clone(),
            self.pvc_name.clone(),
            self.storage_size.clone(),
        );

        deployer
            .deploy_all()
            .await
            .map_err(|e| anyhow::anyhow!("Deployment failed: {}", e))?;

        println!("PostgreSQL deployed successfully!");
        Ok(())
    }
}
