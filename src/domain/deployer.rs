// Copyright 2026 the postgres-kube authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::manifest::{substitute_storage_size, MANIFESTS};
use crate::infrastructure::constants::DEFAULT_STORAGE_SIZE;
use crate::infrastructure::kubernetes::client::PostgresKubeClient;
use crate::shared::error::DeployError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the storage size for the staged manifest came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageSizeSource {
    /// Pinned on the command line; the claim is not probed.
    Requested,
    /// Read from the existing claim's recorded capacity.
    Existing,
    /// The fixed fallback after a failed probe.
    Default,
}

/// A storage size together with its provenance.
///
/// Displays as the progress line the operator sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStorageSize {
    pub size: String,
    pub source: StorageSizeSource,
}

impl fmt::Display for ResolvedStorageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            StorageSizeSource::Requested => write!(f, "Using requested size {}", self.size),
            StorageSizeSource::Existing => write!(f, "Using existing disk size {}", self.size),
            StorageSizeSource::Default => write!(f, "Using default size {}", self.size),
        }
    }
}

/// Stages the PostgreSQL manifests into the build directory and applies
/// them to the cluster, strictly in order.
pub struct PostgresDeployer {
    client: Box<dyn PostgresKubeClient>,
    source_dir: PathBuf,
    build_dir: PathBuf,
    pvc_name: String,
    storage_size: Option<String>,
}

impl PostgresDeployer {
    pub fn new(
        client: Box<dyn PostgresKubeClient>,
        source_dir: PathBuf,
        build_dir: PathBuf,
        pvc_name: String,
        storage_size: Option<String>,
    ) -> Self {
        Self {
            client,
            source_dir,
            build_dir,
            pvc_name,
            storage_size,
        }
    }

    /// Deploys configmap, deployment and storage, in that order.
    ///
    /// A failure to stage or apply a manifest aborts the run; resources
    /// applied before the failing step stay applied, there is no rollback.
    pub async fn deploy_all(&self) -> Result<(), DeployError> {
        for manifest in &MANIFESTS {
            let src = self.source_dir.join(manifest.file_name);
            let dst = self.build_dir.join(manifest.file_name);

            // The source is read before the size probe runs, so a missing
            // template fails without touching the cluster.
            let mut data = fs::read_to_string(&src)?;
            if manifest.needs_storage_size {
                let resolved = self.resolve_storage_size().await;
                data = substitute_storage_size(&data, &resolved.size);
            }
            fs::write(&dst, &data)?;
            println!("Deploying {}", reported_path(&dst).display());

            self.client.apply_manifest(&dst).await?;
        }
        Ok(())
    }

    /// Capacity of the existing claim, preserved across redeployments.
    ///
    /// Any probe failure falls back to the fixed default; the cause is not
    /// inspected. A missing claim, an unreachable cluster and a claim with
    /// no recorded capacity all count as a first deployment. The resolved
    /// size is reported on stdout from here, once per deployment.
    pub async fn resolve_storage_size(&self) -> ResolvedStorageSize {
        let resolved = if let Some(size) = &self.storage_size {
            ResolvedStorageSize {
                size: size.clone(),
                source: StorageSizeSource::Requested,
            }
        } else {
            match self.client.get_pvc_capacity(&self.pvc_name).await {
                Ok(size) => ResolvedStorageSize {
                    size,
                    source: StorageSizeSource::Existing,
                },
                Err(_) => ResolvedStorageSize {
                    size: DEFAULT_STORAGE_SIZE.to_string(),
                    source: StorageSizeSource::Default,
                },
            }
        };

        println!("{}", resolved);
        resolved
    }
}

/// The destination path as reported, joined onto the working directory
/// when relative. An already absolute path is reported as is.
fn reported_path(path: &Path) -> PathBuf {
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
