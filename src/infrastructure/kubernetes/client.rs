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

use crate::infrastructure::constants::FIELD_MANAGER;
use crate::shared::error::DeployError;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{ConfigMap, PersistentVolumeClaim, Service};
use k8s_openapi::NamespaceResourceScope;
use kube::{Api, Client};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::path::Path;

#[async_trait::async_trait]
pub trait PostgresKubeClient: Send + Sync {
    /// Applies every YAML document in a staged manifest file to the cluster.
    async fn apply_manifest(&self, path: &Path) -> Result<(), DeployError>;

    /// Current capacity of a PersistentVolumeClaim, e.g. "10Gi".
    async fn get_pvc_capacity(&self, name: &str) -> Result<String, DeployError>;
}

pub struct PostgresKubeClientImpl {
    client: Client,
    namespace: String,
}

impl PostgresKubeClientImpl {
    pub async fn new(namespace: String) -> Result<Self, DeployError> {
        let client = Client::try_default().await.map_err(|e| {
            DeployError::KubeError(format!("Failed to create Kubernetes client: {}", e))
        })?;

        Ok(Self { client, namespace })
    }

    pub async fn new_with_config(
        namespace: String,
        kubeconfig_path: Option<String>,
        context: Option<String>,
    ) -> Result<Self, DeployError> {
        use kube::config::{KubeConfigOptions, Kubeconfig};

        let kubeconfig = if let Some(path) = kubeconfig_path {
            Kubeconfig::read_from(path)
                .map_err(|e| DeployError::KubeError(format!("Failed to load kubeconfig: {}", e)))?
        } else {
            Kubeconfig::read()
                .map_err(|e| DeployError::KubeError(format!("Failed to load kubeconfig: {}", e)))?
        };

        let config_options = KubeConfigOptions {
            context,
            cluster: None,
            user: None,
        };

        let config = kube::Config::from_custom_kubeconfig(kubeconfig, &config_options)
            .await
            .map_err(|e| {
                DeployError::KubeError(format!("Failed to create Kubernetes config: {}", e))
            })?;

        let client = Client::try_from(config).map_err(|e| {
            DeployError::KubeError(format!("Failed to create Kubernetes client: {}", e))
        })?;

        Ok(Self { client, namespace })
    }

    /// Server-side apply with create-on-404, the same way kubectl apply
    /// converges an existing resource to the manifest.
    async fn apply_namespaced<K>(&self, resource: K) -> Result<(), DeployError>
    where
        K: kube::Resource<Scope = NamespaceResourceScope, DynamicType = ()>
            + Clone
            + Debug
            + Serialize
            + DeserializeOwned,
    {
        let api: Api<K> = Api::namespaced(self.client.clone(), &self.namespace);
        let name = resource.meta().name.clone().ok_or_else(|| {
            DeployError::InvalidResource(format!("{} is missing metadata.name", K::kind(&())))
        })?;

        match api.get(&name).await {
            Ok(_) => {
                let patch_params = kube::api::PatchParams::apply(FIELD_MANAGER).force();
                let patch = serde_json::to_value(&resource)?;
                api.patch(&name, &patch_params, &kube::api::Patch::Apply(patch))
                    .await?;
            }
            Err(kube::Error::Api(ae)) if ae.code == 404 => {
                let pp = kube::api::PostParams::default();
                api.create(&pp, &resource).await?;
            }
            Err(e) => return Err(DeployError::KubeError(e.to_string())),
        }
        Ok(())
    }

    async fn apply_document(&self, doc: serde_yaml::Value) -> Result<(), DeployError> {
        let kind = doc
            .get("kind")
            .and_then(serde_yaml::Value::as_str)
            .unwrap_or_default()
            .to_string();

        tracing::debug!("applying manifest document kind={}", kind);

        match kind.as_str() {
            "ConfigMap" => {
                self.apply_namespaced(serde_yaml::from_value::<ConfigMap>(doc)?)
                    .await
            }
            "Deployment" => {
                self.apply_namespaced(serde_yaml::from_value::<Deployment>(doc)?)
                    .await
            }
            "Service" => {
                self.apply_namespaced(serde_yaml::from_value::<Service>(doc)?)
                    .await
            }
            "PersistentVolumeClaim" => {
                self.apply_namespaced(serde_yaml::from_value::<PersistentVolumeClaim>(doc)?)
                    .await
            }
            "" => Err(DeployError::InvalidResource(
                "manifest document has no kind".to_string(),
            )),
            other => Err(DeployError::InvalidResource(format!(
                "unsupported manifest kind '{}'",
                other
            ))),
        }
    }
}

#[async_trait::async_trait]
impl PostgresKubeClient for PostgresKubeClientImpl {
    async fn apply_manifest(&self, path: &Path) -> Result<(), DeployError> {
        let content = std::fs::read_to_string(path)?;

        let documents = serde_yaml::Deserializer::from_str(&content)
            .map(serde_yaml::Value::deserialize)
            .collect::<Result<Vec<_>, _>>()?;
        for doc in documents {
            if doc.is_null() {
                // blank document between separators
                continue;
            }
            self.apply_document(doc).await?;
        }
        Ok(())
    }

    async fn get_pvc_capacity(&self, name: &str) -> Result<String, DeployError> {
        let api: Api<PersistentVolumeClaim> = Api::namespaced(self.client.clone(), &self.namespace);
        let pvc = api.get(name).await.map_err(|e| {
            if let kube::Error::Api(ae) = e {
                if ae.code == 404 {
                    DeployError::not_found("PersistentVolumeClaim", name, &self.namespace)
                } else {
                    DeployError::KubeError(ae.message)
                }
            } else {
                DeployError::KubeError(e.to_string())
            }
        })?;

        pvc.status
            .and_then(|status| status.capacity)
            .and_then(|mut capacity| capacity.remove("storage"))
            .map(|quantity| quantity.0)
            .ok_or_else(|| {
                DeployError::InvalidResource(format!(
                    "PersistentVolumeClaim '{}' has no recorded storage capacity",
                    name
                ))
            })
    }
}
