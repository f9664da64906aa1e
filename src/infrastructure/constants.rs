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

/// Target namespace
pub const DEFAULT_NAMESPACE: &str = "assisted-installer";

/// PersistentVolumeClaim backing the PostgreSQL data directory
pub const PVC_NAME: &str = "postgres-pv-claim";

/// Storage sizing
pub const DEFAULT_STORAGE_SIZE: &str = "10Gi";
pub const STORAGE_PLACEHOLDER: &str = "REPLACE_STORAGE";

/// Manifest directories, relative to the working directory
pub const SOURCE_DIR: &str = "deploy/postgres";
pub const BUILD_DIR: &str = "build";

/// Manifest file names, in apply order
pub const MANIFEST_CONFIGMAP: &str = "postgres-configmap.yaml";
pub const MANIFEST_DEPLOYMENT: &str = "postgres-deployment.yaml";
pub const MANIFEST_STORAGE: &str = "postgres-storage.yaml";

/// Field manager for server-side apply
pub const FIELD_MANAGER: &str = "postgres-kube";
