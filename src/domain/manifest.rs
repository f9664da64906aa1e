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

use crate::infrastructure::constants::{
    MANIFEST_CONFIGMAP, MANIFEST_DEPLOYMENT, MANIFEST_STORAGE, STORAGE_PLACEHOLDER,
};

/// Descriptor for one manifest in the fixed deployment set.
#[derive(Debug, Clone, Copy)]
pub struct ManifestSpec {
    pub name: &'static str,
    pub file_name: &'static str,
    pub needs_storage_size: bool,
}

/// The three PostgreSQL manifests, in the order they are applied.
pub const MANIFESTS: [ManifestSpec; 3] = [
    ManifestSpec {
        name: "configmap",
        file_name: MANIFEST_CONFIGMAP,
        needs_storage_size: false,
    },
    ManifestSpec {
        name: "deployment",
        file_name: MANIFEST_DEPLOYMENT,
        needs_storage_size: false,
    },
    ManifestSpec {
        name: "storage",
        file_name: MANIFEST_STORAGE,
        needs_storage_size: true,
    },
];

/// Stamps the storage size into every `REPLACE_STORAGE` site.
///
/// A template without the placeholder passes through verbatim; this is a
/// literal string replace, not templating.
pub fn substitute_storage_size(data: &str, size: &str) -> String {
    data.replace(STORAGE_PLACEHOLDER, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_order() {
        let names: Vec<&str> = MANIFESTS.iter().map(|m| m.name).collect();
        assert_eq!(names, ["configmap", "deployment", "storage"]);
        assert!(MANIFESTS
            .iter()
            .all(|m| m.needs_storage_size == (m.name == "storage")));
    }

    #[test]
    fn test_substitute_replaces_every_placeholder() {
        let data = "storage: REPLACE_STORAGE\nlimit: REPLACE_STORAGE\n";
        assert_eq!(
            substitute_storage_size(data, "5Gi"),
            "storage: 5Gi\nlimit: 5Gi\n"
        );
    }

    #[test]
    fn test_substitute_without_placeholder_is_noop() {
        let data = "kind: PersistentVolumeClaim\n";
        assert_eq!(substitute_storage_size(data, "5Gi"), data);
    }
}
