// Copyright 2025 eraflo
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

//! A cache of compiled artifacts, keyed by logical name.

use crate::artifact_file::{self, artifact_path};
use awe_core::{ArtifactHandle, AssetHandle, AssetStore, LoadError};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Loads `.awb` files from a directory and caches the handles.
///
/// Loading the same logical name twice returns the same handle until
/// [`AssetStore::unload_all`] is called.
pub struct ContentStore {
    root: PathBuf,
    loaded: HashMap<String, ArtifactHandle>,
}

impl ContentStore {
    /// Creates a store reading artifacts from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            loaded: HashMap::new(),
        }
    }

    /// Directory artifacts are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of artifacts currently cached.
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    /// Returns `true` if `logical_name` is cached.
    pub fn is_loaded(&self, logical_name: &str) -> bool {
        self.loaded.contains_key(logical_name)
    }
}

impl AssetStore for ContentStore {
    fn unload_all(&mut self) {
        if !self.loaded.is_empty() {
            log::debug!("Unloading {} artifact(s)", self.loaded.len());
        }
        self.loaded.clear();
    }

    fn load(&mut self, logical_name: &str) -> Result<ArtifactHandle, LoadError> {
        if let Some(handle) = self.loaded.get(logical_name) {
            return Ok(handle.clone());
        }

        let path = artifact_path(&self.root, logical_name);
        let bytes = std::fs::read(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                LoadError::NotFound {
                    name: logical_name.to_string(),
                }
            } else {
                LoadError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        let artifact = artifact_file::decode(&bytes).map_err(|e| LoadError::Corrupt {
            name: logical_name.to_string(),
            reason: e.to_string(),
        })?;

        let handle = AssetHandle::new(artifact);
        self.loaded
            .insert(logical_name.to_string(), handle.clone());
        log::debug!("Loaded '{}' from {}", logical_name, path.display());

        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awe_core::{Artifact, CompiledTexture};
    use tempfile::tempdir;

    fn write_texture(dir: &Path, name: &str, width: u32) {
        let artifact = Artifact::Texture(CompiledTexture {
            width,
            height: 1,
            pixels: vec![0; width as usize * 4],
        });
        let bytes = artifact_file::encode(&artifact).unwrap();
        std::fs::write(artifact_path(dir, name), bytes).unwrap();
    }

    #[test]
    fn test_load_is_cached_until_unload() {
        let dir = tempdir().unwrap();
        write_texture(dir.path(), "Texture", 2);
        let mut store = ContentStore::new(dir.path());

        let first = store.load("Texture").unwrap();
        let second = store.load("Texture").unwrap();
        assert!(AssetHandle::ptr_eq(&first, &second));
        assert_eq!(store.loaded_count(), 1);

        store.unload_all();
        assert!(!store.is_loaded("Texture"));
        let third = store.load("Texture").unwrap();
        assert!(!AssetHandle::ptr_eq(&first, &third));
        // Handles given out before the unload stay usable.
        assert_eq!(first.as_texture().unwrap().width, 2);
    }

    #[test]
    fn test_missing_artifact() {
        let dir = tempdir().unwrap();
        let mut store = ContentStore::new(dir.path());
        assert!(matches!(
            store.load("Model"),
            Err(LoadError::NotFound { name }) if name == "Model"
        ));
    }

    #[test]
    fn test_corrupt_artifact() {
        let dir = tempdir().unwrap();
        std::fs::write(artifact_path(dir.path(), "Model"), b"XNBw").unwrap();
        let mut store = ContentStore::new(dir.path());

        let err = store.load("Model").unwrap_err();
        assert!(matches!(err, LoadError::Corrupt { .. }));
        assert!(err.to_string().contains("not a compiled asset file"));
        assert_eq!(store.loaded_count(), 0);
    }
}
