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

//! Editor configuration, read from `Awe.toml`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "Awe.toml";

/// Editor settings read from `Awe.toml`. Keys left out of the file keep
/// their [`Default`] value; unknown keys are rejected.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Where file dialogs start and `list` looks for content.
    pub content_directory: PathBuf,

    /// Root of the builder's intermediate cache. Each builder compiles into
    /// its own `<pid>/<n>` subdirectory.
    pub intermediate_directory: PathBuf,

    /// Model previewed in the terrain viewer after a terrain import,
    /// relative to `content_directory` unless absolute.
    pub terrain_placeholder: Option<PathBuf>,
}

impl Default for EditorConfig {
    /// The defaults used when no `Awe.toml` is present.
    fn default() -> Self {
        Self {
            content_directory: PathBuf::from("Content"),
            intermediate_directory: std::env::temp_dir().join("awe-editor"),
            terrain_placeholder: Some(PathBuf::from("cats.fbx")),
        }
    }
}

impl EditorConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, `Awe.toml` in the working
    /// directory is used if present, and the defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    log::info!("No '{}' found. Using default configuration.", path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        log::info!("Loading configuration from '{}'", path.display());
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at '{}'", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse TOML from '{}'", path.display()))
    }

    /// The terrain placeholder, resolved against the content directory.
    pub fn terrain_placeholder_path(&self) -> Option<PathBuf> {
        self.terrain_placeholder
            .as_ref()
            .map(|p| self.content_directory.join(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Awe.toml");
        fs::write(&path, "content_directory = \"assets\"\n").unwrap();

        let config = EditorConfig::load(Some(&path)).unwrap();

        assert_eq!(config.content_directory, PathBuf::from("assets"));
        assert_eq!(
            config.intermediate_directory,
            EditorConfig::default().intermediate_directory
        );
        assert_eq!(
            config.terrain_placeholder_path(),
            Some(PathBuf::from("assets").join("cats.fbx"))
        );
    }

    #[test]
    fn test_absolute_placeholder_wins() {
        let dir = tempdir().unwrap();
        let placeholder = dir.path().join("terrain.fbx");
        let config = EditorConfig {
            terrain_placeholder: Some(placeholder.clone()),
            ..EditorConfig::default()
        };
        assert_eq!(config.terrain_placeholder_path(), Some(placeholder));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = EditorConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Awe.toml");
        fs::write(&path, "content_dir = \"typo\"\n").unwrap();
        assert!(EditorConfig::load(Some(&path)).is_err());
    }
}
