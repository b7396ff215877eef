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

//! Lists the importable files of a content directory.

use awe_core::AssetKind;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walks `dir` recursively and groups the files the editor can import by
/// the kind their extension implies. Paths are sorted within each group.
///
/// Unreadable entries are skipped. A missing directory yields an empty map.
pub fn scan_content(dir: &Path) -> BTreeMap<AssetKind, Vec<PathBuf>> {
    let mut found: BTreeMap<AssetKind, Vec<PathBuf>> = BTreeMap::new();

    if !dir.is_dir() {
        log::warn!("Content directory '{}' does not exist", dir.display());
        return found;
    }

    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(kind) = AssetKind::from_path(entry.path()) {
            found.entry(kind).or_default().push(entry.into_path());
        }
    }

    for paths in found.values_mut() {
        paths.sort();
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_groups_by_kind() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("models");
        std::fs::create_dir(&nested).unwrap();
        for path in [
            nested.join("cats.fbx"),
            nested.join("tank.X"),
            dir.path().join("b.png"),
            dir.path().join("a.tga"),
            dir.path().join("notes.txt"),
        ] {
            std::fs::write(path, b"").unwrap();
        }

        let found = scan_content(dir.path());

        assert_eq!(found.len(), 2);
        assert_eq!(found[&AssetKind::Model].len(), 2);
        assert_eq!(
            found[&AssetKind::Texture],
            vec![dir.path().join("a.tga"), dir.path().join("b.png")]
        );
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = tempdir().unwrap();
        assert!(scan_content(&dir.path().join("Content")).is_empty());
    }
}
