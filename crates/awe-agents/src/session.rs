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

//! The editor session: everything the editor keeps between commands.

use crate::reload_agent::ReloadCoordinator;
use awe_core::{
    AssetBuildRequest, AssetBuilder, AssetKind, AssetStore, BuildFailure, BuildResult,
    PendingTerrainImporter, TerrainImporter, ViewerSlot, ViewerSlots,
};
use awe_io::{ContentBuilder, ContentStore};
use std::io;
use std::path::{Path, PathBuf};

/// A session backed by the filesystem builder and store.
pub type ContentSession = EditorSession<ContentBuilder, ContentStore>;

/// The explicit context object of a running editor.
///
/// Owns the reload coordinator (and through it the builder and store), one
/// viewer slot per asset kind, the terrain importer, and the pane the user
/// last worked in. Presentation code issues commands against it and renders
/// the returned [`BuildResult`].
pub struct EditorSession<B: AssetBuilder, S: AssetStore> {
    coordinator: ReloadCoordinator<B, S>,
    slots: ViewerSlots,
    terrain_importer: Box<dyn TerrainImporter>,
    terrain_placeholder: Option<PathBuf>,
    active_pane: Option<AssetKind>,
}

impl ContentSession {
    /// Creates a session whose builder compiles into a per-process
    /// directory below `intermediate_root`.
    pub fn with_content_pipeline(intermediate_root: impl AsRef<Path>) -> io::Result<Self> {
        let builder = ContentBuilder::new(intermediate_root)?;
        let store = ContentStore::new(builder.output_directory());
        Ok(Self::new(ReloadCoordinator::new(builder, store)))
    }
}

impl<B: AssetBuilder, S: AssetStore> EditorSession<B, S> {
    /// Creates a session with empty slots and no terrain support.
    pub fn new(coordinator: ReloadCoordinator<B, S>) -> Self {
        Self {
            coordinator,
            slots: ViewerSlots::new(),
            terrain_importer: Box::new(PendingTerrainImporter),
            terrain_placeholder: None,
            active_pane: None,
        }
    }

    /// Replaces the terrain importer.
    pub fn with_terrain_importer(mut self, importer: impl TerrainImporter + 'static) -> Self {
        self.terrain_importer = Box::new(importer);
        self
    }

    /// Sets the model previewed in the terrain viewer after an import.
    pub fn with_terrain_placeholder(mut self, path: impl Into<PathBuf>) -> Self {
        self.terrain_placeholder = Some(path.into());
        self
    }

    /// Builds `path` as a `kind` asset and shows it in that kind's viewer.
    ///
    /// A path that cannot be turned into a request fails the same way a
    /// build does: the slot is emptied and the reason is returned.
    pub fn load(&mut self, kind: AssetKind, path: impl Into<PathBuf>) -> BuildResult {
        self.active_pane = Some(kind);
        let slot = self.slots.get_mut(kind);

        match AssetBuildRequest::new(path, kind) {
            Ok(request) => self.coordinator.reload(request, slot),
            Err(e) => {
                slot.clear();
                log::warn!("Rejected {} import: {}", kind, e);
                BuildResult::Failure(BuildFailure::new(e.to_string()))
            }
        }
    }

    /// Shorthand for [`load`](Self::load) with [`AssetKind::Model`].
    pub fn load_model(&mut self, path: impl Into<PathBuf>) -> BuildResult {
        self.load(AssetKind::Model, path)
    }

    /// Shorthand for [`load`](Self::load) with [`AssetKind::Texture`].
    pub fn load_texture(&mut self, path: impl Into<PathBuf>) -> BuildResult {
        self.load(AssetKind::Texture, path)
    }

    /// Runs the terrain importer, then previews the terrain placeholder
    /// model in the terrain viewer.
    pub fn import_terrain(&mut self) -> BuildResult {
        self.active_pane = Some(AssetKind::Terrain);

        let slot = self.slots.get_mut(AssetKind::Terrain);
        if let Err(failure) = self.terrain_importer.import_terrain(slot) {
            log::warn!("Terrain import failed: {}", failure);
            slot.clear();
            return BuildResult::Failure(failure);
        }

        match self.terrain_placeholder.clone() {
            Some(placeholder) => self.load(AssetKind::Terrain, placeholder),
            None => {
                self.slots.get_mut(AssetKind::Terrain).clear();
                BuildResult::Failure(BuildFailure::new(
                    "No terrain placeholder model is configured",
                ))
            }
        }
    }

    /// All viewer slots.
    pub fn slots(&self) -> &ViewerSlots {
        &self.slots
    }

    /// The slot of one viewer.
    pub fn slot(&self, kind: AssetKind) -> &ViewerSlot {
        self.slots.get(kind)
    }

    /// The viewer pane the last command targeted.
    pub fn active_pane(&self) -> Option<AssetKind> {
        self.active_pane
    }

    /// The coordinator, for inspection.
    pub fn coordinator(&self) -> &ReloadCoordinator<B, S> {
        &self.coordinator
    }

    /// The configured terrain placeholder.
    pub fn terrain_placeholder(&self) -> Option<&Path> {
        self.terrain_placeholder.as_deref()
    }
}
