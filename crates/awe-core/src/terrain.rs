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

//! The voxel terrain import seam.
//!
//! No terrain source format is supported yet. The trait marks where an
//! importer plugs in; the session runs it before previewing terrain.

use crate::build::BuildFailure;
use crate::viewer::ViewerSlot;

/// Populates the terrain viewer from a voxel terrain source.
pub trait TerrainImporter {
    /// Imports terrain into `target`.
    fn import_terrain(&mut self, target: &mut ViewerSlot) -> Result<(), BuildFailure>;
}

/// Stand-in importer used until a voxel format is supported.
///
/// Leaves the slot untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct PendingTerrainImporter;

impl TerrainImporter for PendingTerrainImporter {
    fn import_terrain(&mut self, target: &mut ViewerSlot) -> Result<(), BuildFailure> {
        log::warn!(
            "Voxel terrain import is not available yet; the {} viewer keeps its current content",
            target.kind()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetKind;

    #[test]
    fn test_pending_importer_leaves_slot_alone() {
        let mut slot = ViewerSlot::new(AssetKind::Terrain);
        PendingTerrainImporter.import_terrain(&mut slot).unwrap();
        assert!(slot.is_empty());
    }
}
