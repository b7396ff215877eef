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

//! Viewer slots: the single current artifact of each viewer pane.

use crate::asset::{ArtifactHandle, AssetKind};

/// The artifact currently shown by one viewer.
///
/// A slot holds at most one handle. Installing over an occupied slot drops
/// the previous handle in the same call, so a reader never sees two
/// artifacts or a half-replaced slot.
#[derive(Debug, Clone)]
pub struct ViewerSlot {
    kind: AssetKind,
    current: Option<ArtifactHandle>,
}

impl ViewerSlot {
    /// Creates an empty slot for `kind`.
    pub fn new(kind: AssetKind) -> Self {
        Self {
            kind,
            current: None,
        }
    }

    /// The viewer this slot belongs to.
    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    /// The artifact being shown, if any.
    pub fn get(&self) -> Option<&ArtifactHandle> {
        self.current.as_ref()
    }

    /// Returns `true` if nothing is shown.
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Empties the slot and returns what it held.
    pub fn clear(&mut self) -> Option<ArtifactHandle> {
        self.current.take()
    }

    /// Shows `handle`, dropping whatever was shown before.
    pub fn install(&mut self, handle: ArtifactHandle) {
        if self.current.replace(handle).is_some() {
            log::debug!("Replaced the {} viewer's artifact", self.kind);
        }
    }
}

/// One [`ViewerSlot`] per asset kind.
#[derive(Debug, Clone)]
pub struct ViewerSlots {
    model: ViewerSlot,
    texture: ViewerSlot,
    terrain: ViewerSlot,
}

impl Default for ViewerSlots {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerSlots {
    /// Creates three empty slots.
    pub fn new() -> Self {
        Self {
            model: ViewerSlot::new(AssetKind::Model),
            texture: ViewerSlot::new(AssetKind::Texture),
            terrain: ViewerSlot::new(AssetKind::Terrain),
        }
    }

    /// The slot for `kind`.
    pub fn get(&self, kind: AssetKind) -> &ViewerSlot {
        match kind {
            AssetKind::Model => &self.model,
            AssetKind::Texture => &self.texture,
            AssetKind::Terrain => &self.terrain,
        }
    }

    /// The slot for `kind`, mutably.
    pub fn get_mut(&mut self, kind: AssetKind) -> &mut ViewerSlot {
        match kind {
            AssetKind::Model => &mut self.model,
            AssetKind::Texture => &mut self.texture,
            AssetKind::Terrain => &mut self.terrain,
        }
    }

    /// Iterates the slots in viewer pane order.
    pub fn iter(&self) -> impl Iterator<Item = &ViewerSlot> {
        [&self.model, &self.texture, &self.terrain].into_iter()
    }
}
