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

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Source extensions the model picker offers.
pub const MODEL_EXTENSIONS: &[&str] = &["fbx", "x", "obj"];

/// Source extensions the image picker offers.
pub const TEXTURE_EXTENSIONS: &[&str] = &[
    "bmp", "dds", "dib", "hdr", "jpg", "jpeg", "pfm", "png", "ppm", "tga",
];

/// Which viewer an asset is built for.
///
/// The kind decides the logical name a build is stored under and the
/// processor that compiles it. Terrain previews go through the model
/// processor and share the model's logical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AssetKind {
    /// A 3D model (`.fbx`, `.x`, `.obj`).
    Model,
    /// A 2D image.
    Texture,
    /// A voxel terrain, previewed as a model.
    Terrain,
}

impl AssetKind {
    /// Every kind, in viewer pane order.
    pub const ALL: [AssetKind; 3] = [AssetKind::Model, AssetKind::Texture, AssetKind::Terrain];

    /// The key the compiled artifact is stored and loaded under.
    pub fn logical_name(self) -> &'static str {
        match self {
            AssetKind::Model | AssetKind::Terrain => "Model",
            AssetKind::Texture => "Texture",
        }
    }

    /// The processor a builder should run for this kind.
    pub fn processor(self) -> &'static str {
        match self {
            AssetKind::Model | AssetKind::Terrain => "ModelProcessor",
            AssetKind::Texture => "TextureProcessor",
        }
    }

    /// Extensions (lowercase, without the dot) offered when picking a source.
    ///
    /// Terrain has no known source format yet, so the slice is empty and any
    /// file may be chosen.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            AssetKind::Model => MODEL_EXTENSIONS,
            AssetKind::Texture => TEXTURE_EXTENSIONS,
            AssetKind::Terrain => &[],
        }
    }

    /// Title of the file picker for this kind.
    pub fn dialog_title(self) -> &'static str {
        match self {
            AssetKind::Model => "Load Model",
            AssetKind::Texture => "Import Image",
            AssetKind::Terrain => "Import Voxel Terrain",
        }
    }

    /// Guesses the kind of a source file from its extension.
    ///
    /// Only model and texture sources can be recognised this way.
    pub fn from_path(path: &Path) -> Option<AssetKind> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if MODEL_EXTENSIONS.contains(&ext.as_str()) {
            Some(AssetKind::Model)
        } else if TEXTURE_EXTENSIONS.contains(&ext.as_str()) {
            Some(AssetKind::Texture)
        } else {
            None
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetKind::Model => "model",
            AssetKind::Texture => "texture",
            AssetKind::Terrain => "terrain",
        };
        f.write_str(name)
    }
}
