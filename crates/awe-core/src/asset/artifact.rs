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

use super::Asset;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the body of a DirectX `.x` file is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectXEncoding {
    /// `txt `
    Text,
    /// `bin `
    Binary,
    /// `tzip`, MSZip-compressed text.
    CompressedText,
    /// `bzip`, MSZip-compressed binary.
    CompressedBinary,
}

/// Container format a model was compiled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelFormat {
    /// Binary FBX, with the version number from its header (e.g. 7400).
    FbxBinary {
        /// Version stored in the file header.
        version: u32,
    },
    /// ASCII FBX.
    FbxAscii,
    /// DirectX `.x` file.
    DirectX {
        /// Major/minor version from the header, e.g. `(3, 2)`.
        version: (u8, u8),
        /// Body encoding.
        encoding: DirectXEncoding,
    },
    /// Wavefront OBJ.
    Obj,
}

impl fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelFormat::FbxBinary { version } => write!(f, "FBX binary {version}"),
            ModelFormat::FbxAscii => f.write_str("FBX ascii"),
            ModelFormat::DirectX { version, encoding } => {
                write!(f, "DirectX {}.{} ({:?})", version.0, version.1, encoding)
            }
            ModelFormat::Obj => f.write_str("Wavefront OBJ"),
        }
    }
}

/// A model packaged by the model processor.
///
/// `data` is the validated source payload. Vertex and face counts are only
/// known for formats the processor can actually parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledModel {
    /// Container format of the source.
    pub format: ModelFormat,
    /// File name of the source, for display.
    pub source_name: String,
    /// Validated source bytes.
    pub data: Vec<u8>,
    /// Vertex count, when the format was parsed.
    pub vertex_count: Option<u32>,
    /// Triangle count, when the format was parsed.
    pub face_count: Option<u32>,
}

/// A texture decoded to tightly packed RGBA8, row major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledTexture {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

/// The compiled, loadable form of an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Artifact {
    /// Output of the model processor.
    Model(CompiledModel),
    /// Output of the texture processor.
    Texture(CompiledTexture),
}

impl Asset for Artifact {}

impl Artifact {
    /// Returns the model, if this artifact is one.
    pub fn as_model(&self) -> Option<&CompiledModel> {
        match self {
            Artifact::Model(model) => Some(model),
            Artifact::Texture(_) => None,
        }
    }

    /// Returns the texture, if this artifact is one.
    pub fn as_texture(&self) -> Option<&CompiledTexture> {
        match self {
            Artifact::Texture(texture) => Some(texture),
            Artifact::Model(_) => None,
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::Model(model) => {
                write!(f, "{} [{}]", model.source_name, model.format)?;
                if let (Some(vertices), Some(faces)) = (model.vertex_count, model.face_count) {
                    write!(f, " {vertices} vertices, {faces} faces")?;
                }
                Ok(())
            }
            Artifact::Texture(texture) => {
                write!(f, "texture {}x{}", texture.width, texture.height)
            }
        }
    }
}
