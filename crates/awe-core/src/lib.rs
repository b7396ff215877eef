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

//! # Awe Core
//!
//! Foundational crate containing the asset types, viewer slots and the
//! collaborator contracts the asset reload cycle is written against.
//!
//! Nothing in here knows how a source file is compiled or where compiled
//! artifacts live on disk; concrete collaborators are provided by `awe-io`.

#![warn(missing_docs)]

pub mod asset;
pub mod build;
pub mod terrain;
pub mod viewer;

pub use asset::{
    Artifact, ArtifactHandle, Asset, AssetBuildRequest, AssetHandle, AssetKind, CompiledModel,
    CompiledTexture, DirectXEncoding, ModelFormat, RequestError,
};
pub use build::{AssetBuilder, AssetStore, BuildFailure, BuildResult, LoadError};
pub use terrain::{PendingTerrainImporter, TerrainImporter};
pub use viewer::{ViewerSlot, ViewerSlots};
