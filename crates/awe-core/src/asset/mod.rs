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

//! Primitive asset types shared by the builder, the store and the viewer.
//!
//! The key components are:
//! - The [`Asset`] trait: a marker for every type that can sit behind an
//!   [`AssetHandle`].
//! - [`AssetKind`]: which viewer an asset is meant for, and the naming and
//!   processor conventions that come with it.
//! - [`AssetBuildRequest`]: one validated, immutable unit of build work.
//! - [`Artifact`]: the compiled form of an asset, as produced by a builder
//!   and returned by a store.

mod artifact;
mod handle;
mod kind;
mod request;

pub use artifact::*;
pub use handle::*;
pub use kind::*;
pub use request::*;

/// A marker trait for types that can be managed by the asset system.
///
/// The supertraits keep handles shareable across threads should loading ever
/// move off the calling thread:
/// - `Send` + `Sync`: the asset can be safely shared between threads.
/// - `'static`: the asset holds no borrowed data.
///
/// # Examples
///
/// ```
/// use awe_core::asset::Asset;
///
/// struct Palette {
///     colors: Vec<[u8; 4]>,
/// }
///
/// impl Asset for Palette {}
/// ```
pub trait Asset: Send + Sync + 'static {}

/// A handle to a compiled artifact, the unit viewer slots hold.
pub type ArtifactHandle = AssetHandle<Artifact>;
