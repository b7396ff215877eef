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

//! # Awe IO
//!
//! Filesystem-backed collaborators for the asset reload cycle:
//!
//! - [`ContentBuilder`] compiles source files into `.awb` artifacts inside an
//!   intermediate directory, dispatching each request to a named
//!   [`ContentProcessor`].
//! - [`ContentStore`] loads those artifacts back by logical name and caches
//!   the handles until it is told to unload.
//! - [`scan_content`] lists the importable files of a content directory.

#![warn(missing_docs)]

pub mod artifact_file;
pub mod builder;
pub mod processor;
pub mod scan;
pub mod store;

pub use builder::ContentBuilder;
pub use processor::{ContentProcessor, ModelProcessor, ProcessError, TextureProcessor};
pub use scan::scan_content;
pub use store::ContentStore;
