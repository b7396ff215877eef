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

//! # Awe Agents
//!
//! The orchestration layer of the editor. [`ReloadCoordinator`] runs the
//! asset reload cycle against any builder and store; [`EditorSession`] is
//! the explicit context object that owns the coordinator, the viewer slots
//! and the terrain importer for the lifetime of the application.

#![warn(missing_docs)]

pub mod reload_agent;
pub mod session;

pub use reload_agent::ReloadCoordinator;
pub use session::{ContentSession, EditorSession};
