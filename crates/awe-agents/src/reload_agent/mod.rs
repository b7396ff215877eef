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

//! Drives one asset through build, load and display.
//!
//! A reload cycle always runs in the same order:
//!
//! 1. the target slot is emptied and the store unloads everything it holds;
//! 2. the builder's pending list is reset to exactly the new request;
//! 3. the builder runs;
//! 4. on a clean build the store loads the artifact and the slot shows it,
//!    otherwise the diagnostic is returned and the slot stays empty.
//!
//! Nothing is retried. The coordinator takes `&mut self`, so only one cycle
//! can be in flight per coordinator.

mod coordinator;

pub use coordinator::ReloadCoordinator;
