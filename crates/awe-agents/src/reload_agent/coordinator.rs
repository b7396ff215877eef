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

use awe_core::{AssetBuildRequest, AssetBuilder, AssetStore, BuildFailure, BuildResult, ViewerSlot};
use std::time::Instant;

/// Runs reload cycles against a builder and a store it owns.
pub struct ReloadCoordinator<B: AssetBuilder, S: AssetStore> {
    builder: B,
    store: S,
    cycles: u64,
}

impl<B: AssetBuilder, S: AssetStore> ReloadCoordinator<B, S> {
    /// Creates a coordinator owning both collaborators.
    pub fn new(builder: B, store: S) -> Self {
        Self {
            builder,
            store,
            cycles: 0,
        }
    }

    /// Rebuilds `request` and shows the result in `target`.
    ///
    /// `target` is emptied before anything is built, so on failure it holds
    /// nothing. Artifacts shown in other slots are not affected: the store
    /// only drops its own references.
    pub fn reload(&mut self, request: AssetBuildRequest, target: &mut ViewerSlot) -> BuildResult {
        self.cycles += 1;
        let cycle = self.cycles;
        let started = Instant::now();

        log::info!(
            "Reload #{}: '{}' -> {} viewer ({})",
            cycle,
            request.source_path().display(),
            target.kind(),
            request.processor()
        );

        target.clear();
        self.store.unload_all();

        let logical_name = request.logical_name().to_string();
        self.builder.clear();
        self.builder.add(request);

        // An empty diagnostic means the build succeeded.
        if let Some(diagnostic) = self.builder.build().filter(|d| !d.is_empty()) {
            return self.fail(cycle, started, BuildFailure::new(diagnostic));
        }

        match self.store.load(&logical_name) {
            Ok(handle) => {
                target.install(handle.clone());
                log::info!(
                    "Reload #{} finished in {:.2?}: {}",
                    cycle,
                    started.elapsed(),
                    *handle
                );
                BuildResult::Success(handle)
            }
            Err(e) => self.fail(cycle, started, BuildFailure::new(e.to_string())),
        }
    }

    fn fail(&self, cycle: u64, started: Instant, failure: BuildFailure) -> BuildResult {
        log::warn!(
            "Reload #{} failed after {:.2?}: {}",
            cycle,
            started.elapsed(),
            failure
        );
        BuildResult::Failure(failure)
    }

    /// Number of cycles run so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// The builder.
    pub fn builder(&self) -> &B {
        &self.builder
    }

    /// The store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Gives the collaborators back.
    pub fn into_parts(self) -> (B, S) {
        (self.builder, self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use awe_core::{
        Artifact, ArtifactHandle, AssetHandle, AssetKind, CompiledTexture, LoadError,
    };
    use std::cell::RefCell;
    use std::rc::Rc;

    type Journal = Rc<RefCell<Vec<String>>>;

    struct FakeBuilder {
        journal: Journal,
        diagnostic: Option<String>,
    }

    impl AssetBuilder for FakeBuilder {
        fn clear(&mut self) {
            self.journal.borrow_mut().push("builder.clear".into());
        }

        fn add(&mut self, request: AssetBuildRequest) {
            self.journal
                .borrow_mut()
                .push(format!("builder.add {}", request.logical_name()));
        }

        fn build(&mut self) -> Option<String> {
            self.journal.borrow_mut().push("builder.build".into());
            self.diagnostic.clone()
        }
    }

    struct FakeStore {
        journal: Journal,
        missing: bool,
    }

    impl AssetStore for FakeStore {
        fn unload_all(&mut self) {
            self.journal.borrow_mut().push("store.unload_all".into());
        }

        fn load(&mut self, logical_name: &str) -> Result<ArtifactHandle, LoadError> {
            self.journal
                .borrow_mut()
                .push(format!("store.load {logical_name}"));
            if self.missing {
                return Err(LoadError::NotFound {
                    name: logical_name.to_string(),
                });
            }
            Ok(AssetHandle::new(Artifact::Texture(CompiledTexture {
                width: 1,
                height: 1,
                pixels: vec![0; 4],
            })))
        }
    }

    fn coordinator(
        diagnostic: Option<&str>,
        missing: bool,
    ) -> (ReloadCoordinator<FakeBuilder, FakeStore>, Journal) {
        let journal = Journal::default();
        let builder = FakeBuilder {
            journal: journal.clone(),
            diagnostic: diagnostic.map(str::to_string),
        };
        let store = FakeStore {
            journal: journal.clone(),
            missing,
        };
        (ReloadCoordinator::new(builder, store), journal)
    }

    fn request(dir: &tempfile::TempDir) -> AssetBuildRequest {
        let path = dir.path().join("image.png");
        std::fs::write(&path, b"png").unwrap();
        AssetBuildRequest::new(path, AssetKind::Texture).unwrap()
    }

    #[test]
    fn test_cycle_order_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let (mut coordinator, journal) = coordinator(None, false);
        let mut slot = ViewerSlot::new(AssetKind::Texture);

        let result = coordinator.reload(request(&dir), &mut slot);

        assert!(result.is_success());
        assert!(!slot.is_empty());
        assert_eq!(
            *journal.borrow(),
            vec![
                "store.unload_all",
                "builder.clear",
                "builder.add Texture",
                "builder.build",
                "store.load Texture",
            ]
        );
        assert_eq!(coordinator.cycles(), 1);
    }

    #[test]
    fn test_build_diagnostic_skips_load() {
        let dir = tempfile::tempdir().unwrap();
        let (mut coordinator, journal) = coordinator(Some("bad header"), false);
        let mut slot = ViewerSlot::new(AssetKind::Texture);

        let result = coordinator.reload(request(&dir), &mut slot);

        assert_eq!(result.failure().unwrap().message(), "bad header");
        assert!(slot.is_empty());
        assert!(!journal.borrow().iter().any(|e| e.starts_with("store.load")));
    }

    #[test]
    fn test_failure_clears_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let (mut ok, _) = coordinator(None, false);
        let mut slot = ViewerSlot::new(AssetKind::Texture);
        assert!(ok.reload(request(&dir), &mut slot).is_success());

        let (mut failing, _) = coordinator(Some("corrupt"), false);
        let result = failing.reload(request(&dir), &mut slot);

        assert!(!result.is_success());
        assert!(slot.is_empty());
    }

    #[test]
    fn test_load_error_becomes_failure() {
        let dir = tempfile::tempdir().unwrap();
        let (mut coordinator, _) = coordinator(None, true);
        let mut slot = ViewerSlot::new(AssetKind::Texture);

        let result = coordinator.reload(request(&dir), &mut slot);

        let message = result.failure().unwrap().message().to_string();
        assert!(message.contains("No compiled asset named 'Texture'"));
        assert!(slot.is_empty());
    }

    #[test]
    fn test_empty_diagnostic_counts_as_success() {
        let dir = tempfile::tempdir().unwrap();
        let (mut coordinator, journal) = coordinator(Some(""), false);
        let mut slot = ViewerSlot::new(AssetKind::Texture);

        let result = coordinator.reload(request(&dir), &mut slot);

        assert!(result.is_success());
        assert_eq!(journal.borrow().last().unwrap(), "store.load Texture");
    }
}
