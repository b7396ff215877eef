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

//! The filesystem content builder.

use crate::artifact_file::{self, artifact_path};
use crate::processor::{ContentProcessor, ProcessorRegistry};
use awe_core::{AssetBuildRequest, AssetBuilder};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Numbers the builders created by [`ContentBuilder::new`] in this process.
static NEXT_BUILDER: AtomicUsize = AtomicUsize::new(0);

/// Compiles build requests into `.awb` files in an output directory.
///
/// Requests are queued with [`AssetBuilder::add`] and compiled together by
/// [`AssetBuilder::build`]. Every failed request contributes one line to the
/// returned diagnostic; the others are still written.
pub struct ContentBuilder {
    output_dir: PathBuf,
    remove_on_drop: bool,
    pending: Vec<AssetBuildRequest>,
    processors: ProcessorRegistry,
}

impl ContentBuilder {
    /// Creates a builder writing into `<intermediate_root>/<pid>/<n>`, where
    /// `n` is unique to this builder within the process. The directory is
    /// deleted when the builder is dropped.
    pub fn new(intermediate_root: impl AsRef<Path>) -> io::Result<Self> {
        let output_dir = intermediate_root
            .as_ref()
            .join(std::process::id().to_string())
            .join(NEXT_BUILDER.fetch_add(1, Ordering::Relaxed).to_string());
        let mut builder = Self::in_directory(output_dir)?;
        builder.remove_on_drop = true;
        Ok(builder)
    }

    /// Creates a builder writing directly into `output_dir`, which is kept
    /// when the builder is dropped.
    pub fn in_directory(output_dir: impl Into<PathBuf>) -> io::Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        log::debug!("Content builder output: {}", output_dir.display());

        Ok(Self {
            output_dir,
            remove_on_drop: false,
            pending: Vec::new(),
            processors: ProcessorRegistry::with_defaults(),
        })
    }

    /// Creates a builder without the default processors.
    pub fn without_default_processors(mut self) -> Self {
        self.processors = ProcessorRegistry::empty();
        self
    }

    /// Registers a processor under `name`, replacing any previous one.
    pub fn register_processor(
        &mut self,
        name: &str,
        processor: impl ContentProcessor + 'static,
    ) -> &mut Self {
        self.processors.register(name, processor);
        self
    }

    /// Directory compiled artifacts are written to. Point a
    /// [`ContentStore`](crate::ContentStore) here to load them.
    pub fn output_directory(&self) -> &Path {
        &self.output_dir
    }

    /// Requests waiting for the next build.
    pub fn pending(&self) -> &[AssetBuildRequest] {
        &self.pending
    }

    fn build_one(&self, request: &AssetBuildRequest) -> Result<PathBuf, String> {
        let name = request.logical_name();
        if !is_plain_name(name) {
            return Err(format!("invalid logical name '{name}'"));
        }

        let target = artifact_path(&self.output_dir, name);
        // A failed build must not leave an older artifact loadable.
        match fs::remove_file(&target) {
            Ok(()) => log::debug!("Removed stale {}", target.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(format!("cannot replace '{}': {e}", target.display())),
        }

        let processor = self
            .processors
            .get(request.processor())
            .ok_or_else(|| format!("unknown processor '{}'", request.processor()))?;

        let source = request.source_path();
        let bytes = fs::read(source).map_err(|e| format!("cannot read source: {e}"))?;
        let artifact = processor
            .process(source, &bytes)
            .map_err(|e| e.to_string())?;
        let encoded = artifact_file::encode(&artifact).map_err(|e| e.to_string())?;

        fs::write(&target, encoded)
            .map_err(|e| format!("cannot write '{}': {e}", target.display()))?;
        Ok(target)
    }
}

impl AssetBuilder for ContentBuilder {
    fn clear(&mut self) {
        self.pending.clear();
    }

    fn add(&mut self, request: AssetBuildRequest) {
        log::debug!(
            "Queued '{}' as '{}' with {}",
            request.source_path().display(),
            request.logical_name(),
            request.processor()
        );
        self.pending.push(request);
    }

    fn build(&mut self) -> Option<String> {
        let mut errors = Vec::new();

        for request in &self.pending {
            match self.build_one(request) {
                Ok(target) => log::info!(
                    "Built '{}' -> {}",
                    request.source_path().display(),
                    target.display()
                ),
                Err(reason) => {
                    errors.push(format!("{}: {reason}", request.source_path().display()))
                }
            }
        }

        if errors.is_empty() {
            None
        } else {
            Some(errors.join("\n"))
        }
    }
}

impl Drop for ContentBuilder {
    fn drop(&mut self) {
        if !self.remove_on_drop {
            return;
        }
        if let Err(e) = fs::remove_dir_all(&self.output_dir) {
            if e.kind() != io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to remove intermediate directory '{}': {}",
                    self.output_dir.display(),
                    e
                );
            }
        }
    }
}

/// A logical name must map to a single file inside the output directory.
fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', ':'])
}
