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

//! Content processors turn the raw bytes of a source file into an
//! [`Artifact`]. The builder looks them up by the processor name carried in
//! each build request.

mod model;
mod texture;

pub use model::ModelProcessor;
pub use texture::TextureProcessor;

use awe_core::Artifact;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Why a processor rejected a source file.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The source file has no content.
    #[error("file is empty")]
    Empty,
    /// The processor does not handle this kind of file.
    #[error("unsupported file type '{0}'")]
    UnsupportedExtension(String),
    /// The file does not look like the format its extension claims.
    #[error("not a valid {format} file: {reason}")]
    InvalidHeader {
        /// Format implied by the extension.
        format: &'static str,
        /// What did not match.
        reason: String,
    },
    /// The file was recognised but could not be parsed.
    #[error("failed to parse {format} file: {reason}")]
    Parse {
        /// Format being parsed.
        format: &'static str,
        /// Parser message.
        reason: String,
    },
    /// The image could not be decoded.
    #[error("unsupported image format: {0}")]
    Image(String),
}

/// Compiles one source file.
pub trait ContentProcessor: Send + Sync {
    /// Processes `bytes`, read from `source`.
    fn process(&self, source: &Path, bytes: &[u8]) -> Result<Artifact, ProcessError>;
}

/// Processors by name.
pub(crate) struct ProcessorRegistry {
    processors: HashMap<String, Box<dyn ContentProcessor>>,
}

impl ProcessorRegistry {
    /// A registry without any processor.
    pub(crate) fn empty() -> Self {
        Self {
            processors: HashMap::new(),
        }
    }

    /// A registry with the model and texture processors under their
    /// conventional names.
    pub(crate) fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register("ModelProcessor", ModelProcessor);
        registry.register("TextureProcessor", TextureProcessor);
        registry
    }

    /// Registers `processor` under `name`, replacing any previous one.
    pub(crate) fn register(&mut self, name: &str, processor: impl ContentProcessor + 'static) {
        if self
            .processors
            .insert(name.to_string(), Box::new(processor))
            .is_some()
        {
            log::debug!("Processor '{}' was replaced", name);
        }
    }

    pub(crate) fn get(&self, name: &str) -> Option<&dyn ContentProcessor> {
        self.processors.get(name).map(|p| p.as_ref())
    }
}

/// Lowercase extension of `path`, or an empty string.
pub(crate) fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default()
}

/// File name of `path` for display.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
