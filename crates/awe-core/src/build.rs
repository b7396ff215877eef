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

//! Build outcomes and the contracts of the two collaborators the reload
//! cycle drives: an [`AssetBuilder`] that compiles sources and an
//! [`AssetStore`] that hands out compiled artifacts by logical name.

use crate::asset::{ArtifactHandle, AssetBuildRequest};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A failed build cycle, carrying the diagnostic shown to the user.
///
/// The message is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BuildFailure {
    message: String,
}

impl BuildFailure {
    const NO_DIAGNOSTIC: &'static str = "Build failed without a diagnostic";

    /// Wraps a diagnostic. Blank input is replaced by a generic message.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self {
                message: Self::NO_DIAGNOSTIC.to_string(),
            }
        } else {
            Self { message }
        }
    }

    /// The diagnostic, verbatim.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of one reload cycle.
#[derive(Debug, Clone)]
pub enum BuildResult {
    /// The artifact was built, loaded, and installed.
    Success(ArtifactHandle),
    /// Building or loading failed; the target slot was left empty.
    Failure(BuildFailure),
}

impl BuildResult {
    /// Returns `true` for [`BuildResult::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, BuildResult::Success(_))
    }

    /// The installed artifact, if the cycle succeeded.
    pub fn artifact(&self) -> Option<&ArtifactHandle> {
        match self {
            BuildResult::Success(handle) => Some(handle),
            BuildResult::Failure(_) => None,
        }
    }

    /// The diagnostic, if the cycle failed.
    pub fn failure(&self) -> Option<&BuildFailure> {
        match self {
            BuildResult::Success(_) => None,
            BuildResult::Failure(failure) => Some(failure),
        }
    }

    /// Converts into a `Result` for callers that want `?`.
    pub fn into_result(self) -> Result<ArtifactHandle, BuildFailure> {
        match self {
            BuildResult::Success(handle) => Ok(handle),
            BuildResult::Failure(failure) => Err(failure),
        }
    }
}

impl fmt::Display for BuildResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildResult::Success(handle) => write!(f, "loaded {}", **handle),
            BuildResult::Failure(failure) => write!(f, "failed: {failure}"),
        }
    }
}

/// Why a store could not produce an artifact.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Nothing has been built under this logical name.
    #[error("No compiled asset named '{name}'")]
    NotFound {
        /// The requested logical name.
        name: String,
    },
    /// The compiled file exists but could not be read.
    #[error("Failed to read compiled asset '{}': {source}", .path.display())]
    Io {
        /// Path of the compiled file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The compiled file could not be decoded.
    #[error("Compiled asset '{name}' is corrupt: {reason}")]
    Corrupt {
        /// The requested logical name.
        name: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// Compiles source files into artifacts a matching [`AssetStore`] can load.
///
/// A builder keeps a list of pending requests between [`clear`] and
/// [`build`]; building does not consume the list.
///
/// [`clear`]: AssetBuilder::clear
/// [`build`]: AssetBuilder::build
pub trait AssetBuilder {
    /// Drops every pending request.
    fn clear(&mut self);

    /// Queues a request for the next [`build`](AssetBuilder::build).
    fn add(&mut self, request: AssetBuildRequest);

    /// Builds every pending request.
    ///
    /// Returns `None` on success, or the diagnostic text of the failure.
    fn build(&mut self) -> Option<String>;
}

/// Loads compiled artifacts by logical name.
pub trait AssetStore {
    /// Forgets every artifact this store has handed out.
    ///
    /// Handles already held elsewhere stay valid; the store only drops its
    /// own references.
    fn unload_all(&mut self);

    /// Loads the artifact built under `logical_name`.
    fn load(&mut self, logical_name: &str) -> Result<ArtifactHandle, LoadError>;
}

impl<B: AssetBuilder + ?Sized> AssetBuilder for Box<B> {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn add(&mut self, request: AssetBuildRequest) {
        (**self).add(request)
    }

    fn build(&mut self) -> Option<String> {
        (**self).build()
    }
}

impl<S: AssetStore + ?Sized> AssetStore for Box<S> {
    fn unload_all(&mut self) {
        (**self).unload_all()
    }

    fn load(&mut self, logical_name: &str) -> Result<ArtifactHandle, LoadError> {
        (**self).load(logical_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{Artifact, AssetHandle, CompiledTexture};

    #[test]
    fn test_blank_diagnostic_is_replaced() {
        assert_eq!(
            BuildFailure::new("   ").message(),
            BuildFailure::NO_DIAGNOSTIC
        );
        assert_eq!(BuildFailure::new("boom").message(), "boom");
    }

    #[test]
    fn test_result_accessors() {
        let handle = AssetHandle::new(Artifact::Texture(CompiledTexture {
            width: 1,
            height: 1,
            pixels: vec![0; 4],
        }));
        let ok = BuildResult::Success(handle);
        assert!(ok.is_success());
        assert!(ok.artifact().is_some());
        assert!(ok.failure().is_none());

        let err = BuildResult::Failure(BuildFailure::new("bad header"));
        assert!(!err.is_success());
        assert_eq!(err.failure().map(BuildFailure::message), Some("bad header"));
        assert_eq!(err.into_result().unwrap_err().to_string(), "bad header");
    }
}
