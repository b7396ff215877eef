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

use super::AssetKind;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a build request could not be created.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The source path does not name an existing file.
    #[error("Source file '{}' does not exist", .path.display())]
    NotFound {
        /// The offending path.
        path: PathBuf,
    },
    /// The source path names something other than a regular file.
    #[error("Source path '{}' is not a file", .path.display())]
    NotAFile {
        /// The offending path.
        path: PathBuf,
    },
    /// The source file exists but cannot be opened for reading.
    #[error("Source file '{}' is not readable: {source}", .path.display())]
    Unreadable {
        /// The offending path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// A logical name or processor name was empty.
    #[error("The {field} of a build request cannot be empty")]
    EmptyField {
        /// Which field was empty.
        field: &'static str,
    },
}

/// One pending asset build.
///
/// Requests are immutable once created: the fields are private and the
/// `with_*` methods consume the request and return a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBuildRequest {
    source_path: PathBuf,
    logical_name: String,
    kind: AssetKind,
    processor: String,
}

impl AssetBuildRequest {
    /// Creates a request for `path`, using the logical name and processor
    /// conventions of `kind`.
    ///
    /// Fails if the path does not reference an existing, readable file.
    pub fn new(path: impl Into<PathBuf>, kind: AssetKind) -> Result<Self, RequestError> {
        let source_path = path.into();
        validate_source(&source_path)?;

        Ok(Self {
            source_path,
            logical_name: kind.logical_name().to_string(),
            kind,
            processor: kind.processor().to_string(),
        })
    }

    /// Returns the same request, built by another processor.
    pub fn with_processor(self, processor: impl Into<String>) -> Result<Self, RequestError> {
        let processor = processor.into();
        if processor.trim().is_empty() {
            return Err(RequestError::EmptyField { field: "processor" });
        }
        Ok(Self { processor, ..self })
    }

    /// Returns the same request, stored under another logical name.
    pub fn with_logical_name(self, name: impl Into<String>) -> Result<Self, RequestError> {
        let logical_name = name.into();
        if logical_name.trim().is_empty() {
            return Err(RequestError::EmptyField {
                field: "logical name",
            });
        }
        Ok(Self {
            logical_name,
            ..self
        })
    }

    /// The file to build.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// The key the compiled artifact will be loaded by.
    pub fn logical_name(&self) -> &str {
        &self.logical_name
    }

    /// The viewer this asset is meant for.
    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    /// Name of the processor that compiles the source.
    pub fn processor(&self) -> &str {
        &self.processor
    }
}

fn validate_source(path: &Path) -> Result<(), RequestError> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(RequestError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(RequestError::Unreadable {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if !metadata.is_file() {
        return Err(RequestError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    File::open(path).map_err(|source| RequestError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
