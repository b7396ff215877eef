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

//! The on-disk format of compiled artifacts.
//!
//! An `.awb` file is a 4-byte magic, a little-endian `u16` format version,
//! and the [`Artifact`] encoded with `bincode`'s standard configuration.

use awe_core::Artifact;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File extension of compiled artifacts.
pub const EXTENSION: &str = "awb";

const MAGIC: &[u8; 4] = b"AWB\0";
const FORMAT_VERSION: u16 = 1;
const HEADER_LEN: usize = MAGIC.len() + 2;

/// Errors raised while encoding or decoding an artifact file.
#[derive(Debug, Error)]
pub enum ArtifactFileError {
    /// The bytes do not start with the artifact magic.
    #[error("not a compiled asset file")]
    BadMagic,
    /// The file was written by an incompatible version.
    #[error("unsupported compiled asset version {0} (expected {expected})", expected = FORMAT_VERSION)]
    UnsupportedVersion(u16),
    /// The payload could not be encoded.
    #[error("failed to encode artifact: {0}")]
    Encode(#[from] bincode::error::EncodeError),
    /// The payload could not be decoded.
    #[error("failed to decode artifact: {0}")]
    Decode(#[from] bincode::error::DecodeError),
    /// Bytes were left over after the payload.
    #[error("{0} trailing bytes after the artifact payload")]
    TrailingBytes(usize),
}

/// Where the artifact built under `logical_name` lives inside `dir`.
pub fn artifact_path(dir: &Path, logical_name: &str) -> PathBuf {
    dir.join(format!("{logical_name}.{EXTENSION}"))
}

/// Serializes an artifact, header included.
pub fn encode(artifact: &Artifact) -> Result<Vec<u8>, ArtifactFileError> {
    let config = bincode::config::standard();
    let payload = bincode::serde::encode_to_vec(artifact, config)?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(MAGIC);
    bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Parses bytes produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<Artifact, ArtifactFileError> {
    if bytes.len() < HEADER_LEN || &bytes[..MAGIC.len()] != MAGIC {
        return Err(ArtifactFileError::BadMagic);
    }

    let version = u16::from_le_bytes([bytes[4], bytes[5]]);
    if version != FORMAT_VERSION {
        return Err(ArtifactFileError::UnsupportedVersion(version));
    }

    let config = bincode::config::standard();
    let payload = &bytes[HEADER_LEN..];
    let (artifact, read): (Artifact, usize) =
        bincode::serde::decode_from_slice(payload, config)?;

    if read != payload.len() {
        return Err(ArtifactFileError::TrailingBytes(payload.len() - read));
    }
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use awe_core::{CompiledModel, ModelFormat};

    fn sample() -> Artifact {
        Artifact::Model(CompiledModel {
            format: ModelFormat::FbxBinary { version: 7400 },
            source_name: "cats.fbx".to_string(),
            data: vec![1, 2, 3],
            vertex_count: None,
            face_count: None,
        })
    }

    #[test]
    fn test_decode_encoded() {
        let bytes = encode(&sample()).unwrap();
        assert_eq!(&bytes[..4], MAGIC);
        assert_eq!(decode(&bytes).unwrap(), sample());
    }

    #[test]
    fn test_rejects_foreign_bytes() {
        assert!(matches!(
            decode(b"XNBw\x05\x00"),
            Err(ArtifactFileError::BadMagic)
        ));
        assert!(matches!(decode(b"AW"), Err(ArtifactFileError::BadMagic)));
    }

    #[test]
    fn test_rejects_future_version() {
        let mut bytes = encode(&sample()).unwrap();
        bytes[4] = 9;
        assert!(matches!(
            decode(&bytes),
            Err(ArtifactFileError::UnsupportedVersion(9))
        ));
    }

    #[test]
    fn test_rejects_truncated_payload() {
        let bytes = encode(&sample()).unwrap();
        assert!(matches!(
            decode(&bytes[..bytes.len() - 2]),
            Err(ArtifactFileError::Decode(_))
        ));
    }

    #[test]
    fn test_artifact_path() {
        let path = artifact_path(Path::new("obj"), "Model");
        assert_eq!(path, Path::new("obj").join("Model.awb"));
    }
}
