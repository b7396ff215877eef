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

use super::{display_name, extension_of, ContentProcessor, ProcessError};
use awe_core::{Artifact, CompiledModel, DirectXEncoding, ModelFormat};
use std::io::Cursor;
use std::path::Path;

const FBX_BINARY_MAGIC: &[u8] = b"Kaydara FBX Binary  \0";
const FBX_BINARY_HEADER_LEN: usize = 27;
const FBX_ASCII_PREFIX: &str = "; FBX";
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

const X_MAGIC: &[u8] = b"xof ";
const X_HEADER_LEN: usize = 16;

/// Validates and packages model sources.
///
/// FBX and DirectX files are checked against their headers and stored as-is;
/// OBJ files are parsed and triangulated so vertex and face counts are known.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModelProcessor;

impl ContentProcessor for ModelProcessor {
    fn process(&self, source: &Path, bytes: &[u8]) -> Result<Artifact, ProcessError> {
        if bytes.is_empty() {
            return Err(ProcessError::Empty);
        }

        let (format, vertex_count, face_count) = match extension_of(source).as_str() {
            "fbx" => (parse_fbx_header(bytes)?, None, None),
            "x" => (parse_x_header(bytes)?, None, None),
            "obj" => {
                let (vertices, faces) = count_obj(bytes)?;
                (ModelFormat::Obj, Some(vertices), Some(faces))
            }
            other => return Err(ProcessError::UnsupportedExtension(other.to_string())),
        };

        log::debug!("{} recognised as {}", source.display(), format);

        Ok(Artifact::Model(CompiledModel {
            format,
            source_name: display_name(source),
            data: bytes.to_vec(),
            vertex_count,
            face_count,
        }))
    }
}

fn parse_fbx_header(bytes: &[u8]) -> Result<ModelFormat, ProcessError> {
    if bytes.starts_with(FBX_BINARY_MAGIC) {
        if bytes.len() < FBX_BINARY_HEADER_LEN {
            return Err(invalid_fbx("binary header is truncated"));
        }
        if bytes[21..23] != [0x1A, 0x00] {
            return Err(invalid_fbx("binary header is malformed"));
        }
        let version = u32::from_le_bytes([bytes[23], bytes[24], bytes[25], bytes[26]]);
        return Ok(ModelFormat::FbxBinary { version });
    }

    let text = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let head = &text[..text.len().min(256)];
    let head = String::from_utf8_lossy(head);
    if head.trim_start().starts_with(FBX_ASCII_PREFIX) {
        return Ok(ModelFormat::FbxAscii);
    }

    Err(invalid_fbx("missing FBX header"))
}

fn invalid_fbx(reason: &str) -> ProcessError {
    ProcessError::InvalidHeader {
        format: "FBX",
        reason: reason.to_string(),
    }
}

fn parse_x_header(bytes: &[u8]) -> Result<ModelFormat, ProcessError> {
    let invalid = |reason: &str| ProcessError::InvalidHeader {
        format: "DirectX",
        reason: reason.to_string(),
    };

    if bytes.len() < X_HEADER_LEN || !bytes.starts_with(X_MAGIC) {
        return Err(invalid("missing 'xof' header"));
    }

    let digits = |range: std::ops::Range<usize>| -> Option<u8> {
        std::str::from_utf8(&bytes[range]).ok()?.parse().ok()
    };
    let major = digits(4..6).ok_or_else(|| invalid("bad major version"))?;
    let minor = digits(6..8).ok_or_else(|| invalid("bad minor version"))?;

    let encoding = match &bytes[8..12] {
        b"txt " => DirectXEncoding::Text,
        b"bin " => DirectXEncoding::Binary,
        b"tzip" => DirectXEncoding::CompressedText,
        b"bzip" => DirectXEncoding::CompressedBinary,
        _ => return Err(invalid("unknown encoding")),
    };

    match &bytes[12..16] {
        b"0032" | b"0064" => {}
        _ => return Err(invalid("unknown float size")),
    }

    Ok(ModelFormat::DirectX {
        version: (major, minor),
        encoding,
    })
}

fn count_obj(bytes: &[u8]) -> Result<(u32, u32), ProcessError> {
    let parse_err = |reason: String| ProcessError::Parse {
        format: "OBJ",
        reason,
    };

    let (models, _materials) = tobj::load_obj_buf(
        &mut Cursor::new(bytes),
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
        // Material libraries are not part of the build.
        |_| Err(tobj::LoadError::OpenFileFailed),
    )
    .map_err(|e| parse_err(e.to_string()))?;

    if models.is_empty() {
        return Err(parse_err("no models found".to_string()));
    }

    let mut vertices = 0usize;
    let mut faces = 0usize;
    for model in &models {
        vertices += model.mesh.positions.len() / 3;
        faces += model.mesh.indices.len() / 3;
    }

    if vertices == 0 {
        return Err(parse_err("no vertices found".to_string()));
    }

    let to_u32 = |n: usize| u32::try_from(n).map_err(|_| parse_err("mesh is too large".into()));
    Ok((to_u32(vertices)?, to_u32(faces)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fbx_binary(version: u32) -> Vec<u8> {
        let mut bytes = FBX_BINARY_MAGIC.to_vec();
        bytes.extend_from_slice(&[0x1A, 0x00]);
        bytes.extend_from_slice(&version.to_le_bytes());
        bytes.extend_from_slice(&[0; 13]);
        bytes
    }

    fn process(name: &str, bytes: &[u8]) -> Result<CompiledModel, ProcessError> {
        match ModelProcessor.process(Path::new(name), bytes)? {
            Artifact::Model(model) => Ok(model),
            Artifact::Texture(_) => panic!("model processor produced a texture"),
        }
    }

    #[test]
    fn test_binary_fbx() {
        let model = process("cats.fbx", &fbx_binary(7400)).unwrap();
        assert_eq!(model.format, ModelFormat::FbxBinary { version: 7400 });
        assert_eq!(model.source_name, "cats.fbx");
        assert_eq!(model.vertex_count, None);
    }

    #[test]
    fn test_ascii_fbx_with_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"; FBX 6.1.0 project file\n; ----\n");
        let model = process("Cats.FBX", &bytes).unwrap();
        assert_eq!(model.format, ModelFormat::FbxAscii);
    }

    #[test]
    fn test_corrupt_fbx() {
        let err = process("corrupt.fbx", b"\x89PNG garbage").unwrap_err();
        assert!(err.to_string().contains("not a valid FBX file"));

        let mut truncated = fbx_binary(7400);
        truncated.truncate(24);
        assert!(process("short.fbx", &truncated).is_err());
    }

    #[test]
    fn test_directx_header() {
        let model = process("tank.x", b"xof 0303txt 0032\ntemplate Vector {}").unwrap();
        assert_eq!(
            model.format,
            ModelFormat::DirectX {
                version: (3, 3),
                encoding: DirectXEncoding::Text
            }
        );

        assert!(process("tank.x", b"xof 0302zzzz0032").is_err());
        assert!(process("tank.x", b"xof 0302bin 0016").is_err());
        assert!(process("tank.x", b"xof").is_err());
    }

    #[test]
    fn test_obj_counts() {
        let obj = b"v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let model = process("quad.obj", obj).unwrap();
        assert_eq!(model.format, ModelFormat::Obj);
        assert_eq!(model.vertex_count, Some(4));
        assert_eq!(model.face_count, Some(2));
    }

    #[test]
    fn test_rejects_empty_and_unknown() {
        assert!(matches!(process("cats.fbx", b""), Err(ProcessError::Empty)));
        assert!(matches!(
            process("cats.blend", b"BLENDER"),
            Err(ProcessError::UnsupportedExtension(ext)) if ext == "blend"
        ));
    }
}
