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

use super::{extension_of, ContentProcessor, ProcessError};
use awe_core::{Artifact, CompiledTexture};
use image::{DynamicImage, ImageFormat};
use std::path::Path;

/// Decodes images into RGBA8 textures.
///
/// The format is sniffed from the content first and from the file
/// extension second, so `.dib` bitmaps and misnamed files still decode.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextureProcessor;

impl ContentProcessor for TextureProcessor {
    fn process(&self, source: &Path, bytes: &[u8]) -> Result<Artifact, ProcessError> {
        if bytes.is_empty() {
            return Err(ProcessError::Empty);
        }

        let img = decode(source, bytes)?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(ProcessError::Image(format!(
                "image has no pixels ({width}x{height})"
            )));
        }

        Ok(Artifact::Texture(CompiledTexture {
            width,
            height,
            pixels: rgba.into_raw(),
        }))
    }
}

fn decode(source: &Path, bytes: &[u8]) -> Result<DynamicImage, ProcessError> {
    let guessed = image::guess_format(bytes)
        .ok()
        .or_else(|| ImageFormat::from_extension(extension_of(source)));

    match guessed {
        Some(format) => image::load_from_memory_with_format(bytes, format)
            .map_err(|e| ProcessError::Image(e.to_string())),
        None => Err(ProcessError::Image(format!(
            "cannot decode '.{}' files",
            extension_of(source)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};
    use std::io::Cursor;

    fn encoded(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let img = ImageBuffer::from_pixel(width, height, Rgba([10u8, 20, 30, 255]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), format)
            .unwrap();
        bytes
    }

    #[test]
    fn test_png_to_rgba() {
        let artifact = TextureProcessor
            .process(Path::new("image.png"), &encoded(3, 2, ImageFormat::Png))
            .unwrap();
        let texture = artifact.as_texture().unwrap();

        assert_eq!((texture.width, texture.height), (3, 2));
        assert_eq!(texture.pixels.len(), 3 * 2 * 4);
        assert_eq!(&texture.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_dib_decodes_as_bitmap() {
        let artifact = TextureProcessor
            .process(Path::new("icon.dib"), &encoded(2, 2, ImageFormat::Bmp))
            .unwrap();
        assert!(artifact.as_texture().is_some());
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = TextureProcessor
            .process(Path::new("image.png"), b"definitely not an image")
            .unwrap_err();
        assert!(matches!(err, ProcessError::Image(_)));
    }

    #[test]
    fn test_pfm_has_no_decoder() {
        let err = TextureProcessor
            .process(Path::new("sky.pfm"), b"PF\n1 1\n-1.0\n\0\0\0\0")
            .unwrap_err();
        assert!(err.to_string().contains("pfm"));
    }
}
