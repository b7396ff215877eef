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

use awe_core::{AssetBuildRequest, AssetBuilder, AssetKind, AssetStore, ModelFormat};
use awe_io::{ContentBuilder, ContentStore};
use image::{ImageBuffer, Rgba};
use std::error::Error;
use tempfile::tempdir;

#[test]
fn test_built_texture_loads_from_store() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let source = dir.path().join("image.png");
    ImageBuffer::from_pixel(4, 4, Rgba([0u8, 128, 255, 255])).save(&source)?;

    let mut builder = ContentBuilder::new(dir.path().join("intermediate"))?;
    let mut store = ContentStore::new(builder.output_directory());

    builder.clear();
    builder.add(AssetBuildRequest::new(&source, AssetKind::Texture)?);
    assert_eq!(builder.build(), None);

    let handle = store.load("Texture")?;
    let texture = handle.as_texture().expect("texture artifact");
    assert_eq!((texture.width, texture.height), (4, 4));
    assert_eq!(&texture.pixels[..4], &[0, 128, 255, 255]);
    Ok(())
}

#[test]
fn test_built_model_loads_from_store() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let source = dir.path().join("tank.x");
    std::fs::write(&source, b"xof 0302bin 0064\x00\x01")?;

    let mut builder = ContentBuilder::in_directory(dir.path().join("obj"))?;
    let mut store = ContentStore::new(builder.output_directory());

    builder.add(AssetBuildRequest::new(&source, AssetKind::Model)?);
    assert_eq!(builder.build(), None);

    let handle = store.load("Model")?;
    let model = handle.as_model().expect("model artifact");
    assert!(matches!(model.format, ModelFormat::DirectX { version: (3, 2), .. }));
    assert_eq!(model.source_name, "tank.x");
    assert_eq!(model.data.len(), 18);
    Ok(())
}
