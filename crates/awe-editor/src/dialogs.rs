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

//! Native file pickers and message boxes.

use awe_core::AssetKind;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::{Path, PathBuf};

/// A named group of extensions shown in a file picker.
pub type FileFilter = (&'static str, &'static [&'static str]);

const ALL_FILES: FileFilter = ("All Files (*.*)", &["*"]);

const MODEL_FILTERS: &[FileFilter] = &[
    ("Model Files (*.fbx;*.x)", &["fbx", "x"]),
    ("FBX Files (*.fbx)", &["fbx"]),
    ("X Files (*.x)", &["x"]),
    ("Wavefront OBJ (*.obj)", &["obj"]),
    ALL_FILES,
];

const IMAGE_FILTERS: &[FileFilter] = &[
    (
        "Image Files (*.bmp;*.dds;*.dib;*.hdr;*.jpg;*.pfm;*.png;*.ppm;*.tga)",
        &["bmp", "dds", "dib", "hdr", "jpg", "jpeg", "pfm", "png", "ppm", "tga"],
    ),
    ("Bitmap (*.bmp)", &["bmp"]),
    ("Portable Network Graphic (*.png)", &["png"]),
    ALL_FILES,
];

/// Filter groups offered when picking a source of `kind`, most specific
/// first.
pub fn filters(kind: AssetKind) -> &'static [FileFilter] {
    match kind {
        AssetKind::Model => MODEL_FILTERS,
        AssetKind::Texture => IMAGE_FILTERS,
        AssetKind::Terrain => &[ALL_FILES],
    }
}

/// Asks the user for a source file. `None` means the dialog was cancelled.
pub fn pick_source(kind: AssetKind, start_dir: &Path) -> Option<PathBuf> {
    let mut dialog = FileDialog::new().set_title(kind.dialog_title());
    if start_dir.is_dir() {
        dialog = dialog.set_directory(start_dir);
    }
    for &(name, extensions) in filters(kind) {
        dialog = dialog.add_filter(name, extensions);
    }
    dialog.pick_file()
}

/// Shows a build diagnostic in a modal error box.
pub fn show_error(message: &str) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Error")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
