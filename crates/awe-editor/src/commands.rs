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

//! Presentation of editor commands: picking files, running them through
//! the session, and reporting the outcome.

use crate::config::EditorConfig;
use crate::dialogs;
use awe_agents::ContentSession;
use awe_core::{AssetKind, BuildResult};
use std::path::{Path, PathBuf};

/// How a command ended, from the user's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The asset is on screen.
    Shown,
    /// The build failed and the diagnostic was reported.
    Failed,
    /// The user dismissed the file picker. Nothing happened.
    Cancelled,
}

/// Imports a model or texture. Without a `path` a file dialog opens.
pub fn import(
    session: &mut ContentSession,
    config: &EditorConfig,
    kind: AssetKind,
    path: Option<PathBuf>,
) -> Outcome {
    let (path, from_dialog) = match path {
        Some(path) => (path, false),
        None => match dialogs::pick_source(kind, &config.content_directory) {
            Some(path) => (path, true),
            None => {
                log::info!("{} dialog cancelled", kind.dialog_title());
                return Outcome::Cancelled;
            }
        },
    };

    let result = session.load(kind, path);
    report(kind, &result, from_dialog)
}

/// Runs the terrain import command. A failure also raises the error message
/// box when `show_dialog` is set.
pub fn import_terrain(session: &mut ContentSession, show_dialog: bool) -> Outcome {
    let result = session.import_terrain();
    report(AssetKind::Terrain, &result, show_dialog)
}

fn report(kind: AssetKind, result: &BuildResult, show_dialog: bool) -> Outcome {
    match result {
        BuildResult::Success(handle) => {
            println!("{kind} viewer: {}", **handle);
            Outcome::Shown
        }
        BuildResult::Failure(failure) => {
            eprintln!("Error: {failure}");
            if show_dialog {
                dialogs::show_error(failure.message());
            }
            Outcome::Failed
        }
    }
}

/// Prints what each viewer pane currently shows.
pub fn print_status(session: &ContentSession) {
    match session.active_pane() {
        Some(kind) => println!("Active pane: {kind}"),
        None => println!("Active pane: none"),
    }
    for slot in session.slots().iter() {
        match slot.get() {
            Some(handle) => println!("  {:<8} {}", slot.kind().to_string(), **handle),
            None => println!("  {:<8} (empty)", slot.kind().to_string()),
        }
    }
}

/// Prints the importable files of the content directory.
pub fn print_listing(content_dir: &Path) {
    let found = awe_io::scan_content(content_dir);
    if found.is_empty() {
        println!("No importable content in '{}'", content_dir.display());
        return;
    }
    for (kind, paths) in found {
        println!("{kind} ({}):", paths.len());
        for path in paths {
            let shown = path.strip_prefix(content_dir).unwrap_or(&path);
            println!("  {}", shown.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_terrain_without_placeholder_is_reported_as_failed() {
        let dir = tempdir().unwrap();
        let mut session = ContentSession::with_content_pipeline(dir.path()).unwrap();

        assert_eq!(import_terrain(&mut session, false), Outcome::Failed);
        assert!(session.slot(AssetKind::Terrain).is_empty());
    }
}
