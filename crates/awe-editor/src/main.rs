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

//! Awe editor: previews models, textures and terrain by rebuilding them
//! through the content pipeline.

mod commands;
mod config;
mod dialogs;
mod shell;

use anyhow::{Context, Result};
use awe_agents::ContentSession;
use awe_core::AssetKind;
use clap::{Parser, Subcommand};
use commands::Outcome;
use config::EditorConfig;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "awe-editor", version, about = "Preview models, textures and terrain assets")]
struct Cli {
    /// Configuration file (defaults to ./Awe.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import a model (.fbx, .x, .obj). Opens a file dialog without PATH.
    Model { path: Option<PathBuf> },
    /// Import an image. Opens a file dialog without PATH.
    Texture { path: Option<PathBuf> },
    /// Import voxel terrain.
    Terrain,
    /// List importable files in the content directory.
    List,
    /// Run an interactive session (the default).
    Shell,
}

fn open_session(config: &EditorConfig) -> Result<ContentSession> {
    let session = ContentSession::with_content_pipeline(&config.intermediate_directory)
        .with_context(|| {
            format!(
                "Failed to create intermediate directory under '{}'",
                config.intermediate_directory.display()
            )
        })?;

    Ok(match config.terrain_placeholder_path() {
        Some(placeholder) => session.with_terrain_placeholder(placeholder),
        None => session,
    })
}

fn main() -> Result<ExitCode> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = EditorConfig::load(cli.config.as_deref())?;
    let command = cli.command.unwrap_or(Command::Shell);

    let outcome = match command {
        Command::Model { path } => {
            let mut session = open_session(&config)?;
            commands::import(&mut session, &config, AssetKind::Model, path)
        }
        Command::Texture { path } => {
            let mut session = open_session(&config)?;
            commands::import(&mut session, &config, AssetKind::Texture, path)
        }
        Command::Terrain => commands::import_terrain(&mut open_session(&config)?, false),
        Command::List => {
            commands::print_listing(&config.content_directory);
            Outcome::Shown
        }
        Command::Shell => shell::run(&mut open_session(&config)?, &config)?,
    };

    Ok(match outcome {
        Outcome::Failed => ExitCode::FAILURE,
        Outcome::Shown | Outcome::Cancelled => ExitCode::SUCCESS,
    })
}
