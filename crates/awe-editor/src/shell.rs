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

//! The interactive editor session.

use crate::commands::{self, Outcome};
use crate::config::EditorConfig;
use anyhow::Result;
use awe_agents::ContentSession;
use awe_core::AssetKind;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const HELP: &str = "\
Commands:
  model [path]     import a model (opens a file dialog without a path)
  texture [path]   import an image
  terrain          import voxel terrain
  list             list importable content
  status           show what each viewer holds
  help             show this message
  exit             quit";

#[derive(Debug, PartialEq)]
enum ShellCommand {
    Import(AssetKind, Option<PathBuf>),
    Terrain,
    List,
    Status,
    Help,
    Exit,
}

fn parse(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    // Paths may contain spaces; the rest of the line is the path.
    let path = (!rest.is_empty()).then(|| PathBuf::from(rest.trim_matches('"')));
    let no_args = |command: ShellCommand| {
        if rest.is_empty() {
            Ok(Some(command))
        } else {
            Err(format!("'{word}' takes no arguments"))
        }
    };

    match word.to_ascii_lowercase().as_str() {
        "model" => Ok(Some(ShellCommand::Import(AssetKind::Model, path))),
        "texture" | "image" => Ok(Some(ShellCommand::Import(AssetKind::Texture, path))),
        "terrain" => no_args(ShellCommand::Terrain),
        "list" => no_args(ShellCommand::List),
        "status" => no_args(ShellCommand::Status),
        "help" | "?" => no_args(ShellCommand::Help),
        "exit" | "quit" => no_args(ShellCommand::Exit),
        other => Err(format!("unknown command '{other}', try 'help'")),
    }
}

/// Reads commands from stdin until `exit` or end of input.
pub fn run(session: &mut ContentSession, config: &EditorConfig) -> Result<Outcome> {
    println!("{HELP}");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("awe> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };

        match parse(&line?) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Import(kind, path))) => {
                commands::import(session, config, kind, path);
            }
            Ok(Some(ShellCommand::Terrain)) => {
                commands::import_terrain(session, true);
            }
            Ok(Some(ShellCommand::List)) => commands::print_listing(&config.content_directory),
            Ok(Some(ShellCommand::Status)) => commands::print_status(session),
            Ok(Some(ShellCommand::Help)) => println!("{HELP}"),
            Ok(Some(ShellCommand::Exit)) => break,
            Err(message) => eprintln!("{message}"),
        }
    }

    Ok(Outcome::Shown)
}
