//! Replay scripts that drive the paint engine without a window.
//!
//! A script is a plain text file with one command per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! tool rectangle
//! color #ff0000
//! size 5
//! down 100 100
//! move 200 150
//! up 200 150
//! tool text
//! down 40 40
//! type Hello
//! key enter
//! undo
//! clear
//! save
//! ```
//!
//! Every `save` writes `paint-<epoch_ms>.png` to the export directory. A script
//! that never saves gets one implicit save at the end.

use crate::draw::Color;
use crate::export::{ExportConfig, save_png};
use crate::input::{Key, PaintEngine, PointerEvent, PointerKind, Tool};
use log::{debug, error, info};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),
}

/// A single script command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Tool(Tool),
    Color(Color),
    Size(u32),
    Pointer(PointerEvent),
    /// Types each character into the open text entry
    Type(String),
    Key(Key),
    Undo,
    Clear,
    Save,
}

impl Command {
    /// Parses one non-empty, non-comment line.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_start();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest));
        let arg = rest.trim();

        let command = match word.to_lowercase().as_str() {
            "tool" => Command::Tool(arg.parse()?),
            "color" => Command::Color(arg.parse().map_err(|e| format!("{e}"))?),
            "size" => Command::Size(
                arg.parse()
                    .map_err(|_| format!("Invalid brush size: '{arg}'"))?,
            ),
            "down" => Command::Pointer(parse_pointer(PointerKind::Down, arg)?),
            "move" => Command::Pointer(parse_pointer(PointerKind::Move, arg)?),
            "up" => Command::Pointer(parse_pointer(PointerKind::Up, arg)?),
            "leave" => Command::Pointer(parse_pointer(PointerKind::Leave, arg)?),
            "type" => Command::Type(rest.trim_end().to_string()),
            "key" => Command::Key(parse_key(arg)?),
            "undo" => Command::Undo,
            "clear" => Command::Clear,
            "save" => Command::Save,
            other => return Err(format!("Unknown command: '{other}'")),
        };

        if matches!(command, Command::Undo | Command::Clear | Command::Save) && !arg.is_empty() {
            return Err(format!("'{word}' takes no arguments"));
        }

        Ok(command)
    }
}

fn parse_pointer(kind: PointerKind, arg: &str) -> Result<PointerEvent, String> {
    let mut parts = arg.split_whitespace();
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("Expected '<x> <y>', got '{arg}'"));
    };
    let coord = |s: &str| {
        s.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("Invalid coordinate: '{s}'"))
    };
    Ok(PointerEvent::new(kind, coord(x)?, coord(y)?))
}

fn parse_key(arg: &str) -> Result<Key, String> {
    match arg.to_lowercase().as_str() {
        "enter" | "return" => Ok(Key::Return),
        "backspace" => Ok(Key::Backspace),
        "escape" | "esc" => Ok(Key::Escape),
        _ => {
            let mut chars = arg.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Key::Char(c)),
                _ => Err(format!("Unknown key: '{arg}'")),
            }
        }
    }
}

/// Parses a whole script. Line numbers in errors are 1-based.
pub fn parse(source: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let command = Command::parse(raw).map_err(|message| ScriptError::Parse {
            line: index + 1,
            message,
        })?;
        commands.push(command);
    }
    Ok(commands)
}

/// Reads and parses a script file.
pub fn load(path: &Path) -> Result<Vec<Command>, ScriptError> {
    let source = fs::read_to_string(path)?;
    let commands = parse(&source)?;
    info!(
        "Loaded {} command(s) from {}",
        commands.len(),
        path.display()
    );
    Ok(commands)
}

/// Outcome of a replay.
#[derive(Debug, Default)]
pub struct ReplayReport {
    /// Files written by successful saves, in order
    pub saved: Vec<PathBuf>,
    /// Saves that failed (already logged)
    pub failed_saves: usize,
}

/// Applies a single command to the engine.
///
/// Returns true for `save`, which the caller performs.
fn apply(engine: &mut PaintEngine, command: &Command) -> bool {
    match command {
        Command::Tool(tool) => engine.set_tool(*tool),
        Command::Color(color) => engine.set_color(*color),
        Command::Size(size) => engine.set_brush_size(*size),
        Command::Pointer(event) => engine.handle_pointer_event(*event),
        Command::Type(text) => {
            for c in text.chars() {
                if !engine.on_key_press(Key::Char(c)) {
                    debug!("No open text entry, ignoring typed text");
                    break;
                }
            }
        }
        Command::Key(key) => {
            if !engine.on_key_press(*key) {
                debug!("No open text entry, ignoring {key:?}");
            }
        }
        Command::Undo => {
            engine.undo();
        }
        Command::Clear => engine.clear(),
        Command::Save => return true,
    }
    false
}

/// Saves the canvas, logging instead of failing.
fn save(engine: &PaintEngine, export: &ExportConfig, report: &mut ReplayReport) {
    match engine
        .export_png()
        .and_then(|bytes| save_png(&bytes, export))
    {
        Ok(path) => {
            println!("Saved {}", path.display());
            report.saved.push(path);
        }
        Err(err) => {
            error!("Export failed: {err}");
            report.failed_saves += 1;
        }
    }
}

/// Runs every command against the engine, saving on each `save` and once at
/// the end when the script never saved.
pub fn run(engine: &mut PaintEngine, commands: &[Command], export: &ExportConfig) -> ReplayReport {
    let mut report = ReplayReport::default();
    let mut save_requested = false;

    for command in commands {
        if apply(engine, command) {
            save_requested = true;
            save(engine, export, &mut report);
        }
    }

    if !save_requested {
        debug!("Script did not save, saving final canvas");
        save(engine, export, &mut report);
    }

    info!(
        "Replay finished: {} command(s), {} file(s) saved",
        commands.len(),
        report.saved.len()
    );
    report
}
