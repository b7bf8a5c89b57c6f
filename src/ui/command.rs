//! Command line parsing for the settings view
//!
//! Supports:
//! - `:q` or `:quit` → Quit
//! - `:h` or `:help` → Help
//! - `:s` or `:start` → Start reading
//! - `:wpm 450` → Set the rate
//! - `:size 80` → Set the font size preference
//! - `@notes.txt` → Load a text file
//! - `@@` → Load from clipboard

use crate::app::AppEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Start,
    SetWpm(String),
    SetFontSize(String),
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

/// Parse command line input into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let (name, arg) = match cmd.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (cmd, ""),
        };
        match (name, arg.is_empty()) {
            ("q" | "quit", true) => Command::Quit,
            ("h" | "help", true) => Command::Help,
            ("s" | "start", true) => Command::Start,
            ("wpm", false) => Command::SetWpm(arg.to_string()),
            ("size", false) => Command::SetFontSize(arg.to_string()),
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Start => AppEvent::Start,
        Command::SetWpm(value) => AppEvent::SetWpm(value),
        Command::SetFontSize(value) => AppEvent::SetFontSize(value),
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
