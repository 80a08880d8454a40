//! Command-line input: `@path`, `@@`, `:q` and friends.

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

/// Parses one line of command input.
///
/// - `:q` / `:quit` quits, `:h` / `:help` shows key help
/// - `@path` loads a file, `@@` (or a bare `@`) loads the clipboard
pub fn parse(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(name) = input.strip_prefix(':') {
        return match name {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            _ => Command::Unknown(input.to_string()),
        };
    }

    if let Some(rest) = input.strip_prefix('@') {
        let path = rest.trim();
        return if path.is_empty() || path == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(path.to_string())
        };
    }

    Command::Unknown(input.to_string())
}
