use common::games::tictactoe::{Difficulty, CELL_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// Board cell, already converted to 0..=8.
    PlaceMark(usize),
    Rematch,
    NewMatch,
    ToggleMode,
    SetDifficulty(Difficulty),
    Help,
    Quit,
}

/// Parses one line of player input. Cells are typed as 1-9, matching the
/// numbers drawn on empty squares.
pub fn parse_command(line: &str) -> Result<ClientCommand, String> {
    let line = line.trim();
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Type a cell number 1-9, or h for help".to_string());
    };

    if let Ok(number) = head.parse::<usize>() {
        if (1..=CELL_COUNT).contains(&number) {
            return Ok(ClientCommand::PlaceMark(number - 1));
        }
        return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
    }

    match head.to_ascii_lowercase().as_str() {
        "r" | "rematch" => Ok(ClientCommand::Rematch),
        "n" | "new" => Ok(ClientCommand::NewMatch),
        "m" | "mode" => Ok(ClientCommand::ToggleMode),
        "h" | "help" | "?" => Ok(ClientCommand::Help),
        "q" | "quit" | "exit" => Ok(ClientCommand::Quit),
        "d" | "difficulty" => {
            let Some(tier) = parts.next() else {
                return Err("Usage: d <easy|medium|hard|insane>".to_string());
            };
            tier.parse::<Difficulty>()
                .map(ClientCommand::SetDifficulty)
                .map_err(|e| e.to_string())
        }
        other => Err(format!("Unknown command: {}", other)),
    }
}
