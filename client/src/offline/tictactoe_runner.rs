use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, GameMode, MoveError, TicTacToeGameState};
use common::log;

use crate::state::{parse_command, ClientCommand};
use crate::ui::{help_text, render_screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub bot_delay_ms: u64,
}

/// Runs matches until the player quits or input ends.
///
/// Returns the mode and difficulty in effect at exit so they can be saved.
pub fn run_tictactoe_game<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: RunnerSettings,
    rng: &mut SessionRng,
) -> io::Result<RunnerSettings> {
    let mut settings = settings;
    let mut state = TicTacToeGameState::new(settings.mode);

    log!(
        "Starting match: mode {}, difficulty {}, seed {}",
        settings.mode,
        settings.difficulty,
        rng.seed()
    );
    writeln!(output, "{}", help_text())?;

    loop {
        if state.is_computer_turn() {
            if settings.bot_delay_ms > 0 {
                thread::sleep(Duration::from_millis(settings.bot_delay_ms));
            }
            if let Err(e) = state.play_computer_turn(settings.difficulty, rng) {
                log!("Computer could not move: {}", e);
            }
            continue;
        }

        write!(output, "{}> ", render_screen(&state, settings.difficulty))?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            ClientCommand::PlaceMark(index) => {
                match state.place_mark(index) {
                    Ok(()) => {}
                    Err(MoveError::CellOccupied(index)) => {
                        writeln!(output, "Cell {} is already taken", index + 1)?;
                    }
                    Err(e) => writeln!(output, "{}", e)?,
                }
            }
            ClientCommand::Rematch => state.reset_board(false),
            ClientCommand::NewMatch => state.reset_board(true),
            ClientCommand::ToggleMode => {
                settings.mode = state.mode.toggled();
                state.set_mode(settings.mode);
                log!("Mode switched to {}", settings.mode);
            }
            ClientCommand::SetDifficulty(difficulty) => {
                settings.difficulty = difficulty;
                log!("Difficulty set to {}", difficulty);
            }
            ClientCommand::Help => writeln!(output, "{}", help_text())?,
            ClientCommand::Quit => break,
        }
    }

    log!(
        "Match finished: X {} - O {}",
        state.scores.x,
        state.scores.o
    );
    Ok(settings)
}
