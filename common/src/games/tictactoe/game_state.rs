use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use crate::log;
use super::board::is_full;
use super::bot_controller::select_move;
use super::difficulty::Difficulty;
use super::error::MoveError;
use super::types::{Board, GameStatus, Mark, WinningLine, COMPUTER_MARK, HUMAN_MARK};
use super::win_detector::find_winning_line;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Two humans share the board.
    Friend,
    /// Human plays X, the computer plays O.
    #[default]
    Computer,
}

impl GameMode {
    pub fn toggled(&self) -> GameMode {
        match self {
            GameMode::Friend => GameMode::Computer,
            GameMode::Computer => GameMode::Friend,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Friend => f.write_str("friend"),
            GameMode::Computer => f.write_str("computer"),
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "friend" => Ok(GameMode::Friend),
            "computer" | "ai" => Ok(GameMode::Computer),
            other => Err(format!("unknown mode {:?}, expected friend or computer", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub x: u32,
    pub o: u32,
}

impl Scoreboard {
    fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
            Mark::Empty => {}
        }
    }
}

/// One match: the current round's board plus the running score.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub winning_line: Option<WinningLine>,
    pub last_move: Option<usize>,
    pub scores: Scoreboard,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_mark: HUMAN_MARK,
            status: GameStatus::InProgress,
            winning_line: None,
            last_move: None,
            scores: Scoreboard::default(),
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        match self.board.get(index) {
            None => return Err(MoveError::OutOfBounds(index)),
            Some(Mark::Empty) => {}
            Some(_) => return Err(MoveError::CellOccupied(index)),
        }

        self.board = self.board.with_mark(index, self.current_mark);
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::Computer
            && self.current_mark == COMPUTER_MARK
            && self.status == GameStatus::InProgress
    }

    /// Lets the computer pick and play its move. Returns the cell it played.
    pub fn play_computer_turn(
        &mut self,
        difficulty: Difficulty,
        rng: &mut SessionRng,
    ) -> Result<Option<usize>, MoveError> {
        if !self.is_computer_turn() {
            return Err(MoveError::NotComputerTurn);
        }

        let Some(index) = select_move(&self.board, difficulty, rng) else {
            return Ok(None);
        };

        self.place_mark(index)?;
        log!("Computer ({}) played cell {}", difficulty, index);
        Ok(Some(index))
    }

    /// Starts a new round. X always opens.
    pub fn reset_board(&mut self, clear_scores: bool) {
        self.board = Board::new();
        self.current_mark = HUMAN_MARK;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        self.last_move = None;
        if clear_scores {
            self.scores = Scoreboard::default();
        }
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset_board(false);
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    fn check_game_over(&mut self) {
        if let Some(line) = find_winning_line(&self.board) {
            self.status = match line.mark {
                Mark::X => GameStatus::XWon,
                _ => GameStatus::OWon,
            };
            self.winning_line = Some(line);
            self.scores.record_win(line.mark);
            log!("Round over: {} wins, score X {} - O {}", line.mark, self.scores.x, self.scores.o);
            return;
        }

        if is_full(&self.board) {
            self.status = GameStatus::Draw;
            log!("Round over: tie, score X {} - O {}", self.scores.x, self.scores.o);
        }
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
