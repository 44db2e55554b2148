//! Fixed 3x3 tic-tac-toe: win detection, the difficulty-tiered computer
//! opponent, and the per-match bookkeeping a front end needs.
//!
//! Everything here is synchronous and free of global state. Randomness comes
//! in through an explicit [`crate::games::SessionRng`].

mod board;
mod bot_controller;
mod difficulty;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{available_corners, available_moves, is_full};
pub use bot_controller::{
    best_move, best_move_for, calculate_move, find_tactical_move, move_score, select_move,
    select_move_as, BotInput,
};
pub use difficulty::{Difficulty, DifficultyStats, ParseDifficultyError};
pub use error::{BoardError, MoveError};
pub use game_state::{GameMode, Scoreboard, TicTacToeGameState};
pub use types::{
    Board, GameStatus, Mark, WinningLine, BOARD_SIZE, CELL_COUNT, CENTER, COMPUTER_MARK, CORNERS,
    HUMAN_MARK,
};
pub use win_detector::{evaluate_winner, find_winning_line, WIN_PATTERNS};
