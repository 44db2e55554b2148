mod tictactoe_runner;

pub use tictactoe_runner::{run_tictactoe_game, RunnerSettings};
