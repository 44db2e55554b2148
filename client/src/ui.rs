use common::games::tictactoe::{
    Difficulty, GameMode, GameStatus, Mark, TicTacToeGameState, BOARD_SIZE,
};

pub fn render_board(state: &TicTacToeGameState) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        out.push(' ');
        for col in 0..BOARD_SIZE {
            let index = row * BOARD_SIZE + col;
            let highlighted = state
                .winning_line
                .is_some_and(|line| line.contains(index));
            let cell = match state.board.get(index) {
                Some(Mark::Empty) | None => (index + 1).to_string(),
                Some(mark) if highlighted => mark.to_string().to_lowercase(),
                Some(mark) => mark.to_string(),
            };
            out.push_str(&format!(" {} ", cell));
            if col < BOARD_SIZE - 1 {
                out.push('|');
            }
        }
        out.push('\n');
        if row < BOARD_SIZE - 1 {
            out.push_str(" ---+---+---\n");
        }
    }
    out
}

pub fn render_status(state: &TicTacToeGameState) -> String {
    match state.status {
        GameStatus::XWon | GameStatus::OWon => {
            let winner = state.status.winner().map(|m| m.to_string()).unwrap_or_default();
            format!("WINNER {}  (r: rematch, n: new match)", winner)
        }
        GameStatus::Draw => "It's a tie!  (r: rematch, n: new match)".to_string(),
        GameStatus::InProgress => format!("NEXT MOVE {}", state.current_mark),
    }
}

pub fn render_scoreboard(state: &TicTacToeGameState) -> String {
    let o_label = match state.mode {
        GameMode::Computer => "Computer",
        GameMode::Friend => "Player",
    };
    format!(
        "SCOREBOARD  Player X: {}  |  {} O: {}",
        state.scores.x, o_label, state.scores.o
    )
}

pub fn render_difficulty(difficulty: Difficulty) -> String {
    let stats = difficulty.stats();
    format!(
        "{} {}: {} (player win rate {})",
        stats.icon, stats.name, stats.description, stats.win_rate
    )
}

pub fn render_screen(state: &TicTacToeGameState, difficulty: Difficulty) -> String {
    let mode_line = match state.mode {
        GameMode::Computer => format!("Mode: vs AI  {}", render_difficulty(difficulty)),
        GameMode::Friend => "Mode: play with friend".to_string(),
    };
    format!(
        "\n{}\n{}\n{}\n{}\n",
        render_scoreboard(state),
        mode_line,
        render_board(state),
        render_status(state)
    )
}

pub fn help_text() -> &'static str {
    "Commands:\n  \
     1-9          place your mark\n  \
     r            rematch (keep score)\n  \
     n            new match (reset score)\n  \
     m            switch between vs AI and play with friend\n  \
     d <tier>     set difficulty: easy, medium, hard, insane\n  \
     q            quit"
}
