use super::types::{Board, Mark, WinningLine};

/// Every line that wins the game: rows, then columns, then diagonals.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the mark that owns a full line, if any.
///
/// `None` does not mean a draw: the caller checks [`super::is_full`] to tell
/// an unfinished game from a tied one. Patterns are scanned in table order
/// and the first match wins.
pub fn evaluate_winner(board: &Board) -> Option<Mark> {
    find_winning_line(board).map(|line| line.mark)
}

pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    WIN_PATTERNS.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}
