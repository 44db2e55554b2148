use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::BoardError;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Mark played by the human. Moves first.
pub const HUMAN_MARK: Mark = Mark::X;
/// Mark played by the computer.
pub const COMPUTER_MARK: Mark = Mark::O;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            '.' | '_' | '-' | ' ' => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 3x3 board, cells in row-major order (0..=8).
///
/// `Board` is a plain value: trial moves produce a new board through
/// [`Board::with_mark`] and never touch the board they were derived from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from an untyped slice. Anything that is not exactly
    /// nine cells long is rejected.
    pub fn from_cells(cells: &[Mark]) -> Result<Self, BoardError> {
        let cells: [Mark; CELL_COUNT] = cells
            .try_into()
            .map_err(|_| BoardError::InvalidShape { len: cells.len() })?;
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn set(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::OutOfBounds(index))?;
        *cell = mark;
        Ok(())
    }

    /// Copy of this board with `mark` placed at `index`.
    ///
    /// Panics when `index` is not below [`CELL_COUNT`]. Untrusted indices go
    /// through [`Board::set`] instead.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        debug_assert!(index < CELL_COUNT, "cell index {} out of range", index);
        let mut next = *self;
        next.cells[index] = mark;
        next
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses boards written as `"XX..O...."` or `"XX./.O./..."`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| *c != '/' && *c != '|')
            .map(|c| Mark::from_symbol(c).ok_or(BoardError::UnknownSymbol(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Board::from_cells(&cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            for mark in row {
                write!(f, "{}", mark.symbol())?;
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        let short = [Mark::Empty; 8];
        assert_eq!(
            Board::from_cells(&short),
            Err(BoardError::InvalidShape { len: 8 })
        );

        let long = [Mark::X; 10];
        assert_eq!(
            Board::from_cells(&long),
            Err(BoardError::InvalidShape { len: 10 })
        );
    }

    #[test]
    fn test_parse_board_with_row_separators() {
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(1), Some(Mark::X));
        assert_eq!(board.get(2), Some(Mark::Empty));
        assert_eq!(board.get(4), Some(Mark::O));
        assert_eq!(board.count(Mark::Empty), 6);
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let result: Result<Board, _> = "XXZ......".parse();
        assert_eq!(result, Err(BoardError::UnknownSymbol('Z')));
    }

    #[test]
    fn test_parse_rejects_short_input() {
        let result: Result<Board, _> = "XO".parse();
        assert_eq!(result, Err(BoardError::InvalidShape { len: 2 }));
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::X);
        assert_eq!(board, Board::new());
        assert_eq!(next.get(4), Some(Mark::X));
    }

    #[test]
    #[should_panic]
    fn test_with_mark_rejects_index_past_last_cell() {
        let _ = Board::new().with_mark(CELL_COUNT, Mark::X);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(board.set(9, Mark::X), Err(BoardError::OutOfBounds(9)));
        assert!(board.set(8, Mark::O).is_ok());
        assert_eq!(board.get(8), Some(Mark::O));
    }

    #[test]
    fn test_display_matches_parse() {
        let board: Board = "XO.......".parse().unwrap();
        assert_eq!(board.to_string(), "XO.......");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }
}
