#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must have exactly 9 cells, got {len}")]
    InvalidShape { len: usize },

    #[error("cell index {0} is out of range 0..=8")]
    OutOfBounds(usize),

    #[error("unknown board symbol {0:?}")]
    UnknownSymbol(char),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,

    #[error("cell index {0} is out of range 0..=8")]
    OutOfBounds(usize),

    #[error("cell {0} is already marked")]
    CellOccupied(usize),

    #[error("it is not the computer's turn")]
    NotComputerTurn,
}
