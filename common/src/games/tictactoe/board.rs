use super::types::{Board, Mark, CORNERS};

/// Empty cell indices in ascending order.
pub fn available_moves(board: &Board) -> Vec<usize> {
    empty_cells(board).collect()
}

pub fn empty_cells(board: &Board) -> impl Iterator<Item = usize> + '_ {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Mark::Empty)
        .map(|(index, _)| index)
}

pub fn available_corners(board: &Board) -> Vec<usize> {
    CORNERS
        .iter()
        .copied()
        .filter(|&index| board.is_empty_at(index))
        .collect()
}

pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|&cell| cell != Mark::Empty)
}
