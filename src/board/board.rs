//! Board structure: a 3x3 grid of cells

use super::{Cell, Pos, BOARD_SIZE};

/// Game board.
///
/// One mutable instance is shared per game. The search mutates it as a
/// scratch structure (set a cell, recurse, clear it again) instead of
/// cloning at every recursion level, so legality checks live with the
/// callers, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get the cell at a position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Set the cell at a position. No legality check; the caller is
    /// responsible for only writing to cells it is allowed to.
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// Restore a cell to empty (undo for a tentative mark)
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.cells[pos.row as usize][pos.col as usize] = Cell::Empty;
    }

    /// Check if a position is empty
    #[inline]
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// True if no empty cell remains
    pub fn is_full(&self) -> bool {
        Pos::all().all(|pos| self.get(pos) != Cell::Empty)
    }

    /// Number of marks on the board
    pub fn mark_count(&self) -> usize {
        Pos::all().filter(|&pos| self.get(pos) != Cell::Empty).count()
    }

    /// Check if the board has no marks at all
    pub fn is_board_empty(&self) -> bool {
        self.mark_count() == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
