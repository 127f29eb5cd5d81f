//! Win condition checking
//!
//! A side wins by occupying all three cells of any row, any column, or
//! either diagonal: exactly eight triples on a 3x3 board.

use crate::board::{Board, Cell, Pos};

/// The eight winning triples: 3 rows, 3 columns, 2 diagonals.
const LINES: [[(u8, u8); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// Check if the given mark occupies a complete line
pub fn has_winning_line(board: &Board, mark: Cell) -> bool {
    winning_line(board, mark).is_some()
}

/// Find the winning triple for a mark, if one exists.
///
/// Returns the first matching line in `LINES` order. Used by the UI to
/// highlight the line that ended the game.
pub fn winning_line(board: &Board, mark: Cell) -> Option<[Pos; 3]> {
    if mark == Cell::Empty {
        return None;
    }

    for line in &LINES {
        if line
            .iter()
            .all(|&(r, c)| board.get(Pos::new(r, c)) == mark)
        {
            let [(r0, c0), (r1, c1), (r2, c2)] = *line;
            return Some([Pos::new(r0, c0), Pos::new(r1, c1), Pos::new(r2, c2)]);
        }
    }
    None
}

/// Check for a winner.
///
/// Returns `Some(Cell)` if either side has a complete line, `None`
/// otherwise. Both sides are checked even though legal alternating play
/// can only produce one winner.
pub fn check_winner(board: &Board) -> Option<Cell> {
    for mark in [Cell::Human, Cell::Computer] {
        if has_winning_line(board, mark) {
            return Some(mark);
        }
    }
    None
}

/// True if the game has ended: either side won, or no empty cell remains
pub fn is_terminal(board: &Board) -> bool {
    has_winning_line(board, Cell::Human)
        || has_winning_line(board, Cell::Computer)
        || board.is_full()
}

/// Check whether a move is legal: coordinates in range and target empty.
///
/// Range is enforced by the `Pos` type; this checks occupancy. The
/// driver calls this before applying human input and re-prompts on
/// failure without mutating the board.
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    board.is_empty_at(pos)
}
