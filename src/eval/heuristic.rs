//! Static evaluation function
//!
//! Scores a position from the computer's perspective. The magnitudes
//! are part of the evaluation contract (the search's base case tests
//! for them literally), not tuning knobs.

use crate::board::{Board, Cell};
use crate::rules::has_winning_line;

/// Evaluation score constants
pub struct Score;

impl Score {
    /// Computer has a complete line
    pub const COMPUTER_WIN: i32 = 10;
    /// Human has a complete line
    pub const HUMAN_WIN: i32 = -10;
    /// No winner: covers both "draw" and "game still open".
    /// The caller distinguishes those two via `rules::is_terminal`,
    /// not via the score.
    pub const NEUTRAL: i32 = 0;
}

/// Evaluate the board from the computer's perspective.
///
/// Returns [`Score::COMPUTER_WIN`] if the computer has a winning
/// triple, [`Score::HUMAN_WIN`] if the human does, and
/// [`Score::NEUTRAL`] otherwise. A non-terminal position scores
/// neutral regardless of positional advantage; bounded-depth search
/// therefore only reacts to wins inside its horizon.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    if has_winning_line(board, Cell::Computer) {
        return Score::COMPUTER_WIN;
    }
    if has_winning_line(board, Cell::Human) {
        return Score::HUMAN_WIN;
    }
    Score::NEUTRAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_empty_board_neutral() {
        assert_eq!(evaluate(&Board::new()), Score::NEUTRAL);
    }

    #[test]
    fn test_computer_win_score() {
        let mut board = Board::new();
        for c in 0..3 {
            board.set(Pos::new(1, c), Cell::Computer);
        }
        assert_eq!(evaluate(&board), Score::COMPUTER_WIN);
    }

    #[test]
    fn test_human_win_score() {
        let mut board = Board::new();
        for r in 0..3 {
            board.set(Pos::new(r, 2), Cell::Human);
        }
        assert_eq!(evaluate(&board), Score::HUMAN_WIN);
    }

    #[test]
    fn test_draw_scores_neutral() {
        // X O X / X O O / O X X: full, no winner
        let mut board = Board::new();
        let marks = [
            Cell::Human, Cell::Computer, Cell::Human,
            Cell::Human, Cell::Computer, Cell::Computer,
            Cell::Computer, Cell::Human, Cell::Human,
        ];
        for (i, &mark) in marks.iter().enumerate() {
            board.set(Pos::from_index(i), mark);
        }
        assert!(board.is_full());
        assert_eq!(evaluate(&board), Score::NEUTRAL);
    }

    #[test]
    fn test_evaluate_idempotent() {
        let mut board = Board::new();
        board.set(Pos::new(0, 0), Cell::Human);
        board.set(Pos::new(1, 1), Cell::Computer);
        let first = evaluate(&board);
        for _ in 0..10 {
            assert_eq!(evaluate(&board), first);
        }
    }
}
