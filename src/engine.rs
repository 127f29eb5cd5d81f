//! Move selection engine
//!
//! Wraps the minimax searcher behind a difficulty setting and exposes
//! the two operations the driver needs per computer turn: pick a move
//! for a given board, and map a finished round to a human-perspective
//! outcome.

use std::time::Instant;

use crate::board::{Board, Cell, Pos};
use crate::eval::{evaluate, Score};
use crate::search::Searcher;

/// Difficulty levels, expressed as minimax depth bounds.
///
/// On a 3x3 board the game tree is at most 9 plies deep, so any bound
/// of 9 or more searches to true terminal states and the computer
/// plays perfectly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
    Impossible,
}

impl Difficulty {
    /// Search depth bound in plies
    #[must_use]
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Moderate => 3,
            Difficulty::Hard => 4,
            Difficulty::Impossible => 9,
        }
    }

    /// All levels, for menu/UI enumeration
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Moderate,
        Difficulty::Hard,
        Difficulty::Impossible,
    ];

    /// Display name
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Hard => "Hard",
            Difficulty::Impossible => "Impossible",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Impossible
    }
}

/// Result of a move request with search diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen move, if any empty cell existed
    pub best_move: Option<Pos>,
    /// Minimax score of the chosen move (computer's perspective)
    pub score: i32,
    /// Positions visited by the search
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Outcome of a finished round, from the human's perspective.
///
/// The raw evaluation is from the computer's perspective; the mapping
/// here inverts it for display: -10 means the human won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HumanWin,
    ComputerWin,
    Draw,
}

impl Outcome {
    /// Classify a terminal board by its static evaluation
    #[must_use]
    pub fn of_board(board: &Board) -> Outcome {
        match evaluate(board) {
            Score::HUMAN_WIN => Outcome::HumanWin,
            Score::COMPUTER_WIN => Outcome::ComputerWin,
            _ => Outcome::Draw,
        }
    }

    /// User-facing result text
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Outcome::HumanWin => "You win!",
            Outcome::ComputerWin => "You lose!",
            Outcome::Draw => "It's a draw!",
        }
    }
}

/// Move selection engine for the computer side.
pub struct Engine {
    difficulty: Difficulty,
}

impl Engine {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Select the computer's move without touching the caller's board.
    ///
    /// Searches on a private scratch copy, so it is safe to call from
    /// a worker thread while the real board stays with the UI.
    #[must_use]
    pub fn select_move(&self, board: &Board) -> Option<MoveResult> {
        let mut scratch = board.clone();
        self.search_move(&mut scratch)
    }

    /// Select the computer's move and apply it.
    ///
    /// The board is mutated exactly once (the chosen cell); every
    /// exploratory placement is undone by the search. Returns `None`
    /// on a full board without mutating anything.
    pub fn play_move(&self, board: &mut Board) -> Option<MoveResult> {
        let result = self.search_move(board)?;
        if let Some(pos) = result.best_move {
            board.set(pos, Cell::Computer);
        }
        Some(result)
    }

    fn search_move(&self, board: &mut Board) -> Option<MoveResult> {
        if board.is_full() {
            return None;
        }

        let start = Instant::now();
        let mut searcher = Searcher::new();
        let search = searcher.search(board, self.difficulty.depth());
        let time_ms = start.elapsed().as_millis() as u64;

        log::debug!(
            "engine: {:?} depth {} chose {:?} (score {}, {} nodes, {}ms)",
            self.difficulty,
            self.difficulty.depth(),
            search.best_move,
            search.score,
            search.nodes,
            time_ms,
        );

        Some(MoveResult {
            best_move: search.best_move,
            score: search.score,
            nodes: search.nodes,
            time_ms,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_depths() {
        assert_eq!(Difficulty::Easy.depth(), 2);
        assert_eq!(Difficulty::Moderate.depth(), 3);
        assert_eq!(Difficulty::Hard.depth(), 4);
        assert_eq!(Difficulty::Impossible.depth(), 9);
    }

    #[test]
    fn test_engine_default_is_impossible() {
        let engine = Engine::default();
        assert_eq!(engine.difficulty(), Difficulty::Impossible);
    }

    #[test]
    fn test_play_move_applies_exactly_one_mark() {
        let mut board = Board::new();
        board.set(Pos::new(1, 1), Cell::Human);

        let engine = Engine::new(Difficulty::Impossible);
        let result = engine.play_move(&mut board).unwrap();

        let pos = result.best_move.unwrap();
        assert_eq!(board.get(pos), Cell::Computer);
        assert_eq!(board.mark_count(), 2);
    }

    #[test]
    fn test_select_move_leaves_board_untouched() {
        let mut board = Board::new();
        board.set(Pos::new(0, 0), Cell::Human);
        let snapshot = board.clone();

        let engine = Engine::new(Difficulty::Hard);
        let result = engine.select_move(&board).unwrap();

        assert!(result.best_move.is_some());
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut board = Board::new();
        let marks = [
            Cell::Human, Cell::Computer, Cell::Human,
            Cell::Human, Cell::Computer, Cell::Computer,
            Cell::Computer, Cell::Human, Cell::Human,
        ];
        for (i, &mark) in marks.iter().enumerate() {
            board.set(Pos::from_index(i), mark);
        }
        let snapshot = board.clone();

        let engine = Engine::new(Difficulty::Impossible);
        assert!(engine.play_move(&mut board).is_none());
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_impossible_takes_immediate_win() {
        // Computer one move from winning the top row
        let mut board = Board::new();
        board.set(Pos::new(0, 0), Cell::Computer);
        board.set(Pos::new(0, 1), Cell::Computer);
        board.set(Pos::new(1, 0), Cell::Human);
        board.set(Pos::new(1, 1), Cell::Human);
        board.set(Pos::new(2, 2), Cell::Human);

        let engine = Engine::new(Difficulty::Impossible);
        let result = engine.play_move(&mut board).unwrap();

        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
        assert_eq!(result.score, 10);
        assert_eq!(crate::rules::check_winner(&board), Some(Cell::Computer));
    }

    #[test]
    fn test_easy_still_moves_on_empty_board() {
        let mut board = Board::new();
        let engine = Engine::new(Difficulty::Easy);
        let result = engine.play_move(&mut board).unwrap();

        assert!(result.best_move.is_some());
        assert_eq!(board.mark_count(), 1);
    }

    #[test]
    fn test_outcome_mapping_is_human_perspective() {
        let mut board = Board::new();
        for c in 0..3 {
            board.set(Pos::new(0, c), Cell::Human);
        }
        assert_eq!(Outcome::of_board(&board), Outcome::HumanWin);
        assert_eq!(Outcome::of_board(&board).message(), "You win!");

        let mut board = Board::new();
        for c in 0..3 {
            board.set(Pos::new(0, c), Cell::Computer);
        }
        assert_eq!(Outcome::of_board(&board), Outcome::ComputerWin);
        assert_eq!(Outcome::of_board(&board).message(), "You lose!");

        assert_eq!(Outcome::of_board(&Board::new()), Outcome::Draw);
    }
}
