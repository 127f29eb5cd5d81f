//! Game state management for the tic-tac-toe GUI

use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::board::{Board, Cell, Pos};
use crate::engine::{Difficulty, Engine, MoveResult, Outcome};
use crate::rules;

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Option<MoveResult>>,
        start_time: Instant,
    },
}

/// Result of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: Outcome,
    /// The completed triple, if the round ended in a win
    pub winning_line: Option<[Pos; 3]>,
}

/// Main game state.
///
/// The human plays X and moves first; the computer plays O. The engine
/// runs on a worker thread against a private clone of the board, so
/// the board owned here is never aliased during search.
pub struct GameState {
    pub board: Board,
    pub difficulty: Difficulty,
    pub current_turn: Cell,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Cell)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            difficulty,
            current_turn: Cell::Human,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
        }
    }

    /// Reset for a new round, keeping the difficulty setting
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_turn = Cell::Human;
        self.game_over = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
    }

    pub fn is_human_turn(&self) -> bool {
        self.current_turn == Cell::Human
    }

    pub fn is_ai_turn(&self) -> bool {
        self.current_turn == Cell::Computer
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place the human's mark at the given position.
    ///
    /// Rejected attempts leave the board and turn untouched; an
    /// invalid click does not consume the turn.
    pub fn try_place_mark(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("Computer is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if !rules::is_valid_move(&self.board, pos) {
            return Err("Cell already occupied".to_string());
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) {
        let mark = self.current_turn;

        self.board.set(pos, mark);
        self.move_history.push((pos, mark));
        self.last_move = Some(pos);

        if rules::is_terminal(&self.board) {
            let outcome = Outcome::of_board(&self.board);
            let winning_line = rules::check_winner(&self.board)
                .and_then(|winner| rules::winning_line(&self.board, winner));
            self.game_over = Some(GameResult {
                outcome,
                winning_line,
            });
            log::info!("round over after {} moves: {:?}", self.move_history.len(), outcome);
            return;
        }

        self.current_turn = mark.opponent();
        self.message = None;
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board.clone();
        let difficulty = self.difficulty;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let engine = Engine::new(difficulty);
            let result = engine.select_move(&board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if the AI has finished thinking and apply its move
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => Some(result),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("Engine error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some(move_result) = result {
            self.ai_state = AiState::Idle;

            match move_result.and_then(|r| r.best_move.map(|pos| (r, pos))) {
                Some((move_result, pos)) => {
                    self.last_ai_result = Some(move_result);
                    self.execute_move(pos);
                }
                None => {
                    self.message = Some("Engine could not find a move".to_string());
                }
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Undo the last human+computer move pair
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        // Undo back to the human's previous decision point
        let undo_count = if self.move_history.len() >= 2 { 2 } else { 1 };

        // Simple undo: reset and replay
        let moves_to_keep = self.move_history.len().saturating_sub(undo_count);
        let moves: Vec<_> = self.move_history.drain(..moves_to_keep).collect();

        self.board = Board::new();
        self.current_turn = Cell::Human;
        self.game_over = None;
        self.last_move = None;
        self.move_history.clear();

        for (pos, mark) in moves {
            self.board.set(pos, mark);
            self.move_history.push((pos, mark));
            self.last_move = Some(pos);
            self.current_turn = mark.opponent();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_moves_first() {
        let state = GameState::new(Difficulty::Impossible);
        assert!(state.is_human_turn());
        assert!(state.board.is_board_empty());
    }

    #[test]
    fn test_place_and_turn_switch() {
        let mut state = GameState::new(Difficulty::Impossible);
        state.try_place_mark(Pos::new(1, 1)).unwrap();

        assert_eq!(state.board.get(Pos::new(1, 1)), Cell::Human);
        assert!(state.is_ai_turn());
        assert_eq!(state.move_history.len(), 1);
    }

    #[test]
    fn test_occupied_cell_rejected_without_mutation() {
        let mut state = GameState::new(Difficulty::Impossible);
        state.try_place_mark(Pos::new(0, 0)).unwrap();
        state.current_turn = Cell::Human; // force another human turn

        let before = state.board.clone();
        assert!(state.try_place_mark(Pos::new(0, 0)).is_err());
        assert_eq!(state.board, before);
        assert_eq!(state.move_history.len(), 1);
    }

    #[test]
    fn test_round_end_sets_result() {
        let mut state = GameState::new(Difficulty::Impossible);
        // Hand-play a human win down the left column
        state.try_place_mark(Pos::new(0, 0)).unwrap();
        state.current_turn = Cell::Human;
        state.try_place_mark(Pos::new(1, 0)).unwrap();
        state.current_turn = Cell::Human;
        state.try_place_mark(Pos::new(2, 0)).unwrap();

        let result = state.game_over.expect("round should be over");
        assert_eq!(result.outcome, Outcome::HumanWin);
        assert_eq!(
            result.winning_line,
            Some([Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0)])
        );
        assert!(state.try_place_mark(Pos::new(1, 1)).is_err());
    }

    #[test]
    fn test_reset_clears_round() {
        let mut state = GameState::new(Difficulty::Hard);
        state.try_place_mark(Pos::new(0, 0)).unwrap();
        state.reset();

        assert!(state.board.is_board_empty());
        assert!(state.is_human_turn());
        assert!(state.move_history.is_empty());
        assert!(state.game_over.is_none());
        assert_eq!(state.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_undo_restores_pair() {
        let mut state = GameState::new(Difficulty::Impossible);
        state.try_place_mark(Pos::new(0, 0)).unwrap();
        // Simulate the computer replying
        state.execute_move(Pos::new(1, 1));
        assert!(state.is_human_turn());
        assert_eq!(state.move_history.len(), 2);

        state.undo();

        assert!(state.board.is_board_empty());
        assert!(state.is_human_turn());
        assert!(state.move_history.is_empty());
    }

    #[test]
    fn test_ai_round_trip() {
        let mut state = GameState::new(Difficulty::Impossible);
        state.try_place_mark(Pos::new(1, 1)).unwrap();
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());

        // Worker finishes quickly on 9 cells; poll until it lands
        let deadline = Instant::now() + Duration::from_secs(5);
        while state.is_ai_thinking() && Instant::now() < deadline {
            state.check_ai_result();
            thread::sleep(Duration::from_millis(5));
        }

        assert!(!state.is_ai_thinking());
        assert_eq!(state.board.mark_count(), 2);
        assert!(state.is_human_turn());
        assert!(state.last_ai_result.is_some());
    }
}
