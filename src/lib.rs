//! Tic-tac-toe engine with exhaustive minimax search
//!
//! A complete human-vs-computer tic-tac-toe game on a fixed 3x3 board.
//! The computer selects its moves via plain depth-bounded minimax
//! with no pruning and no move ordering, so bounded difficulty levels behave
//! exactly like the reference game: they block wins inside their
//! horizon and nothing more.
//!
//! # Architecture
//!
//! - [`board`]: Board representation (3x3 grid of cells)
//! - [`rules`]: Win detection and terminal-state checks
//! - [`eval`]: Static evaluation (+10 / -10 / 0)
//! - [`search`]: Depth-bounded minimax with scratch-and-restore
//! - [`engine`]: Difficulty levels and move selection
//! - [`ui`]: egui front end (human input, rendering, replay)
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Board, Cell, Difficulty, Engine, Pos};
//!
//! let mut board = Board::new();
//! board.set(Pos::new(1, 1), Cell::Human);
//!
//! // Computer responds with O
//! let engine = Engine::new(Difficulty::Impossible);
//! let result = engine.play_move(&mut board).expect("board has empty cells");
//! println!("Computer plays at {:?}", result.best_move);
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, BOARD_SIZE};
pub use engine::{Difficulty, Engine, MoveResult, Outcome};
pub use search::{SearchResult, Searcher};
