//! Game rules for tic-tac-toe
//!
//! Win detection over the eight fixed lines of a 3x3 board, terminal
//! state checks, and move legality for human input.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, has_winning_line, is_terminal, is_valid_move, winning_line};
