//! Static evaluation for tic-tac-toe positions

pub mod heuristic;

// Re-exports
pub use heuristic::{evaluate, Score};
