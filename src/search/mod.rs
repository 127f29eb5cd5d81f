//! Search module
//!
//! Contains the exhaustive minimax search used to select the
//! computer's moves. Deliberately unpruned: difficulty is controlled
//! by the depth bound alone.

pub mod minimax;

pub use minimax::{SearchResult, Searcher};
