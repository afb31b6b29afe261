//! Search module for the rabbit AI
//!
//! Contains:
//! - Depth-bounded minimax with alpha-beta pruning
//! - Plain exhaustive minimax, used to cross-check the pruned search

pub mod alphabeta;
pub mod minimax;

pub use alphabeta::{SearchResult, SearchStats, Searcher, INF};
pub use minimax::minimax;
