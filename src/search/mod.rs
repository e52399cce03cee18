//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation with neighbourhood filtering and ranking
//! - Minimax search with alpha-beta pruning

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
pub use movegen::generate_candidates;
