//! Evaluation module for Gomoku positions
//!
//! This module provides line scanning and scoring for board positions:
//! - Line shapes (run length + open ends) and their table scores
//! - Per-cell scores summed over the four directions
//! - Whole-board static evaluation for search leaves
//! - Single-cell ranking used to prune candidate moves

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_board, evaluate_player_at, evaluate_position, scan_line};
pub use patterns::{Direction, LineShape, FIVE, WIN_SCORE};
