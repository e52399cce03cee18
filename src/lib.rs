//! Gomoku (five-in-a-row) move search engine
//!
//! An AI opponent for free-style Gomoku:
//! - 15x15 board, Black moves first
//! - 5-in-a-row to win (overlines allowed)
//! - No captures, no forbidden moves
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards and move history
//! - [`rules`]: Win and draw detection
//! - [`eval`]: Line-shape scoring, whole-board and single-cell evaluation
//! - [`search`]: Candidate generation and minimax with alpha-beta pruning
//! - [`config`]: Search knobs and difficulty levels
//! - [`engine`]: Main AI engine integrating all components
//! - [`game`]: A human-vs-engine game session
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{apply_move, check_win, find_best_move, Board, Pos, Stone};
//!
//! let mut board = Board::new();
//! apply_move(&mut board, Pos::new(7, 7), Stone::Black).unwrap();
//!
//! // AI responds as White
//! if let Some(pos) = find_best_move(&mut board, Stone::White, 2).unwrap() {
//!     apply_move(&mut board, pos, Stone::White).unwrap();
//!     assert!(!check_win(&board, pos, Stone::White));
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Search
//!
//! Each search runs to a fixed depth:
//! 1. Candidates are empty cells near existing stones
//! 2. Large candidate sets are ranked by attack and defence value and capped
//! 3. Minimax with alpha-beta pruning over the capped set
//! 4. Decided games score +/- [`eval::WIN_SCORE`]; other leaves are scored
//!    by the line-shape evaluator

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::{Difficulty, SearchConfig};
pub use engine::{apply_move, find_best_move, AIEngine, MoveResult};
pub use error::GameError;
pub use game::{GameSession, GameStatus};
pub use rules::{check_win, is_board_full};
