//! Main AI engine and the entry points used by a game front end
//!
//! [`AIEngine`] wraps a [`Searcher`] with timing and a difficulty knob. The
//! free functions [`find_best_move`] and [`apply_move`] (together with
//! [`check_win`](crate::rules::check_win) and
//! [`is_board_full`](crate::rules::is_board_full)) are the whole surface a
//! front end needs.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, Pos, Stone};
//!
//! let mut engine = AIEngine::from_difficulty(Difficulty::Medium);
//! let mut board = Board::new();
//! board.place(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! let result = engine.get_move_with_stats(&mut board, Stone::White).unwrap();
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms, nodes: {}", result.time_ms, result.nodes);
//! ```

use std::time::Instant;

use crate::board::{Board, Pos, Stone};
use crate::config::{Difficulty, SearchConfig};
use crate::error::GameError;
use crate::search::{SearchResult, SearchStats, Searcher};

/// Result of a move search with timing and statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax value of the move from the mover's side
    pub score: i32,
    /// Plies searched
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// True if a node or time budget stopped the search early
    pub truncated: bool,
    /// Cutoff and leaf counters
    pub stats: SearchStats,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
            truncated: result.truncated,
            stats: result.stats,
        }
    }
}

/// Main AI engine for Gomoku.
///
/// Searches are synchronous and run to completion (or until the configured
/// budget runs out). The board passed in is borrowed mutably for the search
/// and returned in the same state.
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Engine with the default configuration (depth 2).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::new(config),
        }
    }

    #[must_use]
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::with_config(difficulty.into())
    }

    /// Get the best move for `color`, or `None` if nothing can be played.
    pub fn get_move(&mut self, board: &mut Board, color: Stone) -> Result<Option<Pos>, GameError> {
        Ok(self.get_move_with_stats(board, color)?.best_move)
    }

    /// Get the best move along with timing and node counts.
    pub fn get_move_with_stats(
        &mut self,
        board: &mut Board,
        color: Stone,
    ) -> Result<MoveResult, GameError> {
        let start = Instant::now();
        let result = self.searcher.search(board, color)?;
        Ok(MoveResult::from_search(result, start.elapsed().as_millis() as u64))
    }

    /// Search depth in plies.
    #[inline]
    pub fn depth(&self) -> u8 {
        self.searcher.config().depth
    }

    /// Set the search depth; 0 is treated as 1.
    pub fn set_depth(&mut self, depth: u8) {
        self.searcher.config_mut().depth = depth.max(1);
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.set_depth(difficulty.depth());
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        self.searcher.config()
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Best move for `side` searching `depth` plies with default settings.
///
/// Returns `Ok(None)` when no candidate exists (full board), which a
/// caller should treat as a draw.
pub fn find_best_move(board: &mut Board, side: Stone, depth: u8) -> Result<Option<Pos>, GameError> {
    AIEngine::with_config(SearchConfig::with_depth(depth)).get_move(board, side)
}

/// Place `side`'s stone at `pos`.
///
/// Fails with [`GameError::InvalidMove`] if the cell is occupied or off the
/// board; the board is unchanged in that case.
pub fn apply_move(board: &mut Board, pos: Pos, side: Stone) -> Result<(), GameError> {
    board.place(pos, side)
}
