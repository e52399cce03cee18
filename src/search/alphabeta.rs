//! Minimax search with alpha-beta pruning
//!
//! The AI side maximizes and the opponent minimizes. The search runs
//! depth-first on a single board that is mutated in place: each child is a
//! [`Provisional`](crate::board::Provisional) placement that is undone when
//! it goes out of scope, so siblings always see the parent's position.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Stone, Pos};
//! use gomoku::config::SearchConfig;
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! let mut searcher = Searcher::new(SearchConfig::with_depth(2));
//! let result = searcher.search(&mut board, Stone::White).unwrap();
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use std::time::Instant;

use log::{debug, trace};

use crate::board::{Board, Pos, Stone};
use crate::config::SearchConfig;
use crate::error::GameError;
use crate::eval::{evaluate_board, WIN_SCORE};
use crate::rules::check_win;

use super::movegen::generate_candidates;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Total alpha-beta cutoffs
    pub beta_cutoffs: u64,
    /// Cutoffs on the first move tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Static evaluations at leaves
    pub leaf_evals: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.beta_cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.beta_cutoffs as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` when there is nothing to play
    pub best_move: Option<Pos>,
    /// Minimax value of the best move, from the searching side's view
    pub score: i32,
    /// Plies searched
    pub depth: u8,
    /// Total nodes visited, root included
    pub nodes: u64,
    /// True if the node or time budget cut the search short
    pub truncated: bool,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Depth-limited minimax searcher.
///
/// Holds only configuration and per-search counters; the board is passed in
/// for each search and handed back unchanged.
pub struct Searcher {
    config: SearchConfig,
    ai: Stone,
    nodes: u64,
    truncated: bool,
    start: Instant,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            ai: Stone::Empty,
            nodes: 0,
            truncated: false,
            start: Instant::now(),
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[inline]
    pub fn config_mut(&mut self) -> &mut SearchConfig {
        &mut self.config
    }

    /// Pick the best move for `side` on `board`.
    ///
    /// Every root candidate is searched with a full window, and the first
    /// candidate with the strictly highest value wins. The board is restored
    /// before returning, including when an error propagates.
    pub fn search(&mut self, board: &mut Board, side: Stone) -> Result<SearchResult, GameError> {
        if side == Stone::Empty {
            return Err(GameError::EmptySide);
        }
        self.ai = side;
        self.nodes = 1;
        self.truncated = false;
        self.start = Instant::now();
        self.stats = SearchStats::default();

        let depth = self.config.depth.max(1);
        let candidates = generate_candidates(board, side, &self.config);

        let mut best_move = None;
        let mut best_score = i32::MIN;

        for mov in candidates {
            if best_move.is_some() && self.budget_exhausted() {
                break;
            }

            let score = {
                let mut child = board.provisional(mov, side)?;
                self.minimax(&mut child, depth - 1, i32::MIN, i32::MAX, false)?
            };
            trace!("root ({}, {}) -> {}", mov.row, mov.col, score);

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
        }

        let result = SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            depth,
            nodes: self.nodes,
            truncated: self.truncated,
            stats: self.stats.clone(),
        };

        debug!(
            "search {:?} depth {}: move {:?} score {} nodes {} cutoffs {}{}",
            side,
            depth,
            result.best_move.map(|p| (p.row, p.col)),
            result.score,
            result.nodes,
            result.stats.beta_cutoffs,
            if result.truncated { " (truncated)" } else { "" }
        );

        Ok(result)
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Result<i32, GameError> {
        self.nodes += 1;

        // A decided game outranks any heuristic, at every depth
        if let Some(last) = board.last_move() {
            if check_win(board, last.pos, last.stone) {
                return Ok(if last.stone == self.ai { WIN_SCORE } else { -WIN_SCORE });
            }
        }

        if depth == 0 || board.is_full() || self.budget_exhausted() {
            self.stats.leaf_evals += 1;
            return Ok(evaluate_board(board, self.ai));
        }

        let moves = generate_candidates(board, self.ai, &self.config);
        if moves.is_empty() {
            self.stats.leaf_evals += 1;
            return Ok(evaluate_board(board, self.ai));
        }

        let side = if maximizing { self.ai } else { self.ai.opponent() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for (i, mov) in moves.into_iter().enumerate() {
            let score = {
                let mut child = board.provisional(mov, side)?;
                self.minimax(&mut child, depth - 1, alpha, beta, !maximizing)?
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if self.config.pruning && beta <= alpha {
                self.stats.beta_cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        Ok(best)
    }

    /// Check the node and time budget; records truncation when spent.
    fn budget_exhausted(&mut self) -> bool {
        let over_nodes = self.config.node_limit.is_some_and(|limit| self.nodes >= limit);
        let over_time = self
            .config
            .time_limit
            .is_some_and(|limit| self.start.elapsed() >= limit);
        if over_nodes || over_time {
            self.truncated = true;
        }
        over_nodes || over_time
    }
}
