//! Candidate move generation
//!
//! Only empty cells near existing stones are worth searching on a 15x15
//! board. When that still leaves too many, candidates are ranked with the
//! single-cell evaluator and the tail is cut off.

use crate::board::{Board, Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::config::SearchConfig;
use crate::eval::evaluate_position;

/// Generate candidate moves for a search run on behalf of `ai`.
///
/// - Empty history: the center cell alone.
/// - Otherwise every empty cell within `config.neighbor_radius` (Chebyshev)
///   of a stone, in row-major order.
/// - Above `config.candidate_limit`, the best-ranked candidates by
///   [`evaluate_position`], highest first; equal ranks keep row-major order.
#[must_use]
pub fn generate_candidates(board: &Board, ai: Stone, config: &SearchConfig) -> Vec<Pos> {
    if board.history().is_empty() {
        return vec![Pos::center()];
    }

    let moves = neighborhood_moves(board, config.neighbor_radius);
    if moves.len() <= config.candidate_limit {
        return moves;
    }

    let mut ranked: Vec<(Pos, f64)> = moves
        .into_iter()
        .map(|pos| (pos, evaluate_position(board, pos, ai, config.attack_weight)))
        .collect();
    // Stable sort: ties stay in scan order
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(config.candidate_limit);
    ranked.into_iter().map(|(pos, _)| pos).collect()
}

/// Empty cells with at least one stone within `radius`, row-major.
#[allow(clippy::cast_sign_loss)]
fn neighborhood_moves(board: &Board, radius: i32) -> Vec<Pos> {
    let mut near = [[false; BOARD_SIZE]; BOARD_SIZE];

    for pos in board.black.iter_ones().chain(board.white.iter_ones()) {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                let r = i32::from(pos.row) + dr;
                let c = i32::from(pos.col) + dc;
                if Pos::is_valid(r, c) {
                    near[r as usize][c as usize] = true;
                }
            }
        }
    }

    (0..TOTAL_CELLS)
        .map(Pos::from_index)
        .filter(|&pos| near[pos.row as usize][pos.col as usize] && board.is_empty(pos))
        .collect()
}
