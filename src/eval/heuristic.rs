//! Heuristic evaluation of cells and whole boards
//!
//! Every score here is built from [`LineShape`]s: the run through a cell in
//! each of the four directions is looked up in the line table and summed.
//! A stone sitting on several threats at once therefore scores once per
//! direction, which is what makes crossing lines attractive.

use crate::board::{Board, Pos, Stone};

use super::patterns::{Direction, LineShape};

/// Measure the run of `color` through `pos` along `dir`.
///
/// The origin counts as one stone of `color` whatever the cell holds, so the
/// same scan serves both real stones and hypothetical placements.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scan_line(board: &Board, pos: Pos, dir: Direction, color: Stone) -> LineShape {
    let (dr, dc) = dir.delta();
    let mut run = 1;
    let mut open = 0;

    for sign in [1, -1] {
        let mut dist = 1;
        let stop = loop {
            match pos.step(dr * sign, dc * sign, dist) {
                Some(p) if board.get(p) == color => {
                    run += 1;
                    dist += 1;
                }
                other => break other,
            }
        };
        if stop.is_some_and(|p| board.is_empty(p)) {
            open += 1;
        }
    }

    LineShape::new(run, open)
}

/// Sum of line scores for `color` over the four directions through `pos`
#[must_use]
pub fn evaluate_player_at(board: &Board, pos: Pos, color: Stone) -> i32 {
    Direction::ALL
        .iter()
        .map(|&dir| scan_line(board, pos, dir, color).score())
        .sum()
}

/// Static evaluation of the whole board from `ai`'s side.
///
/// Sum of [`evaluate_player_at`] over `ai`'s stones minus the same sum over
/// the opponent's stones. Swapping every stone's color negates the result.
#[must_use]
pub fn evaluate_board(board: &Board, ai: Stone) -> i32 {
    let side_total = |color: Stone| -> i32 {
        board.stones(color).map_or(0, |stones| {
            stones
                .iter_ones()
                .map(|pos| evaluate_player_at(board, pos, color))
                .sum()
        })
    };
    side_total(ai) - side_total(ai.opponent())
}

/// Quick value of an empty cell, used only to rank candidate moves.
///
/// Offence (an `ai` stone on `pos`, scaled by `attack_weight`) plus defence
/// (an opponent stone on `pos`, i.e. what playing there would block).
/// [`scan_line`] never reads the origin cell, so the board is left untouched.
#[must_use]
pub fn evaluate_position(board: &Board, pos: Pos, ai: Stone, attack_weight: f64) -> f64 {
    let attack = f64::from(evaluate_player_at(board, pos, ai));
    let defence = f64::from(evaluate_player_at(board, pos, ai.opponent()));
    attack * attack_weight + defence
}
