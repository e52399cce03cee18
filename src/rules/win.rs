//! Win condition checking
//!
//! A move wins when it completes a run of five or more same-colored stones
//! along a row, column or either diagonal.

use crate::board::{Board, Pos, Stone};
use crate::eval::Direction;

/// Count same-colored stones stepping away from `pos` along `(dr, dc)`.
/// The origin itself is not counted.
#[inline]
fn run_from(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> i32 {
    let mut count = 0;
    while let Some(next) = pos.step(dr, dc, count + 1) {
        if board.get(next) != color {
            break;
        }
        count += 1;
    }
    count
}

/// Whether the stone of `color` at `pos` is part of five or more in a row.
///
/// Only checks the 4 lines through `pos`. No allocation.
#[inline]
pub fn check_win(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty || !pos.in_bounds() {
        return false;
    }
    Direction::ALL.iter().any(|dir| {
        let (dr, dc) = dir.delta();
        1 + run_from(board, pos, dr, dc, color) + run_from(board, pos, -dr, -dc, color) >= 5
    })
}

/// The full winning run through `pos`, ordered from one end to the other.
///
/// Returns `None` when `pos` does not complete five in a row.
pub fn winning_line(board: &Board, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    if color == Stone::Empty || !pos.in_bounds() {
        return None;
    }
    for dir in Direction::ALL {
        let (dr, dc) = dir.delta();
        let back = run_from(board, pos, -dr, -dc, color);
        let fwd = run_from(board, pos, dr, dc, color);
        if 1 + back + fwd >= 5 {
            let line = (-back..=fwd).filter_map(|i| pos.step(dr, dc, i)).collect();
            return Some(line);
        }
    }
    None
}

/// Check if there's 5+ in a row anywhere for the given color
pub fn has_five_in_row(board: &Board, color: Stone) -> bool {
    board
        .stones(color)
        .is_some_and(|stones| stones.iter_ones().any(|pos| check_win(board, pos, color)))
}

/// True iff no empty cell remains
#[inline]
pub fn is_board_full(board: &Board) -> bool {
    board.is_full()
}
