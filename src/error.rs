//! Error types for board mutation and game sessions

use std::fmt;

use thiserror::Error;

use crate::board::Pos;

/// Why a placement was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// Coordinates fall outside the board
    OutOfBounds,
    /// The cell already holds a stone
    Occupied,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::OutOfBounds => f.write_str("out of bounds"),
            MoveRejection::Occupied => f.write_str("cell occupied"),
        }
    }
}

/// Errors surfaced by the board, the search and the game session.
///
/// None of these are fatal: a front end treats them as a rejected input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid move at ({}, {}): {reason}", pos.row, pos.col)]
    InvalidMove { pos: Pos, reason: MoveRejection },

    #[error("a move needs a black or white stone, not an empty one")]
    EmptySide,

    #[error("difficulty {0} is outside 1..=4")]
    InvalidDifficulty(u8),

    #[error("the game is already over")]
    GameOver,

    #[error("it is not this side's turn")]
    NotYourTurn,

    #[error("not enough moves to undo")]
    NothingToUndo,
}

impl GameError {
    #[inline]
    pub(crate) fn out_of_bounds(pos: Pos) -> Self {
        GameError::InvalidMove { pos, reason: MoveRejection::OutOfBounds }
    }

    #[inline]
    pub(crate) fn occupied(pos: Pos) -> Self {
        GameError::InvalidMove { pos, reason: MoveRejection::Occupied }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_message() {
        let err = GameError::occupied(Pos::new(7, 7));
        assert_eq!(err.to_string(), "invalid move at (7, 7): cell occupied");

        let err = GameError::out_of_bounds(Pos { row: 15, col: 2 });
        assert_eq!(err.to_string(), "invalid move at (15, 2): out of bounds");
    }

    #[test]
    fn test_difficulty_message() {
        assert_eq!(
            GameError::InvalidDifficulty(9).to_string(),
            "difficulty 9 is outside 1..=4"
        );
    }
}
