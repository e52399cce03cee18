//! Board structure with move history

use std::ops::{Deref, DerefMut};

use super::bitboard::Bitboard;
use super::{Pos, Stone, TOTAL_CELLS};
use crate::error::GameError;

/// Game board with an ordered move history.
///
/// The search mutates one board in place (place, recurse, remove) rather
/// than copying it per node. Every placement appends to `history` and every
/// removal drops the matching record, so the history length always equals
/// the number of stones on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
    history: Vec<MoveRecord>,
}

/// A stone placed on the board, in play order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub pos: Pos,
    pub stone: Stone,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
            history: Vec::with_capacity(TOTAL_CELLS),
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone and record it in the history.
    ///
    /// Fails with [`GameError::InvalidMove`] when `pos` is off the board or
    /// already occupied, and with [`GameError::EmptySide`] for `Stone::Empty`.
    /// The board is untouched on failure.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<(), GameError> {
        if !pos.in_bounds() {
            return Err(GameError::out_of_bounds(pos));
        }
        if !self.is_empty(pos) {
            return Err(GameError::occupied(pos));
        }
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => return Err(GameError::EmptySide),
        }
        self.history.push(MoveRecord { pos, stone });
        Ok(())
    }

    /// Restore `pos` to empty and drop its history record.
    ///
    /// Only meant to undo a placement made earlier in the same frame; calling
    /// it on a cell that was never placed is a caller bug.
    pub fn remove(&mut self, pos: Pos) {
        debug_assert!(!self.is_empty(pos), "remove on empty cell {:?}", pos);
        self.black.clear(pos);
        self.white.clear(pos);
        match self.history.last() {
            Some(last) if last.pos == pos => {
                self.history.pop();
            }
            _ => {
                if let Some(idx) = self.history.iter().rposition(|m| m.pos == pos) {
                    self.history.remove(idx);
                }
            }
        }
    }

    /// Take back the most recent move
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let last = self.history.pop()?;
        self.black.clear(last.pos);
        self.white.clear(last.pos);
        Some(last)
    }

    /// Place a stone for the lifetime of the returned guard.
    ///
    /// The stone is removed when the guard drops, on every exit path
    /// including `?` returns and unwinding.
    pub fn provisional(&mut self, pos: Pos, stone: Stone) -> Result<Provisional<'_>, GameError> {
        self.place(pos, stone)?;
        Ok(Provisional { board: self, pos })
    }

    /// Moves played so far, oldest first
    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().copied()
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// True iff no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Same stones with colors exchanged (history order preserved)
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            black: self.white,
            white: self.black,
            history: self
                .history
                .iter()
                .map(|m| MoveRecord { pos: m.pos, stone: m.stone.opponent() })
                .collect(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Scope guard for a stone placed during search.
///
/// Derefs to the board so the holder can keep searching below it; dropping
/// the guard removes the stone and its history record again.
pub struct Provisional<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl Provisional<'_> {
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for Provisional<'_> {
    type Target = Board;

    #[inline]
    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Provisional<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Provisional<'_> {
    fn drop(&mut self) {
        self.board.remove(self.pos);
    }
}
