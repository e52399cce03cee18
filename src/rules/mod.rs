//! Game rules for freestyle Gomoku
//!
//! Five or more stones in a row wins (overlines count). There are no
//! captures or forbidden moves; a full board without a five is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, has_five_in_row, is_board_full, winning_line};
