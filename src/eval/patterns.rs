//! Line shapes and their scores
//!
//! The scoring table encodes the usual threat hierarchy: five wins, an open
//! four cannot be blocked at both ends, a closed four or open three forces a
//! reply, and so on down to a lone stone with room on both sides.

/// The four line orientations through a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right
    DiagonalDown,
    /// Bottom-left to top-right
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// (row, col) step; the opposite direction is its negation
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }
}

/// Score returned by the search for a decided game (from the AI's view)
pub const WIN_SCORE: i32 = 10_000;

/// Score of five or more in a row
pub const FIVE: i32 = 100_000;

/// Scores indexed by `[run length - 1][open ends]`; runs of 5+ share the last row
const LINE_SCORES: [[i32; 3]; 5] = [
    //  0 open  1 open  2 open
    [0, 0, 10],            // one
    [0, 10, 100],          // two
    [0, 100, 1_000],       // three
    [0, 1_000, 10_000],    // four
    [FIVE, FIVE, FIVE],    // five or more
];

/// A contiguous same-colored run through a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShape {
    /// Stones in the run, including the origin (always >= 1)
    pub run_length: u8,
    /// Empty cells directly beyond either end (0..=2); the board edge is not open
    pub open_ends: u8,
}

impl LineShape {
    #[inline]
    pub const fn new(run_length: u8, open_ends: u8) -> Self {
        Self { run_length, open_ends }
    }

    /// Table score for this shape
    #[inline]
    pub fn score(self) -> i32 {
        if self.run_length == 0 {
            return 0;
        }
        let row = usize::from(self.run_length.min(5)) - 1;
        let col = usize::from(self.open_ends.min(2));
        LINE_SCORES[row][col]
    }
}
