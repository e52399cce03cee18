//! Search configuration and difficulty levels

use std::time::Duration;

use crate::error::GameError;

/// Knobs for the move search.
///
/// Defaults give a two-ply search over at most 20 ranked candidates with
/// offence weighted 1.1 against defence.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Plies to search (at least 1)
    pub depth: u8,
    /// Candidate cap; larger candidate sets are ranked and truncated
    pub candidate_limit: usize,
    /// Multiplier on a cell's offensive value when ranking candidates
    pub attack_weight: f64,
    /// Chebyshev radius around existing stones where candidates are taken
    pub neighbor_radius: i32,
    /// Alpha-beta cutoffs; off gives plain minimax with identical results
    pub pruning: bool,
    /// Stop expanding after this many nodes
    pub node_limit: Option<u64>,
    /// Stop expanding after this much wall-clock time
    pub time_limit: Option<Duration>,
}

impl SearchConfig {
    pub const DEFAULT_DEPTH: u8 = 2;
    pub const DEFAULT_CANDIDATE_LIMIT: usize = 20;
    pub const DEFAULT_ATTACK_WEIGHT: f64 = 1.1;
    pub const DEFAULT_NEIGHBOR_RADIUS: i32 = 2;

    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth: depth.max(1),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    #[must_use]
    pub fn with_node_limit(mut self, nodes: u64) -> Self {
        self.node_limit = Some(nodes);
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: Self::DEFAULT_DEPTH,
            candidate_limit: Self::DEFAULT_CANDIDATE_LIMIT,
            attack_weight: Self::DEFAULT_ATTACK_WEIGHT,
            neighbor_radius: Self::DEFAULT_NEIGHBOR_RADIUS,
            pruning: true,
            node_limit: None,
            time_limit: None,
        }
    }
}

/// AI difficulty levels, one search ply per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// Depth 1: greedy, looks only at its own move
    Easy,
    /// Depth 2: sees the opponent's reply
    #[default]
    Medium,
    /// Depth 3
    Hard,
    /// Depth 4
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Search depth in plies
    #[inline]
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Expert => 4,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = GameError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.depth() == level)
            .ok_or(GameError::InvalidDifficulty(level))
    }
}

impl From<Difficulty> for SearchConfig {
    fn from(difficulty: Difficulty) -> Self {
        SearchConfig::with_depth(difficulty.depth())
    }
}
