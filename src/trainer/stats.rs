//! Bounded episode statistics and position trace

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::grid::Position;

/// How many completed episodes the stats log retains.
pub const STATS_CAPACITY: usize = 50;

/// How many recently visited positions the trace retains.
pub const TRACE_CAPACITY: usize = 21;

/// Outcome of one completed episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeStat {
    /// 1-based, monotonically increasing episode index.
    pub episode: u32,
    /// Total reward accumulated over the episode, terminal step included.
    pub total_reward: f64,
    /// Epsilon that was active during the episode, before decay.
    pub epsilon: f64,
}

/// Bounded, ordered log of per-episode outcomes, oldest first.
///
/// Purely observational: the learning algorithm never reads it.
#[derive(Debug, Clone, Default)]
pub struct StatsLog {
    entries: VecDeque<EpisodeStat>,
}

impl StatsLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stat, evicting the oldest entry beyond capacity.
    pub fn push(&mut self, stat: EpisodeStat) {
        if self.entries.len() == STATS_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(stat);
    }

    pub fn iter(&self) -> impl Iterator<Item = &EpisodeStat> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&EpisodeStat> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Bounded trace of recently visited positions, oldest first.
#[derive(Debug, Clone, Default)]
pub struct PositionTrace {
    positions: VecDeque<Position>,
}

impl PositionTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pos: Position) {
        if self.positions.len() == TRACE_CAPACITY {
            self.positions.pop_front();
        }
        self.positions.push_back(pos);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }
}
