//! Grid-world tabular Q-learning trainer
//!
//! This crate provides:
//! - A small grid-world environment with walls, pits, and a goal
//! - A lazily initialized Q-table and an epsilon-greedy policy with random
//!   tie-breaking
//! - A trainer that applies one Bellman backup per step, decays epsilon per
//!   episode, and supports pause/resume/reset without corrupting learned state
//! - A cooperative tick scheduler with precise cancellation semantics
//! - Bounded episode statistics and a read-only snapshot for external
//!   collaborators (renderers, charts, tutoring assistants)

pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod grid;
pub mod ports;
pub mod q_learning;
pub mod trainer;

pub use config::{EPSILON_FLOOR, HyperParameters};
pub use env::{GridEnvironment, RewardScheme, Transition};
pub use error::{Error, Result};
pub use grid::{Action, CellType, GridConfig, Position};
pub use q_learning::{EpsilonGreedyPolicy, QTable};
pub use trainer::{
    EPISODE_END_PAUSE, EpisodeStat, PositionTrace, STATS_CAPACITY, StatsLog, StepOutcome,
    TRACE_CAPACITY, Trainer, TrainerSnapshot, TrainingLoop, TrainingRunResult,
};
