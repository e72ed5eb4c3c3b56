//! Observer port - abstraction for training observation and data collection
//!
//! Observers let the CLI attach progress reporting and stat export to a
//! training run without coupling the loop to any output format. The loop
//! never depends on an observer succeeding for learning correctness, but an
//! observer error aborts the run so export failures are not silent.

use crate::{
    error::Result,
    trainer::{EpisodeStat, StepOutcome},
};

/// Observer trait for monitoring a training run.
///
/// # Event sequence
///
/// 1. `on_training_start(total_episodes)` - once at the beginning
/// 2. For each step: `on_step(outcome)`
/// 3. After each terminal step: `on_episode_end(stat)`
/// 4. `on_training_end()` - once at the end
pub trait TrainingObserver: Send {
    /// Called when a training run starts.
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called after every completed step.
    fn on_step(&mut self, _outcome: &StepOutcome) -> Result<()> {
        Ok(())
    }

    /// Called after a terminal step, with the episode's final statistics.
    fn on_episode_end(&mut self, _stat: &EpisodeStat) -> Result<()> {
        Ok(())
    }

    /// Called when the run completes. Use this to flush or finalize outputs.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
