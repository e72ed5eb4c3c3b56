//! Cooperative step scheduling: pause/resume/reset-safe tick loop
//!
//! Each step schedules the next one after a delay, with a longer pause after
//! a terminal step so episode boundaries stay perceptible at interactive
//! speeds. The pending step is an explicit due-instant the caller ticks
//! against rather than a timer callback, so cancellation semantics are exact
//! and testable without any runtime timer API: pausing clears the pending
//! due-instant before it can fire, and resetting requires the same.
//!
//! At most one step is ever in flight; each step runs to completion before
//! the loop re-arms, so readers between ticks always observe a consistent
//! Q-table and episode state.

use std::{
    thread,
    time::{Duration, Instant},
};

use crate::{
    error::Result,
    ports::TrainingObserver,
    trainer::{EpisodeStat, StepOutcome, Trainer},
};

/// Pause after a terminal step, so goal and pit outcomes stay visible at
/// interactive speeds. Headless runs collapse all delays to zero.
pub const EPISODE_END_PAUSE: Duration = Duration::from_millis(200);

/// Result of a headless training run.
#[derive(Debug, Clone)]
pub struct TrainingRunResult {
    /// Every completed episode, in order (unbounded, unlike the trainer's
    /// own 50-entry log).
    pub episodes: Vec<EpisodeStat>,
    /// Total steps taken across all episodes.
    pub total_steps: usize,
}

/// Drives a [`Trainer`] on a tick schedule.
///
/// Interactive callers poll [`TrainingLoop::tick`] with the current instant;
/// a step runs only when the pending due-instant has passed, and the loop
/// re-arms itself from the configured step delay. Headless callers use
/// [`TrainingLoop::run_episodes`] instead.
pub struct TrainingLoop {
    trainer: Trainer,
    next_due: Option<Instant>,
    episode_end_pause: Duration,
}

impl TrainingLoop {
    pub fn new(trainer: Trainer) -> Self {
        Self {
            trainer,
            next_due: None,
            episode_end_pause: EPISODE_END_PAUSE,
        }
    }

    pub fn with_episode_end_pause(mut self, pause: Duration) -> Self {
        self.episode_end_pause = pause;
        self
    }

    pub fn trainer(&self) -> &Trainer {
        &self.trainer
    }

    /// Mutable access for hyperparameter edits between ticks.
    pub fn trainer_mut(&mut self) -> &mut Trainer {
        &mut self.trainer
    }

    /// Start (or resume) stepping. The first step is due immediately.
    pub fn start(&mut self, now: Instant) {
        self.trainer.start();
        self.next_due = Some(now);
    }

    /// Stop stepping and cancel the pending step before it fires.
    pub fn pause(&mut self) {
        self.trainer.pause();
        self.next_due = None;
    }

    /// Cancel any pending step, then wipe all learned state.
    pub fn reset(&mut self) {
        self.next_due = None;
        self.trainer.reset();
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Run at most one step if the loop is running and its due-instant has
    /// passed, then re-arm. Returns what the step did, if one ran.
    pub fn tick(&mut self, now: Instant) -> Option<StepOutcome> {
        if !self.trainer.is_running() {
            return None;
        }
        match self.next_due {
            Some(due) if now >= due => {
                let outcome = self.trainer.step();
                let delay = if outcome.transition.terminal {
                    self.episode_end_pause
                } else {
                    self.trainer.params().step_delay
                };
                self.next_due = Some(now + delay);
                Some(outcome)
            }
            _ => None,
        }
    }

    /// Run until `episodes` episodes complete, with all delays collapsed to
    /// zero, notifying observers along the way. Leaves the trainer paused.
    pub fn run_episodes(
        &mut self,
        episodes: usize,
        observers: &mut [Box<dyn TrainingObserver>],
    ) -> Result<TrainingRunResult> {
        for observer in observers.iter_mut() {
            observer.on_training_start(episodes)?;
        }

        self.trainer.start();
        let mut completed = Vec::with_capacity(episodes);
        let mut total_steps = 0;

        while completed.len() < episodes {
            let outcome = self.trainer.step();
            total_steps += 1;
            for observer in observers.iter_mut() {
                observer.on_step(&outcome)?;
            }
            if let Some(stat) = outcome.episode_completed {
                for observer in observers.iter_mut() {
                    observer.on_episode_end(&stat)?;
                }
                completed.push(stat);
            }
        }

        self.pause();
        for observer in observers.iter_mut() {
            observer.on_training_end()?;
        }

        Ok(TrainingRunResult {
            episodes: completed,
            total_steps,
        })
    }

    /// Run the interactive schedule on the current thread until `episodes`
    /// episodes complete, honoring the configured delays.
    pub fn run_interactive(
        &mut self,
        episodes: usize,
        observers: &mut [Box<dyn TrainingObserver>],
    ) -> Result<TrainingRunResult> {
        for observer in observers.iter_mut() {
            observer.on_training_start(episodes)?;
        }

        self.start(Instant::now());
        let mut completed = Vec::with_capacity(episodes);
        let mut total_steps = 0;

        while completed.len() < episodes {
            if let Some(due) = self.next_due {
                let now = Instant::now();
                if due > now {
                    thread::sleep(due - now);
                }
            }
            if let Some(outcome) = self.tick(Instant::now()) {
                total_steps += 1;
                for observer in observers.iter_mut() {
                    observer.on_step(&outcome)?;
                }
                if let Some(stat) = outcome.episode_completed {
                    for observer in observers.iter_mut() {
                        observer.on_episode_end(&stat)?;
                    }
                    completed.push(stat);
                }
            }
        }

        self.pause();
        for observer in observers.iter_mut() {
            observer.on_training_end()?;
        }

        Ok(TrainingRunResult {
            episodes: completed,
            total_steps,
        })
    }
}
