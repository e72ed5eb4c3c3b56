//! The trainer: owns all learning state and drives it one step at a time
//!
//! A step is the atomic unit of progress: select an action, apply the
//! environment transition, write back one Bellman update, advance the
//! episode. Steps never fail under a valid grid and configuration. The
//! trainer also enforces the control-surface rules: hyperparameters are
//! validated at the point of mutation, and epsilon is locked while the
//! trainer is running so per-episode decay stays consistent.

pub mod scheduler;
pub mod stats;

pub use scheduler::{EPISODE_END_PAUSE, TrainingLoop, TrainingRunResult};
pub use stats::{EpisodeStat, PositionTrace, STATS_CAPACITY, StatsLog, TRACE_CAPACITY};

use std::time::Duration;

use serde::Serialize;

use crate::{
    config::{self, EPSILON_FLOOR, HyperParameters},
    env::{GridEnvironment, Transition},
    error::{Error, Result},
    grid::{Action, Position},
    ports::ActionSelector,
    q_learning::{EpsilonGreedyPolicy, QTable},
};

/// Whether the trainer is issuing steps or standing still.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrainerPhase {
    Stopped,
    Running,
}

/// Everything a single call to [`Trainer::step`] did.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// Position the action was taken from.
    pub from: Position,
    /// Action the policy selected.
    pub action: Action,
    /// Environment transition that resulted.
    pub transition: Transition,
    /// Q-value written back for (from, action).
    pub updated_value: f64,
    /// Present when this step completed an episode.
    pub episode_completed: Option<EpisodeStat>,
}

/// Read-only view of the trainer for external collaborators (renderer,
/// charts, tutor). Serializable so it can cross any boundary as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct TrainerSnapshot {
    pub position: Position,
    pub episodes_completed: u32,
    pub episode_reward: f64,
    pub running: bool,
    pub params: HyperParameters,
    pub recent_stats: Vec<EpisodeStat>,
    pub trace: Vec<Position>,
}

/// Tabular Q-learning trainer over a grid environment.
///
/// Exclusively owns the Q-table and episode state. External readers observe
/// between steps through the accessors or [`Trainer::snapshot`]; commands go
/// through `start`/`pause`/`reset` and the validated setters.
pub struct Trainer {
    env: GridEnvironment,
    q_table: QTable,
    policy: Box<dyn ActionSelector>,
    params: HyperParameters,
    initial_params: HyperParameters,
    phase: TrainerPhase,
    position: Position,
    episode_reward: f64,
    episodes_completed: u32,
    trace: PositionTrace,
    stats: StatsLog,
}

impl Trainer {
    /// Create a trainer with default hyperparameters and an unseeded
    /// epsilon-greedy policy.
    pub fn new(env: GridEnvironment) -> Self {
        let params = HyperParameters::default();
        let position = env.start_pos();
        Self {
            env,
            q_table: QTable::new(),
            policy: Box::new(EpsilonGreedyPolicy::new()),
            initial_params: params.clone(),
            params,
            phase: TrainerPhase::Stopped,
            position,
            episode_reward: 0.0,
            episodes_completed: 0,
            trace: PositionTrace::new(),
            stats: StatsLog::new(),
        }
    }

    /// Use validated hyperparameters. These also become the values restored
    /// by [`Trainer::reset`].
    pub fn with_params(mut self, params: HyperParameters) -> Result<Self> {
        params.validate()?;
        self.params = params.clone();
        self.initial_params = params;
        Ok(self)
    }

    /// Seed the epsilon-greedy policy for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.policy = Box::new(EpsilonGreedyPolicy::new().with_seed(seed));
        self
    }

    /// Substitute a custom action selector.
    pub fn with_policy(mut self, policy: Box<dyn ActionSelector>) -> Self {
        self.policy = policy;
        self
    }

    // --- Control surface ---

    pub fn start(&mut self) {
        self.phase = TrainerPhase::Running;
    }

    /// Stop issuing steps. The in-progress episode's state is preserved, so
    /// a later `start` resumes the same episode.
    pub fn pause(&mut self) {
        self.phase = TrainerPhase::Stopped;
    }

    /// Force-stop and wipe everything learned: Q-table, stats, episode
    /// counter, episode-local state. Hyperparameters return to the values
    /// configured at construction.
    pub fn reset(&mut self) {
        self.phase = TrainerPhase::Stopped;
        self.q_table.clear();
        self.stats.clear();
        self.episodes_completed = 0;
        self.params = self.initial_params.clone();
        self.policy.reset();
        self.reset_episode();
    }

    pub fn is_running(&self) -> bool {
        self.phase == TrainerPhase::Running
    }

    // --- Hyperparameter setters, validated at the point of mutation ---

    pub fn set_learning_rate(&mut self, value: f64) -> Result<()> {
        config::validate_learning_rate(value)?;
        self.params.learning_rate = value;
        Ok(())
    }

    pub fn set_discount_factor(&mut self, value: f64) -> Result<()> {
        config::validate_discount_factor(value)?;
        self.params.discount_factor = value;
        Ok(())
    }

    /// Epsilon is locked while running so external edits cannot fight the
    /// per-episode decay.
    pub fn set_epsilon(&mut self, value: f64) -> Result<()> {
        if self.is_running() {
            return Err(Error::EpsilonLocked);
        }
        config::validate_epsilon(value)?;
        self.params.epsilon = value;
        Ok(())
    }

    pub fn set_epsilon_decay(&mut self, value: f64) -> Result<()> {
        config::validate_epsilon_decay(value)?;
        self.params.epsilon_decay = value;
        Ok(())
    }

    pub fn set_step_delay(&mut self, delay: Duration) {
        self.params.step_delay = delay;
    }

    // --- One atomic step ---

    /// Run one step: select, transition, Bellman backup, advance.
    ///
    /// The scheduling layer gates stepping on the running flag; calling this
    /// directly (tests, manual single-stepping) is always well-defined.
    pub fn step(&mut self) -> StepOutcome {
        let from = self.position;
        let action = self.policy.select(&mut self.q_table, from, self.params.epsilon);
        let transition = self.env.transition(from, action);

        // Q(s,a) <- Q(s,a) + alpha * [r + gamma * max_a' Q(s',a') - Q(s,a)]
        let current = self.q_table.value(from, action);
        let max_next = self.q_table.max_value(transition.next_pos);
        let target = transition.reward
            + if transition.terminal {
                0.0
            } else {
                self.params.discount_factor * max_next
            };
        let updated_value = current + self.params.learning_rate * (target - current);
        self.q_table.update(from, action, updated_value);

        self.position = transition.next_pos;
        self.episode_reward += transition.reward;
        self.trace.push(transition.next_pos);

        let episode_completed = if transition.terminal {
            let stat = EpisodeStat {
                episode: self.episodes_completed + 1,
                total_reward: self.episode_reward,
                epsilon: self.params.epsilon,
            };
            self.stats.push(stat.clone());
            self.episodes_completed += 1;
            self.params.epsilon =
                (self.params.epsilon * self.params.epsilon_decay).max(EPSILON_FLOOR);
            self.reset_episode();
            Some(stat)
        } else {
            None
        };

        StepOutcome {
            from,
            action,
            transition,
            updated_value,
            episode_completed,
        }
    }

    fn reset_episode(&mut self) {
        self.position = self.env.start_pos();
        self.episode_reward = 0.0;
        self.trace.clear();
    }

    // --- Read access for observers ---

    pub fn env(&self) -> &GridEnvironment {
        &self.env
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn episode_reward(&self) -> f64 {
        self.episode_reward
    }

    pub fn episodes_completed(&self) -> u32 {
        self.episodes_completed
    }

    pub fn params(&self) -> &HyperParameters {
        &self.params
    }

    pub fn epsilon(&self) -> f64 {
        self.params.epsilon
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    pub fn stats(&self) -> &StatsLog {
        &self.stats
    }

    pub fn trace(&self) -> &PositionTrace {
        &self.trace
    }

    /// Assemble the read-only snapshot consumed by external collaborators.
    pub fn snapshot(&self) -> TrainerSnapshot {
        TrainerSnapshot {
            position: self.position,
            episodes_completed: self.episodes_completed,
            episode_reward: self.episode_reward,
            running: self.is_running(),
            params: self.params.clone(),
            recent_stats: self.stats.iter().cloned().collect(),
            trace: self.trace.iter().copied().collect(),
        }
    }
}
