//! Train command - run headless Q-learning over the default grid

use std::{fs::File, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    cli::{
        observers::{JsonlObserver, ProgressObserver},
        output,
    },
    config::HyperParameters,
    env::GridEnvironment,
    grid::GridConfig,
    ports::TrainingObserver,
    trainer::{Trainer, TrainingLoop, TrainingRunResult},
};

#[derive(Parser, Debug)]
#[command(about = "Train the agent on the default grid")]
pub struct TrainArgs {
    /// Number of episodes to train
    #[arg(long, short = 'e', default_value_t = 500)]
    pub episodes: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Learning rate alpha, in (0, 1]
    #[arg(long, default_value_t = 0.1)]
    pub learning_rate: f64,

    /// Discount factor gamma, in [0, 1)
    #[arg(long, default_value_t = 0.95)]
    pub discount_factor: f64,

    /// Initial exploration rate, in [0, 1]
    #[arg(long, default_value_t = 1.0)]
    pub epsilon: f64,

    /// Multiplicative epsilon decay per episode, in (0, 1]
    #[arg(long, default_value_t = 0.995)]
    pub epsilon_decay: f64,

    /// Inter-step delay in milliseconds (0 runs as fast as possible)
    #[arg(long, default_value_t = 0)]
    pub step_delay_ms: u64,

    /// Write per-episode stats as JSON lines to this file
    #[arg(long)]
    pub stats_out: Option<PathBuf>,

    /// Write a JSON training summary to this file
    #[arg(long)]
    pub summary_out: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Debug, Serialize)]
struct TrainingSummary {
    episodes: usize,
    total_steps: usize,
    final_epsilon: f64,
    states_visited: usize,
    first_episode_reward: Option<f64>,
    best_episode_reward: Option<f64>,
    mean_reward_last_50: Option<f64>,
    seed: Option<u64>,
    params: HyperParameters,
}

fn summarize(
    args: &TrainArgs,
    result: &TrainingRunResult,
    trainer: &Trainer,
    params: HyperParameters,
) -> TrainingSummary {
    let rewards: Vec<f64> = result.episodes.iter().map(|s| s.total_reward).collect();
    let last_50 = &rewards[rewards.len().saturating_sub(50)..];
    let mean_last_50 = if last_50.is_empty() {
        None
    } else {
        Some(last_50.iter().sum::<f64>() / last_50.len() as f64)
    };

    TrainingSummary {
        episodes: result.episodes.len(),
        total_steps: result.total_steps,
        final_epsilon: trainer.epsilon(),
        states_visited: trainer.q_table().len(),
        first_episode_reward: rewards.first().copied(),
        best_episode_reward: rewards.iter().copied().reduce(f64::max),
        mean_reward_last_50: mean_last_50,
        seed: args.seed,
        params,
    }
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let params = HyperParameters {
        learning_rate: args.learning_rate,
        discount_factor: args.discount_factor,
        epsilon: args.epsilon,
        epsilon_decay: args.epsilon_decay,
        step_delay: Duration::from_millis(args.step_delay_ms),
    };

    let env = GridEnvironment::new(GridConfig::default_layout());
    let mut trainer = Trainer::new(env).with_params(params.clone())?;
    if let Some(seed) = args.seed {
        trainer = trainer.with_seed(seed);
    }
    let mut training_loop = TrainingLoop::new(trainer);

    let mut observers: Vec<Box<dyn TrainingObserver>> = Vec::new();
    if !args.no_progress {
        observers.push(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.stats_out {
        observers.push(Box::new(JsonlObserver::create(path)?));
    }

    let result = if args.step_delay_ms > 0 {
        training_loop.run_interactive(args.episodes, &mut observers)?
    } else {
        training_loop.run_episodes(args.episodes, &mut observers)?
    };

    let summary = summarize(&args, &result, training_loop.trainer(), params);

    output::print_section("Training Summary");
    output::print_kv("Episodes", &summary.episodes.to_string());
    output::print_kv("Total steps", &summary.total_steps.to_string());
    output::print_kv("Final epsilon", &format!("{:.4}", summary.final_epsilon));
    output::print_kv("States visited", &summary.states_visited.to_string());
    if let Some(first) = summary.first_episode_reward {
        output::print_kv("First episode reward", &format!("{first:.0}"));
    }
    if let Some(best) = summary.best_episode_reward {
        output::print_kv("Best episode reward", &format!("{best:.0}"));
    }
    if let Some(mean) = summary.mean_reward_last_50 {
        output::print_kv("Mean reward (last 50)", &format!("{mean:.1}"));
    }

    if let Some(path) = &args.summary_out {
        let file = File::create(path)
            .with_context(|| format!("failed to create summary file {}", path.display()))?;
        to_writer_pretty(file, &summary).context("failed to write training summary")?;
        println!("\nSummary written to {}", path.display());
    }

    Ok(())
}
