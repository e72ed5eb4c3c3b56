//! Trainer lifecycle: reset, pause/resume, stats bounds, epsilon locking

mod common;

use std::time::{Duration, Instant};

use common::ScriptedSelector;
use gridlab::{
    Action, EPSILON_FLOOR, GridConfig, GridEnvironment, HyperParameters, Position, Trainer,
    TrainingLoop,
};

/// Every episode under this selector is the same five-step walk from the
/// start at (1, 1) into the pit at (6, 1).
fn pit_walker() -> Trainer {
    Trainer::new(GridEnvironment::new(GridConfig::default_layout()))
        .with_policy(Box::new(ScriptedSelector::new(vec![Action::Right])))
}

#[test]
fn stats_log_holds_at_most_50_episodes() {
    let mut training_loop = TrainingLoop::new(pit_walker());
    training_loop.run_episodes(51, &mut []).unwrap();

    let trainer = training_loop.trainer();
    assert_eq!(trainer.episodes_completed(), 51);
    assert_eq!(trainer.stats().len(), 50);
    // Episode 1 was evicted; the oldest retained stat is episode 2.
    assert_eq!(trainer.stats().iter().next().unwrap().episode, 2);
    assert_eq!(trainer.stats().latest().unwrap().episode, 51);
}

#[test]
fn reset_restores_pristine_state() {
    let mut training_loop = TrainingLoop::new(pit_walker());
    training_loop.run_episodes(10, &mut []).unwrap();
    training_loop.trainer_mut().set_learning_rate(0.9).unwrap();
    training_loop.reset();

    let trainer = training_loop.trainer();
    assert!(!trainer.is_running());
    assert!(trainer.q_table().is_empty());
    assert!(trainer.stats().is_empty());
    assert_eq!(trainer.episodes_completed(), 0);
    assert_eq!(*trainer.params(), HyperParameters::default());
    assert_eq!(trainer.position(), Position::new(1, 1));
    assert_eq!(trainer.episode_reward(), 0.0);
    assert!(trainer.trace().is_empty());
}

#[test]
fn epsilon_floor_survives_any_number_of_episodes() {
    let mut training_loop = TrainingLoop::new(pit_walker());
    training_loop.trainer_mut().set_epsilon_decay(0.5).unwrap();
    training_loop.run_episodes(200, &mut []).unwrap();
    assert_eq!(training_loop.trainer().epsilon(), EPSILON_FLOOR);
}

#[test]
fn epsilon_edits_are_locked_while_running() {
    let mut trainer = pit_walker();
    trainer.start();
    assert!(trainer.set_epsilon(0.3).is_err());
    assert_eq!(trainer.epsilon(), 1.0);

    // Other hyperparameters stay editable mid-run.
    trainer.set_learning_rate(0.2).unwrap();
    trainer.set_discount_factor(0.9).unwrap();
    trainer.set_step_delay(Duration::from_millis(5));

    trainer.pause();
    trainer.set_epsilon(0.3).unwrap();
    assert_eq!(trainer.epsilon(), 0.3);
}

#[test]
fn pause_cancels_pending_step_and_resume_continues_episode() {
    let mut training_loop = TrainingLoop::new(pit_walker());
    let now = Instant::now();
    training_loop.start(now);

    // Two steps of the walk, then pause mid-episode.
    training_loop.tick(now).unwrap();
    let second_due = training_loop.next_due().unwrap();
    training_loop.tick(second_due).unwrap();
    training_loop.pause();

    assert!(training_loop.next_due().is_none());
    assert!(training_loop.tick(now + Duration::from_secs(60)).is_none());
    assert_eq!(training_loop.trainer().position(), Position::new(3, 1));
    assert_eq!(training_loop.trainer().episode_reward(), -2.0);

    // Resuming continues the same episode rather than restarting it.
    let later = now + Duration::from_secs(120);
    training_loop.start(later);
    training_loop.tick(later).unwrap();
    assert_eq!(training_loop.trainer().position(), Position::new(4, 1));
    assert_eq!(training_loop.trainer().episode_reward(), -3.0);
}

#[test]
fn snapshot_serializes_to_json() {
    let mut training_loop = TrainingLoop::new(pit_walker());
    training_loop.run_episodes(3, &mut []).unwrap();

    let snapshot = training_loop.trainer().snapshot();
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["episodes_completed"], 3);
    assert_eq!(json["running"], false);
    assert_eq!(json["recent_stats"].as_array().unwrap().len(), 3);
}
