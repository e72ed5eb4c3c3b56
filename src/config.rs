//! Hyperparameter configuration and validation

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lower bound epsilon never decays below, so some exploration survives any
/// number of episodes.
pub const EPSILON_FLOOR: f64 = 0.01;

/// Q-learning hyperparameters plus the scheduling delay.
///
/// `step_delay` is consumed only by the scheduling layer; the learning
/// algorithm itself never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperParameters {
    /// Learning rate alpha, in (0, 1].
    pub learning_rate: f64,
    /// Discount factor gamma, in [0, 1).
    pub discount_factor: f64,
    /// Exploration probability, in [0, 1].
    pub epsilon: f64,
    /// Multiplicative epsilon decay per episode, in (0, 1].
    pub epsilon_decay: f64,
    /// Delay between scheduled steps.
    pub step_delay: Duration,
}

impl Default for HyperParameters {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            discount_factor: 0.95,
            epsilon: 1.0,
            epsilon_decay: 0.995,
            step_delay: Duration::from_millis(100),
        }
    }
}

impl HyperParameters {
    /// Validate every field. NaN fails all range checks.
    pub fn validate(&self) -> Result<()> {
        validate_learning_rate(self.learning_rate)?;
        validate_discount_factor(self.discount_factor)?;
        validate_epsilon(self.epsilon)?;
        validate_epsilon_decay(self.epsilon_decay)?;
        Ok(())
    }
}

pub fn validate_learning_rate(value: f64) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(Error::HyperparameterOutOfRange {
            name: "learning_rate",
            value,
            expected: "(0, 1]",
        })
    }
}

pub fn validate_discount_factor(value: f64) -> Result<()> {
    if value >= 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(Error::HyperparameterOutOfRange {
            name: "discount_factor",
            value,
            expected: "[0, 1)",
        })
    }
}

pub fn validate_epsilon(value: f64) -> Result<()> {
    if value >= 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(Error::HyperparameterOutOfRange {
            name: "epsilon",
            value,
            expected: "[0, 1]",
        })
    }
}

pub fn validate_epsilon_decay(value: f64) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(Error::HyperparameterOutOfRange {
            name: "epsilon_decay",
            value,
            expected: "(0, 1]",
        })
    }
}
