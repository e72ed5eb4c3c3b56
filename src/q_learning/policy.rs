//! Epsilon-greedy action selection

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    grid::{Action, Position},
    ports::ActionSelector,
    q_learning::q_table::QTable,
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Epsilon-greedy policy over a Q-table.
///
/// Explores with probability epsilon, otherwise exploits the argmax with a
/// uniform random choice among tied maxima. The random tie-break matters: at
/// the all-zero initialization every action ties, and always taking the first
/// maximum would bias the agent toward one direction.
#[derive(Debug, Clone)]
pub struct EpsilonGreedyPolicy {
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl EpsilonGreedyPolicy {
    pub fn new() -> Self {
        Self {
            rng: build_rng(None),
            rng_seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    fn greedy_action(&mut self, q_table: &mut QTable, pos: Position) -> Action {
        let values = q_table.values(pos);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let tied: Vec<Action> = Action::ALL
            .iter()
            .copied()
            .filter(|action| values[action.index()] == max)
            .collect();
        *tied.choose(&mut self.rng).unwrap()
    }
}

impl Default for EpsilonGreedyPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionSelector for EpsilonGreedyPolicy {
    fn select(&mut self, q_table: &mut QTable, pos: Position, epsilon: f64) -> Action {
        if self.rng.random::<f64>() < epsilon {
            // Explore: uniformly random action
            *Action::ALL.choose(&mut self.rng).unwrap()
        } else {
            // Exploit: greedy with random tie-breaking
            self.greedy_action(q_table, pos)
        }
    }

    fn reset(&mut self) {
        self.rng = build_rng(self.rng_seed);
    }
}
