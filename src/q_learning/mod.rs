//! Tabular Q-learning: the Q-table and the epsilon-greedy policy
//!
//! The Q-table stores a fixed four-slot value vector per visited grid
//! position, initialized lazily to zeros. The policy balances exploration
//! (a uniformly random action with probability epsilon) against exploitation
//! (the argmax over the state's Q-values, ties broken uniformly at random).
//!
//! The Bellman backup itself lives in the trainer, which owns the table and
//! applies one update per step:
//!
//! Q(s,a) <- Q(s,a) + alpha * [r + gamma * max_a' Q(s',a') - Q(s,a)]

pub mod policy;
pub mod q_table;

// Public re-exports
pub use policy::EpsilonGreedyPolicy;
pub use q_table::QTable;
