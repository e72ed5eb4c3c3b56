//! Action-selector port - abstraction over the trainer's policy

use crate::{
    grid::{Action, Position},
    q_learning::QTable,
};

/// Selects the next action given the Q-table, the agent's position, and the
/// current exploration rate.
///
/// The trainer calls this exactly once per step. The Q-table is passed
/// mutably because reading a state lazily initializes its value vector.
/// Implementations must return one of the four grid actions for any input;
/// there is no failure mode.
pub trait ActionSelector: Send {
    fn select(&mut self, q_table: &mut QTable, pos: Position, epsilon: f64) -> Action;

    /// Called on a full trainer reset. Seeded implementations should rewind
    /// their random stream so a reset run is reproducible.
    fn reset(&mut self) {}
}
