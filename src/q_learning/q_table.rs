//! Q-table implementation for tabular Q-learning

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::grid::{Action, Position};

/// Q-table mapping grid positions to per-action value vectors.
///
/// Keys are positions directly rather than formatted strings, and the value
/// side is a fixed-size array, so the "four values per state" invariant is
/// enforced by the type. Entries are created on first access with all
/// actions at 0.0 and only ever removed wholesale by [`QTable::clear`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QTable {
    values: HashMap<Position, [f64; Action::COUNT]>,
}

impl QTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Q-values for a state, lazily initialized to all zeros.
    ///
    /// Repeat calls for the same position return the same underlying entry,
    /// so updates through [`QTable::update`] are visible to later reads.
    pub fn values(&mut self, pos: Position) -> &[f64; Action::COUNT] {
        self.values.entry(pos).or_insert([0.0; Action::COUNT])
    }

    /// Q-value for one state-action pair, lazily initializing the state.
    pub fn value(&mut self, pos: Position, action: Action) -> f64 {
        self.values(pos)[action.index()]
    }

    /// Overwrite one component of a state's value vector.
    ///
    /// The write is a single in-place store, so observers between steps never
    /// see a partially updated vector.
    pub fn update(&mut self, pos: Position, action: Action, value: f64) {
        self.values.entry(pos).or_insert([0.0; Action::COUNT])[action.index()] = value;
    }

    /// Maximum Q-value over all actions in a state, lazily initializing it.
    pub fn max_value(&mut self, pos: Position) -> f64 {
        self.values(pos)
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Read a state's values without inserting, for observers and rendering.
    pub fn peek(&self, pos: Position) -> Option<&[f64; Action::COUNT]> {
        self.values.get(&pos)
    }

    /// Iterate all known states and their value vectors.
    pub fn iter(&self) -> impl Iterator<Item = (&Position, &[f64; Action::COUNT])> {
        self.values.iter()
    }

    /// Discard all entries.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of states with an initialized value vector.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
