//! Shared test helpers

use gridlab::{Action, Position, QTable, ports::ActionSelector};

/// Selector that replays a fixed action sequence, cycling when exhausted.
pub struct ScriptedSelector {
    actions: Vec<Action>,
    next: usize,
}

impl ScriptedSelector {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions, next: 0 }
    }
}

impl ActionSelector for ScriptedSelector {
    fn select(&mut self, _q_table: &mut QTable, _pos: Position, _epsilon: f64) -> Action {
        let action = self.actions[self.next % self.actions.len()];
        self.next += 1;
        action
    }
}
