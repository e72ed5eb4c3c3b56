//! The grid environment: transition and reward function.
//!
//! `transition` is a pure function of the grid configuration and its inputs.
//! All learning state lives elsewhere.

use serde::{Deserialize, Serialize};

use crate::grid::{Action, CellType, GridConfig, Position};

/// Reward magnitudes used by the transition function.
///
/// The defaults match the classic tuning for this grid (-1 living penalty,
/// -5 collision, +/-100 terminals) and are carried as configuration rather
/// than literals so alternative schemes can be trained without code changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardScheme {
    /// Reward for a plain move onto an empty or start cell.
    pub step_penalty: f64,
    /// Reward for walking into a wall or the grid boundary.
    pub collision_penalty: f64,
    /// Reward for reaching a goal cell.
    pub goal_reward: f64,
    /// Reward for falling into a pit.
    pub pit_penalty: f64,
}

impl Default for RewardScheme {
    fn default() -> Self {
        Self {
            step_penalty: -1.0,
            collision_penalty: -5.0,
            goal_reward: 100.0,
            pit_penalty: -100.0,
        }
    }
}

/// Outcome of applying one action in the environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub next_pos: Position,
    pub reward: f64,
    pub terminal: bool,
}

/// The environment the agent acts in: an immutable grid plus a reward scheme.
#[derive(Debug, Clone)]
pub struct GridEnvironment {
    grid: GridConfig,
    rewards: RewardScheme,
}

impl GridEnvironment {
    pub fn new(grid: GridConfig) -> Self {
        Self {
            grid,
            rewards: RewardScheme::default(),
        }
    }

    pub fn with_rewards(mut self, rewards: RewardScheme) -> Self {
        self.rewards = rewards;
        self
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn rewards(&self) -> &RewardScheme {
        &self.rewards
    }

    pub fn start_pos(&self) -> Position {
        self.grid.start_pos()
    }

    /// Apply `action` at `pos`.
    ///
    /// Out-of-bounds and wall candidates leave the agent in place with the
    /// collision penalty and do not end the episode. Goal and pit cells are
    /// terminal. Everything else costs the living penalty.
    pub fn transition(&self, pos: Position, action: Action) -> Transition {
        let candidate = pos.offset_by(action);

        match self.grid.cell(candidate) {
            None | Some(CellType::Wall) => Transition {
                next_pos: pos,
                reward: self.rewards.collision_penalty,
                terminal: false,
            },
            Some(CellType::Goal) => Transition {
                next_pos: candidate,
                reward: self.rewards.goal_reward,
                terminal: true,
            },
            Some(CellType::Pit) => Transition {
                next_pos: candidate,
                reward: self.rewards.pit_penalty,
                terminal: true,
            },
            Some(CellType::Empty) | Some(CellType::Start) => Transition {
                next_pos: candidate,
                reward: self.rewards.step_penalty,
                terminal: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_env() -> GridEnvironment {
        GridEnvironment::new(GridConfig::default_layout())
    }

    #[test]
    fn test_plain_move_costs_living_penalty() {
        let env = default_env();
        let t = env.transition(Position::new(1, 1), Action::Right);
        assert_eq!(t.next_pos, Position::new(2, 1));
        assert_eq!(t.reward, -1.0);
        assert!(!t.terminal);
    }

    #[test]
    fn test_wall_collision_stays_put() {
        let env = default_env();
        // (1, 1) is adjacent to the border wall on its left and top.
        for action in [Action::Up, Action::Left] {
            let t = env.transition(Position::new(1, 1), action);
            assert_eq!(t.next_pos, Position::new(1, 1));
            assert_eq!(t.reward, -5.0);
            assert!(!t.terminal);
        }
    }

    #[test]
    fn test_boundary_collision_stays_put() {
        use CellType::Empty as E;
        // Borderless 2x1 grid so the boundary itself is what rejects moves.
        let grid = GridConfig::new(2, 1, vec![vec![E, E]], Position::new(0, 0)).unwrap();
        let env = GridEnvironment::new(grid);
        let t = env.transition(Position::new(0, 0), Action::Left);
        assert_eq!(t.next_pos, Position::new(0, 0));
        assert_eq!(t.reward, -5.0);
        assert!(!t.terminal);
    }

    #[test]
    fn test_goal_is_terminal() {
        let env = default_env();
        // Goal at (6, 5), approached from (5, 5).
        let t = env.transition(Position::new(5, 5), Action::Right);
        assert_eq!(t.next_pos, Position::new(6, 5));
        assert_eq!(t.reward, 100.0);
        assert!(t.terminal);
    }

    #[test]
    fn test_pit_is_terminal() {
        let env = default_env();
        // Pit at (6, 1), approached from (5, 1).
        let t = env.transition(Position::new(5, 1), Action::Right);
        assert_eq!(t.next_pos, Position::new(6, 1));
        assert_eq!(t.reward, -100.0);
        assert!(t.terminal);
    }

    #[test]
    fn test_moving_back_onto_start_costs_living_penalty() {
        let env = default_env();
        let t = env.transition(Position::new(2, 1), Action::Left);
        assert_eq!(t.next_pos, Position::new(1, 1));
        assert_eq!(t.reward, -1.0);
        assert!(!t.terminal);
    }

    #[test]
    fn test_custom_reward_scheme() {
        let rewards = RewardScheme {
            step_penalty: -0.5,
            collision_penalty: -2.0,
            goal_reward: 10.0,
            pit_penalty: -10.0,
        };
        let env = GridEnvironment::new(GridConfig::default_layout()).with_rewards(rewards);
        assert_eq!(env.transition(Position::new(1, 1), Action::Right).reward, -0.5);
        assert_eq!(env.transition(Position::new(1, 1), Action::Up).reward, -2.0);
        assert_eq!(env.transition(Position::new(5, 5), Action::Right).reward, 10.0);
        assert_eq!(env.transition(Position::new(5, 1), Action::Right).reward, -10.0);
    }
}
