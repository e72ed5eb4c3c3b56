//! Transition function properties over the default grid
//!
//! Checks the reward contract exhaustively: collisions leave the agent in
//! place at -5 without ending the episode, plain moves cost -1, and goal/pit
//! cells terminate at +100/-100 regardless of approach direction.

use gridlab::{Action, CellType, GridConfig, GridEnvironment, Position};

fn non_wall_positions(env: &GridEnvironment) -> Vec<Position> {
    let grid = env.grid();
    let mut positions = Vec::new();
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let pos = Position::new(x, y);
            if grid.cell(pos) != Some(CellType::Wall) {
                positions.push(pos);
            }
        }
    }
    positions
}

#[test]
fn collisions_stay_in_place_with_penalty() {
    let env = GridEnvironment::new(GridConfig::default_layout());
    for pos in non_wall_positions(&env) {
        for action in Action::ALL {
            let candidate = pos.offset_by(action);
            let hits_wall = matches!(env.grid().cell(candidate), None | Some(CellType::Wall));
            if hits_wall {
                let t = env.transition(pos, action);
                assert_eq!(t.next_pos, pos, "collision must not move the agent");
                assert_eq!(t.reward, -5.0);
                assert!(!t.terminal, "collisions never end the episode");
            }
        }
    }
}

#[test]
fn plain_moves_cost_living_penalty() {
    let env = GridEnvironment::new(GridConfig::default_layout());
    for pos in non_wall_positions(&env) {
        for action in Action::ALL {
            let candidate = pos.offset_by(action);
            if matches!(
                env.grid().cell(candidate),
                Some(CellType::Empty) | Some(CellType::Start)
            ) {
                let t = env.transition(pos, action);
                assert_eq!(t.next_pos, candidate);
                assert_eq!(t.reward, -1.0);
                assert!(!t.terminal);
            }
        }
    }
}

#[test]
fn terminal_cells_end_the_episode_from_any_direction() {
    let env = GridEnvironment::new(GridConfig::default_layout());
    for pos in non_wall_positions(&env) {
        for action in Action::ALL {
            let candidate = pos.offset_by(action);
            match env.grid().cell(candidate) {
                Some(CellType::Goal) => {
                    let t = env.transition(pos, action);
                    assert_eq!(t.reward, 100.0);
                    assert!(t.terminal);
                }
                Some(CellType::Pit) => {
                    let t = env.transition(pos, action);
                    assert_eq!(t.reward, -100.0);
                    assert!(t.terminal);
                }
                _ => {}
            }
        }
    }
}

#[test]
fn transition_is_pure() {
    let env = GridEnvironment::new(GridConfig::default_layout());
    let pos = Position::new(1, 1);
    let first = env.transition(pos, Action::Right);
    for _ in 0..10 {
        assert_eq!(env.transition(pos, Action::Right), first);
    }
}
