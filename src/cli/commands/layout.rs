//! Layout command - print the default grid and reward scheme

use anyhow::Result;

use crate::{
    cli::output,
    env::RewardScheme,
    grid::{CellType, GridConfig},
};

fn cell_char(cell: CellType) -> char {
    match cell {
        CellType::Empty => '.',
        CellType::Wall => '#',
        CellType::Start => 'S',
        CellType::Goal => 'G',
        CellType::Pit => 'X',
    }
}

pub fn execute() -> Result<()> {
    let grid = GridConfig::default_layout();
    let rewards = RewardScheme::default();

    output::print_section("Default Grid");
    for row in grid.rows() {
        let line: String = row.iter().map(|&cell| cell_char(cell)).collect();
        println!("  {line}");
    }
    println!("\n  S = start, G = goal, X = pit, # = wall");

    output::print_section("Reward Scheme");
    output::print_kv("Step", &format!("{:.0}", rewards.step_penalty));
    output::print_kv("Collision", &format!("{:.0}", rewards.collision_penalty));
    output::print_kv("Goal", &format!("{:+.0}", rewards.goal_reward));
    output::print_kv("Pit", &format!("{:.0}", rewards.pit_penalty));

    Ok(())
}
