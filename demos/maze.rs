use std::error::Error;

use maze_env::{Maze, MazeConfig, Position};

/// Goal in the far corner with four walls scattered around it
fn test_maze() -> anyhow::Result<Maze> {
    MazeConfig {
        goals: vec![(3, 3)],
        walls: vec![(1, 1), (2, 2), (0, 1), (3, 0)],
        ..Default::default()
    }
    .build()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut maze = test_maze()?;
    maze.set_agent(maze.agent().vertical_move(-1));
    maze.visualize()?;

    let actions = maze
        .possible_actions()
        .iter()
        .map(Position::to_string)
        .collect::<Vec<_>>();
    println!("[{}]", actions.join(", "));

    Ok(())
}
