/// Environment traits
pub mod env;

/// Grid maze environment
pub mod maze;

mod util;

pub use maze::{Cell, Maze, MazeConfig, Move, Position};
