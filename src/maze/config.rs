use anyhow::{bail, Context};

use super::{Cell, Maze, Position};

/// Configuration for building a [`Maze`] in one go
///
/// Cells listed in `goals` and `walls` are applied in that order, so a coordinate present
/// in both ends up a wall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    pub goals: Vec<(usize, usize)>,
    pub walls: Vec<(usize, usize)>,
    pub start: Position,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            goals: Vec::new(),
            walls: Vec::new(),
            start: Position::default(),
        }
    }
}

impl MazeConfig {
    /// Build the maze, rejecting zero dimensions, cells off the grid and a start position
    /// that is off the grid or walled
    pub fn build(&self) -> anyhow::Result<Maze> {
        if self.rows == 0 || self.cols == 0 {
            bail!("Invalid maze dimensions {}x{}", self.rows, self.cols);
        }
        if i32::try_from(self.rows).is_err() || i32::try_from(self.cols).is_err() {
            bail!(
                "Invalid maze dimensions {}x{}. Both must fit in an i32.",
                self.rows,
                self.cols
            );
        }

        let mut maze = Maze::new(self.rows, self.cols);
        let cells = self
            .goals
            .iter()
            .map(|&rc| (rc, Cell::Goal))
            .chain(self.walls.iter().map(|&rc| (rc, Cell::Wall)));
        for ((row, col), cell) in cells {
            if row >= self.rows || col >= self.cols {
                bail!(
                    "{:?} at ({}, {}) is off the {}x{} grid",
                    cell,
                    row,
                    col,
                    self.rows,
                    self.cols
                );
            }
            maze.set_cell(row, col, cell);
        }

        maze.try_set_agent(self.start).context("Invalid start position")?;
        Ok(maze)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_four_by_four() {
        let maze = MazeConfig::default().build().unwrap();
        assert_eq!(maze, Maze::default(), "Same as a default maze");
    }

    #[test]
    fn layout_applied() {
        let config = MazeConfig {
            goals: vec![(3, 3), (1, 1)],
            walls: vec![(1, 1), (2, 2), (0, 1), (3, 0)],
            start: Position::new(1, 0),
            ..Default::default()
        };
        let maze = config.build().unwrap();
        assert_eq!(maze[(3, 3)], Cell::Goal);
        assert_eq!(maze[(1, 1)], Cell::Wall, "Walls override goals");
        assert_eq!(maze.agent(), Position::new(1, 0));
        assert_eq!(maze.goals(), [Position::new(3, 3)]);
    }

    #[test]
    fn rejects_bad_layouts() {
        let off_grid = MazeConfig {
            walls: vec![(0, 4)],
            ..Default::default()
        };
        assert!(off_grid.build().is_err(), "Wall off the grid");

        let walled_start = MazeConfig {
            walls: vec![(0, 0)],
            ..Default::default()
        };
        let err = walled_start.build().unwrap_err();
        assert!(
            format!("{err:#}").contains("Wall"),
            "Walled origin rejected: {err:#}"
        );

        let empty = MazeConfig {
            rows: 0,
            ..Default::default()
        };
        assert!(empty.build().is_err(), "Zero rows rejected before construction");

        let huge = MazeConfig {
            cols: i32::MAX as usize + 1,
            ..Default::default()
        };
        let err = huge.build().unwrap_err();
        assert!(err.to_string().contains("i32"), "Oversized cols rejected: {err}");
    }
}
