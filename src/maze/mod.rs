use std::{
    io::{self, Write},
    ops::{Index, IndexMut},
};

use anyhow::ensure;
use log::{debug, trace, warn};
use rand::{seq::IteratorRandom, thread_rng};
use strum::VariantArray;

use crate::{
    assert_agent_in_bounds,
    env::{DiscreteActionSpace, Environment},
    util::format_matrix,
};

mod cell;
mod config;
mod position;

pub use cell::Cell;
pub use config::MazeConfig;
pub use position::{Move, Position};

/// A rectangular maze holding a single agent
///
/// Cells start out [`Empty`](Cell::Empty) and are laid out by the owner through
/// [`set_cell`](Self::set_cell) or by indexing. The agent starts at the origin and is only
/// ever moved by the owner via [`set_agent`](Self::set_agent) or
/// [`try_set_agent`](Self::try_set_agent): [`possible_actions`](Self::possible_actions)
/// proposes moves but never applies them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    grid: Vec<Cell>,
    rows: usize,
    cols: usize,
    agent: Position,
}

impl Maze {
    /// Create an empty `rows` x `cols` maze with the agent at the origin
    ///
    /// The origin is not checked, so walling it off leaves the agent in an invalid cell.
    ///
    /// **Panics** if either dimension is zero or exceeds `i32::MAX`
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "Invalid maze dimensions {}x{}. Both must be positive.",
            rows,
            cols,
        );
        assert!(
            i32::try_from(rows).is_ok() && i32::try_from(cols).is_ok(),
            "Invalid maze dimensions {}x{}. Both must fit in an i32.",
            rows,
            cols,
        );
        Self {
            grid: vec![Cell::Empty; rows * cols],
            rows,
            cols,
            agent: Position::default(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Current agent position
    pub fn agent(&self) -> Position {
        self.agent
    }

    /// Cell at signed coordinates, or `None` off the grid
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        self.offset(row, col).map(|i| self.grid[i])
    }

    fn offset(&self, row: i32, col: i32) -> Option<usize> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.rows)?;
        let col = usize::try_from(col).ok().filter(|&c| c < self.cols)?;
        Some(row * self.cols + col)
    }

    /// Whether `(row, col)` lies on the grid and is not a [`Wall`](Cell::Wall)
    ///
    /// [`Goal`](Cell::Goal) cells count as in bounds.
    pub fn is_in_bounds(&self, row: i32, col: i32) -> bool {
        self.cell(row, col).is_some_and(Cell::is_traversable)
    }

    pub fn is_position_in_bounds(&self, position: Position) -> bool {
        self.is_in_bounds(position.row, position.col)
    }

    pub fn is_goal(&self, position: Position) -> bool {
        self.cell(position.row, position.col) == Some(Cell::Goal)
    }

    /// All goal positions in row-major order
    pub fn goals(&self) -> Vec<Position> {
        self.positions().filter(|p| self.is_goal(*p)).collect()
    }

    fn positions(&self) -> impl Iterator<Item = Position> {
        // Dimensions fit in an i32, checked in `new`
        let (rows, cols) = (self.rows as i32, self.cols as i32);
        (0..rows).flat_map(move |r| (0..cols).map(move |c| Position::new(r, c)))
    }

    /// Legal neighbours of the agent, in the order left, right, up, down
    ///
    /// The agent's own cell is not checked: from an invalid position the candidates are
    /// still filtered as usual.
    pub fn possible_actions(&self) -> Vec<Position> {
        let actions = Move::VARIANTS
            .iter()
            .map(|&mv| self.agent.step(mv))
            .filter(|&p| self.is_position_in_bounds(p))
            .collect::<Vec<_>>();
        debug!("{} legal moves from {}", actions.len(), self.agent);
        actions
    }

    /// A uniformly random legal neighbour of the agent, if any
    pub fn random_action(&self) -> Option<Position> {
        self.possible_actions().into_iter().choose(&mut thread_rng())
    }

    // Setup entry points below do not validate the agent. A bad placement only
    // surfaces when rendering.

    /// Overwrite a cell
    ///
    /// **Panics** if `(row, col)` is off the grid
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        trace!("cell ({}, {}) = {:?}", row, col, cell);
        self[(row, col)] = cell;
    }

    /// Move the agent without any checks
    pub fn set_agent(&mut self, position: impl Into<Position>) {
        let position = position.into();
        if !self.is_position_in_bounds(position) {
            warn!("Agent placed on an invalid cell at {}", position);
        }
        trace!("agent {} -> {}", self.agent, position);
        self.agent = position;
    }

    /// Move the agent only if the target is on the grid and not a wall
    ///
    /// On error the agent stays where it was.
    pub fn try_set_agent(&mut self, position: impl Into<Position>) -> anyhow::Result<()> {
        let position = position.into();
        let cell = self.cell(position.row, position.col);
        ensure!(
            cell.is_some(),
            "{} is out of bounds for a {}x{} maze",
            position,
            self.rows,
            self.cols
        );
        ensure!(cell != Some(Cell::Wall), "{} is on a Wall", position);
        self.set_agent(position);
        Ok(())
    }

    /// Render the grid as a numeric matrix with the agent's cell shown as
    /// [`Cell::AGENT_MARKER`]
    ///
    /// **Panics** if the agent is out of bounds
    pub fn render(&self) -> String {
        assert_agent_in_bounds!(self);
        let agent = self.offset(self.agent.row, self.agent.col);
        let rows = self
            .grid
            .chunks(self.cols)
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, cell)| {
                        if agent == Some(r * self.cols + c) {
                            Cell::AGENT_MARKER
                        } else {
                            cell.value()
                        }
                    })
                    .collect::<Vec<i8>>()
            })
            .collect::<Vec<_>>();
        format_matrix(&rows)
    }

    /// Write the rendered grid to `out`, followed by a newline
    ///
    /// **Panics** if the agent is out of bounds
    pub fn visualize_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.render())
    }

    /// Print the rendered grid to standard output
    ///
    /// **Panics** if the agent is out of bounds
    pub fn visualize(&self) -> io::Result<()> {
        self.visualize_to(&mut io::stdout().lock())
    }
}

impl Default for Maze {
    fn default() -> Self {
        Self::new(4, 4)
    }
}

impl Index<(usize, usize)> for Maze {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < self.rows && col < self.cols, "Cell ({row}, {col}) is off the grid");
        &self.grid[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Maze {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(row < self.rows && col < self.cols, "Cell ({row}, {col}) is off the grid");
        &mut self.grid[row * self.cols + col]
    }
}

impl Environment for Maze {
    type State = Position;
    type Action = Position;

    fn state(&self) -> Self::State {
        self.agent
    }

    fn is_active(&self) -> bool {
        self.is_position_in_bounds(self.agent)
    }
}

impl DiscreteActionSpace for Maze {
    fn actions(&self) -> Vec<Self::Action> {
        self.possible_actions()
    }
}
