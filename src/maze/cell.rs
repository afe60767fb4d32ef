use strum::{EnumIter, FromRepr, VariantArray};

/// Contents of a single maze cell
///
/// The discriminants are the numeric values shown when the maze is rendered.
#[derive(EnumIter, VariantArray, FromRepr, Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
#[repr(i8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Goal = 1,
    Wall = -1,
}

impl Cell {
    /// Value written in place of the agent's cell when rendering
    pub const AGENT_MARKER: i8 = 8;

    /// Whether the agent may stand on this cell
    pub fn is_traversable(self) -> bool {
        self != Cell::Wall
    }

    pub fn value(self) -> i8 {
        self as i8
    }
}
