/// Asserts that a maze's agent stands on a traversable cell and panics with a
/// helpful message if not
///
/// ### Example
/// ```should_panic
/// use maze_env::{assert_agent_in_bounds, Cell, Maze};
///
/// let mut maze = Maze::new(2, 2);
/// maze.set_cell(0, 0, Cell::Wall);
/// assert_agent_in_bounds!(maze);
/// ```
/// This will panic with the message "Agent is out of bounds at Position(0, 0) in a 2x2 maze."
#[macro_export]
macro_rules! assert_agent_in_bounds {
    ($maze:expr) => {
        assert!(
            $maze.is_position_in_bounds($maze.agent()),
            "Agent is out of bounds at {} in a {}x{} maze.",
            $maze.agent(),
            $maze.rows(),
            $maze.cols(),
        );
    };
}

/// Right-align every entry of a numeric matrix to a common width, in the layout of
/// a printed 2D array: `[[a b]\n [c d]]`
pub fn format_matrix(rows: &[Vec<i8>]) -> String {
    let width = rows
        .iter()
        .flatten()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(0);

    let lines = rows
        .iter()
        .map(|row| {
            let cells = row
                .iter()
                .map(|v| format!("{:>width$}", v))
                .collect::<Vec<_>>()
                .join(" ");
            format!("[{}]", cells)
        })
        .collect::<Vec<_>>();

    format!("[{}]", lines.join("\n "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_alignment() {
        assert_eq!(
            format_matrix(&[vec![8, -1], vec![0, 1]]),
            "[[ 8 -1]\n [ 0  1]]",
            "Entries padded to widest value"
        );
        assert_eq!(
            format_matrix(&[vec![0, 8]]),
            "[[0 8]]",
            "No padding when all entries share a width"
        );
        assert_eq!(format_matrix(&[]), "[]", "Empty matrix");
    }
}
