use crate::error::{Error, Result};
use crate::grid::{Grid, Position};

/// Walks predecessors from the goal back to the start and returns the path
/// in start-to-goal order, both ends included.
pub fn reconstruct(grid: &Grid) -> Result<Vec<Position>> {
    let (start, goal) = (grid.start(), grid.goal());
    let limit = grid.rows() * grid.cols();

    let mut path = vec![goal];
    let mut current = goal;

    while current != start {
        let previous = grid[current].predecessor.ok_or(Error::NoPathFound {
            start,
            goal,
            broken_at: current,
        })?;

        if path.len() >= limit {
            return Err(Error::InvariantViolation(format!(
                "predecessor chain from {goal} revisits a tile"
            )));
        }

        path.push(previous);
        current = previous;
    }

    path.reverse();
    Ok(path)
}
