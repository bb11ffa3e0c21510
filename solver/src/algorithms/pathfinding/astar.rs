use crate::grid::{Grid, Position, TileKind};

use super::traits::{PathfindingAlgorithm, Selection, Strategy, Termination};

/// Greedy best-first walk ranked by step cost plus straight-line distance.
///
/// Differs from textbook A* in two ways that are kept on purpose: every
/// unvisited neighbor gets its cost and predecessor overwritten on each
/// visit, whether or not the new value is an improvement, and the stored
/// cost accumulates the heuristic of every tile along the walk. Only the
/// neighbors of the current tile compete for the next frontier, so the walk
/// never backtracks.
#[derive(Default)]
pub struct AStar {
    candidates: Vec<(f64, Position)>,
}

impl AStar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathfindingAlgorithm for AStar {
    fn reached(&self, grid: &Grid, current: Position) -> bool {
        current == grid.goal()
    }

    fn relax(&mut self, grid: &mut Grid, current: Position) -> usize {
        let current_cost = grid[current].cost;
        let goal = grid.goal();
        self.candidates.clear();

        for neighbor in grid.neighbors(current) {
            let tile = grid.tile_mut(neighbor);
            if tile.visited || !matches!(tile.kind, TileKind::Empty | TileKind::Goal) {
                continue;
            }

            let heuristic = neighbor.euclidean_distance(goal);
            let candidate = current_cost + current.step_distance(neighbor) + heuristic;

            tile.heuristic = heuristic;
            tile.cost = candidate;
            tile.predecessor = Some(current);
            self.candidates.push((candidate, neighbor));
        }

        log::trace!("  candidates: {:?}", self.candidates);
        self.candidates.len()
    }

    fn select(&mut self, _grid: &Grid) -> Selection {
        // first minimum in neighbor order wins ties
        let best = self
            .candidates
            .iter()
            .copied()
            .reduce(|best, candidate| {
                if candidate.0 < best.0 {
                    candidate
                } else {
                    best
                }
            });

        match best {
            Some((cost, next)) => {
                log::trace!("  selecting {} at {:.4}", next, cost);
                Selection::Next(next)
            }
            None => Selection::Finished(Termination::Stuck),
        }
    }

    fn strategy(&self) -> Strategy {
        Strategy::AStar
    }
}
