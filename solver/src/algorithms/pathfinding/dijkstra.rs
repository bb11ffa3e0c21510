use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::grid::{Grid, Position};

use super::traits::{PathfindingAlgorithm, Selection, Strategy, Termination};

#[derive(Copy, Clone, Debug)]
struct State {
    cost: f64,
    index: usize,
    position: Position,
}

// min-heap on cost, ties go to the lowest row-major index so the pick
// matches a first-found linear scan over the unvisited tiles
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

/// Uniform-cost search over the whole board.
///
/// Runs until every open tile is settled rather than stopping once the goal
/// settles, so the cost table ends up holding the true distance from the
/// start for every reachable tile. The goal's predecessor comes from
/// ordinary relaxation like any other tile.
pub struct Dijkstra {
    heap: BinaryHeap<State>,
    remaining: usize,
    cols: usize,
}

impl Dijkstra {
    pub fn new(grid: &Grid) -> Self {
        Self {
            heap: BinaryHeap::new(),
            remaining: grid.unvisited_open_tiles().count(),
            cols: grid.cols(),
        }
    }

    /// pops until a live entry turns up; entries for settled tiles or
    /// superseded costs are skipped
    fn pop_live(&mut self, grid: &Grid) -> Option<Position> {
        while let Some(State { cost, position, .. }) = self.heap.pop() {
            let tile = &grid[position];
            if tile.visited || cost != tile.cost {
                continue;
            }
            return Some(position);
        }
        None
    }
}

impl PathfindingAlgorithm for Dijkstra {
    fn relax(&mut self, grid: &mut Grid, current: Position) -> usize {
        let current_cost = grid[current].cost;
        let mut relaxed = 0;

        for neighbor in grid.neighbors(current) {
            let tile = grid.tile_mut(neighbor);
            if !tile.is_open() {
                continue;
            }

            let through = current_cost + current.step_distance(neighbor);
            log::trace!("  {} through {}: {:.2}", neighbor, current, through);

            if through < tile.cost {
                tile.cost = through;
                tile.predecessor = Some(current);
                relaxed += 1;

                self.heap.push(State {
                    cost: through,
                    index: neighbor.to_index(self.cols),
                    position: neighbor,
                });
            }
        }

        relaxed
    }

    fn select(&mut self, grid: &Grid) -> Selection {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            return Selection::Finished(Termination::GoalReached);
        }

        match self.pop_live(grid) {
            Some(next) => Selection::Next(next),
            // everything left is unreachable; fine as long as the goal got settled
            None if grid[grid.goal()].visited => Selection::Finished(Termination::GoalReached),
            None => Selection::Finished(Termination::Stuck),
        }
    }

    fn strategy(&self) -> Strategy {
        Strategy::Dijkstra
    }
}
