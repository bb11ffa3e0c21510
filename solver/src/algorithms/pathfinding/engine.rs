use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::grid::{Grid, Position};

use super::astar::AStar;
use super::dijkstra::Dijkstra;
use super::traits::{PathfindingAlgorithm, SearchReport, Selection, Strategy, Termination};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Finished(Termination),
}

/// Drives the expand/relax/select loop shared by every strategy.
///
/// The engine holds the frontier position itself; the per-tile frontier flag
/// is only kept in sync for readers of the grid.
pub struct SearchEngine<A: PathfindingAlgorithm> {
    algorithm: A,
    frontier: Position,
    iteration_cap: usize,
    iterations: usize,
    relaxations: usize,
    termination: Option<Termination>,
    planning_time: Duration,
}

impl<A: PathfindingAlgorithm> SearchEngine<A> {
    pub fn new(algorithm: A, grid: &Grid, iteration_cap: usize) -> Self {
        Self {
            algorithm,
            frontier: grid.start(),
            iteration_cap,
            iterations: 0,
            relaxations: 0,
            termination: None,
            planning_time: Duration::ZERO,
        }
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Performs one iteration. Once finished, further calls keep returning
    /// the same termination without touching the grid.
    pub fn step(&mut self, grid: &mut Grid) -> Result<Step> {
        if let Some(termination) = self.termination {
            return Ok(Step::Finished(termination));
        }

        let started = Instant::now();
        let step = self.advance(grid);
        self.planning_time += started.elapsed();
        step
    }

    pub fn run(&mut self, grid: &mut Grid) -> Result<SearchReport> {
        self.run_observed(grid, |_, _| {})
    }

    /// runs to completion, calling `observe` with the grid after every
    /// iteration that leaves the search active
    pub fn run_observed(
        &mut self,
        grid: &mut Grid,
        mut observe: impl FnMut(&Grid, usize),
    ) -> Result<SearchReport> {
        log::debug!(
            "running {} from {} to {} (cap {})",
            self.algorithm.name(),
            grid.start(),
            grid.goal(),
            self.iteration_cap
        );

        loop {
            match self.step(grid)? {
                Step::Continue => observe(grid, self.iterations),
                Step::Finished(termination) => {
                    log::debug!(
                        "stopping after {} iterations: {}",
                        self.iterations,
                        termination
                    );
                    return Ok(self.report(termination));
                }
            }
        }
    }

    fn report(&self, termination: Termination) -> SearchReport {
        SearchReport {
            strategy: self.algorithm.strategy(),
            iterations: self.iterations,
            relaxations: self.relaxations,
            termination,
            planning_time: self.planning_time,
        }
    }

    fn advance(&mut self, grid: &mut Grid) -> Result<Step> {
        let current = self.frontier;
        if !grid[current].is_frontier {
            return Err(Error::InvariantViolation(format!(
                "engine frontier {current} is not flagged on the grid"
            )));
        }

        if self.algorithm.reached(grid, current) {
            grid.settle(current);
            return Ok(self.finish(Termination::GoalReached));
        }

        if self.iterations >= self.iteration_cap {
            grid.clear_frontier(current);
            return Ok(self.finish(Termination::IterationLimitExceeded));
        }

        self.iterations += 1;
        log::trace!(
            "iteration {}: expanding {} at {:.2}",
            self.iterations,
            current,
            grid[current].cost
        );

        self.relaxations += self.algorithm.relax(grid, current);
        grid.settle(current);

        match self.algorithm.select(grid) {
            Selection::Next(next) => {
                let tile = &grid[next];
                if !tile.is_open() {
                    return Err(Error::InvariantViolation(format!(
                        "selected {next} as frontier but it is settled or blocked"
                    )));
                }
                grid.mark_frontier(next);
                self.frontier = next;
                Ok(Step::Continue)
            }
            Selection::Finished(termination) => Ok(self.finish(termination)),
        }
    }

    fn finish(&mut self, termination: Termination) -> Step {
        self.termination = Some(termination);
        Step::Finished(termination)
    }
}

/// runs `strategy` on `grid` until it terminates or spends `iteration_cap` iterations
pub fn search(grid: &mut Grid, strategy: Strategy, iteration_cap: usize) -> Result<SearchReport> {
    search_observed(grid, strategy, iteration_cap, |_, _| {})
}

/// [`search`], calling `observe` after every iteration that leaves the search active
pub fn search_observed(
    grid: &mut Grid,
    strategy: Strategy,
    iteration_cap: usize,
    observe: impl FnMut(&Grid, usize),
) -> Result<SearchReport> {
    match strategy {
        Strategy::Dijkstra => {
            let mut engine = SearchEngine::new(Dijkstra::new(grid), grid, iteration_cap);
            engine.run_observed(grid, observe)
        }
        Strategy::AStar => {
            let mut engine = SearchEngine::new(AStar::new(), grid, iteration_cap);
            engine.run_observed(grid, observe)
        }
    }
}
