use crate::algorithms::pathfinding::{self, SearchReport, Strategy};
use crate::config::GridConfig;
use crate::error::Result;
use crate::grid::{Grid, Position};
use crate::render;

/// a finished run: the searched grid, how the search ended, and the path
/// when the goal was reached
#[derive(Debug, Clone)]
pub struct Solution {
    pub grid: Grid,
    pub report: SearchReport,
    pub path: Option<Vec<Position>>,
}

/// Builds a grid from `config`, searches it with `strategy` and, on success,
/// reconstructs the path.
///
/// `Stuck` and `IterationLimitExceeded` come back as a solution without a
/// path; only configuration problems and broken invariants are errors.
pub fn solve(config: &GridConfig, strategy: Strategy) -> Result<Solution> {
    let mut grid = Grid::new(config)?;

    log::debug!(
        "{}x{} grid: {} -> {}",
        grid.rows(),
        grid.cols(),
        grid.start(),
        grid.goal()
    );

    let observe = |grid: &Grid, iteration: usize| {
        if config.show_iterations {
            log::info!("iteration {}:\n{}", iteration, render::render_costs(grid));
        }
    };
    let report = pathfinding::search_observed(&mut grid, strategy, config.iteration_cap, observe)?;

    let path = if report.termination.is_success() {
        let path = pathfinding::reconstruct(&grid)?;
        log::debug!(
            "planned {} steps in {:?}",
            path.len().saturating_sub(1),
            report.planning_time
        );
        Some(path)
    } else {
        log::warn!(
            "{} stopped after {} iterations: {}",
            strategy,
            report.iterations,
            report.termination
        );
        None
    };

    Ok(Solution { grid, report, path })
}
