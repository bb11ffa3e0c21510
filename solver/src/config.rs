//! Board configuration.
//!
//! A [`GridConfig`] carries everything needed to build a [`Grid`](crate::grid::Grid)
//! and bound a search over it. Configs come from presets, TOML files, or the
//! command line, in increasing order of precedence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Error, Result};
use crate::grid::Position;

pub const DEFAULT_ITERATION_CAP: usize = 10_000;

const RIDGE_TREES: [[usize; 2]; 10] = [
    [2, 2],
    [2, 3],
    [3, 3],
    [3, 4],
    [3, 5],
    [4, 5],
    [4, 6],
    [4, 7],
    [5, 7],
    [5, 8],
];

const CLUSTER_TREES: [[usize; 2]; 20] = [
    [1, 5],
    [1, 6],
    [2, 5],
    [2, 6],
    [2, 7],
    [3, 6],
    [3, 7],
    [3, 8],
    [4, 5],
    [4, 6],
    [4, 7],
    [4, 8],
    [5, 4],
    [5, 5],
    [5, 6],
    [6, 3],
    [6, 4],
    [6, 5],
    [7, 3],
    [7, 4],
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Position,
    pub goal: Position,
    pub obstacles: Vec<Position>,
    /// upper bound on expansions before the search gives up
    pub iteration_cap: usize,
    /// dump the cost table after every iteration
    pub show_iterations: bool,
}

impl Default for GridConfig {
    /// the 11x11 ridge board
    fn default() -> Self {
        Self::ridge()
    }
}

impl GridConfig {
    /// obstacle-free board with the given shape, start in one corner and
    /// goal in the opposite one
    pub fn open(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            start: Position::new(0, 0),
            goal: Position::new(rows.saturating_sub(1), cols.saturating_sub(1)),
            obstacles: Vec::new(),
            iteration_cap: DEFAULT_ITERATION_CAP,
            show_iterations: false,
        }
    }

    /// 11x11 board with a diagonal ridge of trees across the direct route
    pub fn ridge() -> Self {
        Self::open(11, 11).with_obstacles(RIDGE_TREES.map(Position::from))
    }

    /// 11x11 board with a dense cluster of trees in the middle
    pub fn cluster() -> Self {
        Self::open(11, 11).with_obstacles(CLUSTER_TREES.map(Position::from))
    }

    pub fn with_endpoints(mut self, start: Position, goal: Position) -> Self {
        self.start = start;
        self.goal = goal;
        self
    }

    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = Position>) -> Self {
        self.obstacles = obstacles.into_iter().collect();
        self
    }

    pub fn with_iteration_cap(mut self, iteration_cap: usize) -> Self {
        self.iteration_cap = iteration_cap;
        self
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents)?;
        log::debug!("loaded board config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let bounds = self.bounds();
        if !self.start.in_bounds(bounds) {
            return Err(ConfigError::StartOutOfBounds(self.start));
        }
        if !self.goal.in_bounds(bounds) {
            return Err(ConfigError::GoalOutOfBounds(self.goal));
        }
        if self.start == self.goal {
            return Err(ConfigError::StartIsGoal(self.start));
        }

        for &obstacle in &self.obstacles {
            if !obstacle.in_bounds(bounds) {
                return Err(ConfigError::ObstacleOutOfBounds(obstacle));
            }
            if obstacle == self.start || obstacle == self.goal {
                return Err(ConfigError::ObstacleOnEndpoint(obstacle));
            }
        }

        if self.iteration_cap == 0 {
            return Err(ConfigError::ZeroIterationCap);
        }

        Ok(())
    }
}
