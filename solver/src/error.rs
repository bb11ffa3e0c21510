use std::path::PathBuf;

use thiserror::Error;

use crate::grid::Position;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigError),

    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("no path from {start} to {goal}: chain broken at {broken_at}")]
    NoPathFound {
        start: Position,
        goal: Position,
        broken_at: Position,
    },

    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

/// rejected grid construction input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("start {0} lies outside the grid")]
    StartOutOfBounds(Position),

    #[error("goal {0} lies outside the grid")]
    GoalOutOfBounds(Position),

    #[error("obstacle {0} lies outside the grid")]
    ObstacleOutOfBounds(Position),

    #[error("start and goal coincide at {0}")]
    StartIsGoal(Position),

    #[error("obstacle placed on start or goal at {0}")]
    ObstacleOnEndpoint(Position),

    #[error("iteration cap must be positive")]
    ZeroIterationCap,
}
