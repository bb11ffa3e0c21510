use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use grid_solver::{GridConfig, Position, Strategy};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "grid-solver")]
#[command(about = "Shortest paths on obstacle grids with Dijkstra and A*")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Board configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum number of iterations before a search gives up
    #[arg(short, long)]
    pub iteration_cap: Option<usize>,

    /// Print the cost table after every iteration
    #[arg(short, long)]
    pub show_iterations: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve one board with one algorithm
    Solve {
        /// Pathfinding algorithm to use
        #[arg(value_enum)]
        algorithm: PathfindingAlgorithm,

        #[command(flatten)]
        board: BoardArgs,
    },

    /// Run every algorithm on the same board and compare them
    Benchmark {
        #[command(flatten)]
        board: BoardArgs,
    },

    /// Solve randomly generated boards
    Random {
        /// Pathfinding algorithm to use
        #[arg(value_enum)]
        algorithm: PathfindingAlgorithm,

        /// Number of boards to generate
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,

        /// Upper bound on tree draws as a fraction of the board
        #[arg(long, default_value_t = 0.5)]
        density: f64,

        /// Smallest board side
        #[arg(long, default_value_t = 15)]
        min_size: usize,

        /// Largest board side
        #[arg(long, default_value_t = 20)]
        max_size: usize,

        /// Seed for reproducible boards
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(ClapArgs, Debug)]
pub struct BoardArgs {
    /// Preset board to start from
    #[arg(short, long, value_enum)]
    pub layout: Option<Layout>,

    /// Number of rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of columns
    #[arg(long)]
    pub cols: Option<usize>,

    /// Start position as `row,col`
    #[arg(long, value_name = "ROW,COL")]
    pub start: Option<Position>,

    /// Goal position as `row,col`
    #[arg(long, value_name = "ROW,COL")]
    pub goal: Option<Position>,

    /// Obstacle position as `row,col`, repeatable; replaces the preset's trees
    #[arg(long = "obstacle", value_name = "ROW,COL")]
    pub obstacles: Vec<Position>,
}

impl BoardArgs {
    /// layers these flags over `base`
    pub fn apply(&self, base: GridConfig) -> GridConfig {
        let mut config = match self.layout {
            Some(layout) => GridConfig {
                iteration_cap: base.iteration_cap,
                show_iterations: base.show_iterations,
                ..layout.config()
            },
            None => base,
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(start) = self.start {
            config.start = start;
        }

        match self.goal {
            Some(goal) => config.goal = goal,
            // a resized board keeps its goal in the far corner
            None if self.rows.is_some() || self.cols.is_some() => {
                config.goal = GridConfig::open(config.rows, config.cols).goal;
            }
            None => {}
        }

        if !self.obstacles.is_empty() {
            config.obstacles = self.obstacles.clone();
        }

        config
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Layout {
    /// Diagonal ridge of trees across the direct route
    Ridge,

    /// Dense cluster of trees in the middle of the board
    Cluster,

    /// No trees at all
    Open,
}

impl Layout {
    pub fn config(self) -> GridConfig {
        match self {
            Self::Ridge => GridConfig::ridge(),
            Self::Cluster => GridConfig::cluster(),
            Self::Open => GridConfig::open(11, 11),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PathfindingAlgorithm {
    /// Uniform-cost search over the whole board
    Dijkstra,

    /// Greedy walk ranked by step cost plus straight-line distance
    #[value(name = "astar", alias = "a-star")]
    AStar,
}

impl PathfindingAlgorithm {
    pub fn strategy(self) -> Strategy {
        match self {
            Self::Dijkstra => Strategy::Dijkstra,
            Self::AStar => Strategy::AStar,
        }
    }
}
