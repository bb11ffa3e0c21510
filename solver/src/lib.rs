//! Shortest paths on small, static, 8-connected grids with point obstacles.
//!
//! A [`Grid`] is built once from a [`GridConfig`], searched in place by a
//! [`SearchEngine`] running either [`Dijkstra`] or [`AStar`], and the path
//! is read back with [`reconstruct`]. [`solve`] does all three.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod grid;
pub mod random;
pub mod render;
mod solver;

pub use algorithms::pathfinding::{
    AStar, Dijkstra, PathfindingAlgorithm, SearchEngine, SearchReport, Step, Strategy, Termination,
    reconstruct, search, search_observed,
};
pub use config::GridConfig;
pub use error::{ConfigError, Error, Result};
pub use grid::{Grid, Position, Tile, TileKind};
pub use solver::{Solution, solve};
