mod astar;
mod dijkstra;
mod engine;
mod path;
pub mod traits;

pub use astar::AStar;
pub use dijkstra::Dijkstra;
pub use engine::{SearchEngine, Step, search, search_observed};
pub use path::reconstruct;
pub use traits::{PathfindingAlgorithm, SearchReport, Selection, Strategy, Termination};
