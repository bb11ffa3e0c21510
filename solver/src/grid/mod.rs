mod board;
mod position;
mod tile;

pub use board::Grid;
pub use position::{ParsePositionError, Position};
pub use tile::{Tile, TileKind};
