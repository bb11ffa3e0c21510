use std::ops::Index;

use super::position::Position;
use super::tile::{Tile, TileKind};
use crate::config::GridConfig;
use crate::error::{Error, Result};

/// Fixed-size, row-major board of [`Tile`]s for a single search run.
///
/// The start tile begins as the frontier with cost zero; every other tile
/// begins unreached. A grid is mutated in place by one search and then
/// discarded.
#[derive(Debug, Clone)]
pub struct Grid {
    tiles: Vec<Tile>,
    rows: usize,
    cols: usize,
    start: Position,
    goal: Position,
}

impl Grid {
    pub fn new(config: &GridConfig) -> Result<Self> {
        config.validate()?;

        let (rows, cols) = config.bounds();
        let mut tiles: Vec<Tile> = (0..rows * cols)
            .map(|idx| Tile::new(Position::from_index(idx, cols), TileKind::Empty))
            .collect();

        for obstacle in &config.obstacles {
            tiles[obstacle.to_index(cols)].kind = TileKind::Obstacle;
        }

        tiles[config.goal.to_index(cols)].kind = TileKind::Goal;

        let start = &mut tiles[config.start.to_index(cols)];
        start.kind = TileKind::Start;
        start.cost = 0.0;
        start.is_frontier = true;

        log::debug!(
            "built {}x{} grid: {} -> {} with {} obstacles",
            rows,
            cols,
            config.start,
            config.goal,
            tiles.iter().filter(|t| t.is_obstacle()).count()
        );

        Ok(Self {
            tiles,
            rows,
            cols,
            start: config.start,
            goal: config.goal,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn get(&self, pos: Position) -> Option<&Tile> {
        if pos.in_bounds(self.bounds()) {
            Some(&self.tiles[pos.to_index(self.cols)])
        } else {
            None
        }
    }

    /// tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// one row of tiles, lowest column first
    pub fn row(&self, row: usize) -> &[Tile] {
        &self.tiles[row * self.cols..(row + 1) * self.cols]
    }

    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        pos.neighbors(self.bounds())
    }

    /// The single tile flagged as frontier.
    ///
    /// Scans the whole board, so the engine only uses it as a consistency
    /// check; it tracks the frontier position itself.
    pub fn frontier_tile(&self) -> Result<&Tile> {
        let mut flagged = self.tiles.iter().filter(|t| t.is_frontier);
        match (flagged.next(), flagged.next()) {
            (Some(tile), None) => Ok(tile),
            (None, _) => Err(Error::InvariantViolation(
                "no frontier tile on the grid".to_string(),
            )),
            (Some(first), Some(second)) => Err(Error::InvariantViolation(format!(
                "multiple frontier tiles, at least {} and {}",
                first.position, second.position
            ))),
        }
    }

    pub fn unvisited_open_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.is_open())
    }

    pub(crate) fn tile_mut(&mut self, pos: Position) -> &mut Tile {
        let idx = pos.to_index(self.cols);
        &mut self.tiles[idx]
    }

    pub(crate) fn mark_frontier(&mut self, pos: Position) {
        self.tile_mut(pos).is_frontier = true;
    }

    pub(crate) fn clear_frontier(&mut self, pos: Position) {
        self.tile_mut(pos).is_frontier = false;
    }

    /// marks `pos` visited and drops its frontier flag; its cost is final
    pub(crate) fn settle(&mut self, pos: Position) {
        let tile = self.tile_mut(pos);
        tile.visited = true;
        tile.is_frontier = false;
    }
}

impl Index<Position> for Grid {
    type Output = Tile;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.tiles[pos.to_index(self.cols)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn small_config() -> GridConfig {
        GridConfig::open(4, 5).with_obstacles([Position::new(1, 1), Position::new(2, 3)])
    }

    #[test]
    fn construction_places_every_kind() {
        let grid = Grid::new(&small_config()).unwrap();

        assert_eq!(grid.tiles().count(), 20);
        assert_eq!(grid[Position::new(0, 0)].kind, TileKind::Start);
        assert_eq!(grid[Position::new(3, 4)].kind, TileKind::Goal);
        assert_eq!(grid[Position::new(1, 1)].kind, TileKind::Obstacle);
        assert_eq!(grid[Position::new(2, 3)].kind, TileKind::Obstacle);
        assert_eq!(grid[Position::new(2, 2)].kind, TileKind::Empty);

        assert_eq!(grid[grid.start()].cost, 0.0);
        assert!(grid[Position::new(1, 1)].cost.is_infinite());
        assert!(grid[Position::new(3, 4)].predecessor.is_none());
    }

    #[test]
    fn construction_rejects_invalid_config() {
        let config = small_config().with_endpoints(Position::new(0, 0), Position::new(4, 0));
        let err = Grid::new(&config).unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigError::GoalOutOfBounds(_))
        ));
    }

    #[test]
    fn start_is_the_initial_frontier() {
        let grid = Grid::new(&small_config()).unwrap();
        let frontier = grid.frontier_tile().unwrap();
        assert_eq!(frontier.position, grid.start());
    }

    #[test]
    fn frontier_tile_detects_zero_or_many() {
        let mut grid = Grid::new(&small_config()).unwrap();
        grid.mark_frontier(Position::new(2, 2));
        assert!(matches!(
            grid.frontier_tile(),
            Err(Error::InvariantViolation(_))
        ));

        grid.clear_frontier(Position::new(2, 2));
        grid.clear_frontier(grid.start());
        assert!(matches!(
            grid.frontier_tile(),
            Err(Error::InvariantViolation(_))
        ));
    }

    #[test]
    fn unvisited_open_tiles_skip_obstacles_and_settled() {
        let mut grid = Grid::new(&small_config()).unwrap();
        assert_eq!(grid.unvisited_open_tiles().count(), 18);

        grid.settle(grid.start());
        assert_eq!(grid.unvisited_open_tiles().count(), 17);
        assert!(
            grid.unvisited_open_tiles()
                .all(|t| !t.is_obstacle() && t.position != grid.start())
        );
        assert!(!grid[grid.start()].is_frontier);
    }

    #[test]
    fn get_is_bounds_checked() {
        let grid = Grid::new(&small_config()).unwrap();
        assert!(grid.get(Position::new(3, 4)).is_some());
        assert!(grid.get(Position::new(4, 0)).is_none());
        assert!(grid.get(Position::new(0, 5)).is_none());
    }

    #[test]
    fn rows_are_row_major_slices() {
        let grid = Grid::new(&small_config()).unwrap();
        let row = grid.row(2);
        assert_eq!(row.len(), 5);
        assert_eq!(row[3].position, Position::new(2, 3));
    }
}
