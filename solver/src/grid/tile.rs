use super::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Empty,
    Obstacle,
    Start,
    Goal,
}

impl TileKind {
    pub fn symbol(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Obstacle => '*',
            Self::Start => '$',
            Self::Goal => '#',
        }
    }

    pub fn is_walkable(self) -> bool {
        !matches!(self, Self::Obstacle)
    }
}

/// per-cell search state
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub position: Position,
    pub kind: TileKind,
    pub visited: bool,
    pub is_frontier: bool,
    /// best known distance from the start, `INFINITY` until relaxed
    pub cost: f64,
    /// straight-line distance to the goal, only filled in by A*
    pub heuristic: f64,
    pub predecessor: Option<Position>,
}

impl Tile {
    pub fn new(position: Position, kind: TileKind) -> Self {
        Self {
            position,
            kind,
            visited: false,
            is_frontier: false,
            cost: f64::INFINITY,
            heuristic: 0.0,
            predecessor: None,
        }
    }

    pub fn is_obstacle(&self) -> bool {
        self.kind == TileKind::Obstacle
    }

    /// unvisited and not an obstacle
    pub fn is_open(&self) -> bool {
        !self.visited && self.kind.is_walkable()
    }

    pub fn is_reached(&self) -> bool {
        self.cost.is_finite()
    }
}
