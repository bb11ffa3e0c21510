use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// the eight compass offsets, clockwise from north (row + 1)
const OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn to_index(self, width: usize) -> usize {
        self.row * width + self.col
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Self::new(index / width, index % width)
    }

    pub fn in_bounds(self, bounds: (usize, usize)) -> bool {
        let (height, width) = bounds;
        self.row < height && self.col < width
    }

    pub fn chebyshev_distance(self, other: Self) -> usize {
        self.row
            .abs_diff(other.row)
            .max(self.col.abs_diff(other.col))
    }

    pub fn euclidean_distance(self, other: Self) -> f64 {
        let dr = self.row.abs_diff(other.row) as f64;
        let dc = self.col.abs_diff(other.col) as f64;
        (dr * dr + dc * dc).sqrt()
    }

    /// true when the two positions share a row or a column
    pub fn is_orthogonal_to(self, other: Self) -> bool {
        self.row == other.row || self.col == other.col
    }

    /// 1 for orthogonal steps, sqrt(2) for diagonal ones
    pub fn step_distance(self, other: Self) -> f64 {
        if self.is_orthogonal_to(other) {
            1.0
        } else {
            std::f64::consts::SQRT_2
        }
    }

    /// grid-adjacent positions clipped to `bounds`, in a fixed clockwise order
    pub fn neighbors(self, bounds: (usize, usize)) -> Vec<Self> {
        OFFSETS
            .into_iter()
            .filter_map(|offset| self + offset)
            .filter(|pos| pos.in_bounds(bounds))
            .collect()
    }
}

impl Add<(isize, isize)> for Position {
    type Output = Option<Self>;

    fn add(self, (dr, dc): (isize, isize)) -> Self::Output {
        let new_row = self.row.checked_add_signed(dr)?;
        let new_col = self.col.checked_add_signed(dc)?;
        Some(Self::new(new_row, new_col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

impl From<[usize; 2]> for Position {
    fn from([row, col]: [usize; 2]) -> Self {
        Self::new(row, col)
    }
}

impl From<Position> for [usize; 2] {
    fn from(pos: Position) -> Self {
        [pos.row, pos.col]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected a position as `row,col`, got {0:?}")]
pub struct ParsePositionError(String);

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError(s.to_string());
        let (row, col) = s.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let col = col.trim().parse().map_err(|_| err())?;
        Ok(Self::new(row, col))
    }
}
