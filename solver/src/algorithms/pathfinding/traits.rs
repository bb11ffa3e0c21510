use std::fmt;
use std::time::Duration;

use crate::grid::{Grid, Position};

/// Frontier policy plugged into the shared [`SearchEngine`](super::SearchEngine) loop.
///
/// Each iteration the engine calls `reached`, then `relax` on the current
/// frontier, settles that tile, and finally asks `select` for the next one.
pub trait PathfindingAlgorithm {
    /// whether expansion should stop before `current` is expanded
    fn reached(&self, _grid: &Grid, _current: Position) -> bool {
        false
    }

    /// updates the neighbors of `current`, returning how many cost writes happened
    fn relax(&mut self, grid: &mut Grid, current: Position) -> usize;

    /// picks the next frontier; `current` has already been settled
    fn select(&mut self, grid: &Grid) -> Selection;

    fn strategy(&self) -> Strategy;

    fn name(&self) -> &'static str {
        self.strategy().name()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Next(Position),
    Finished(Termination),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Dijkstra,
    AStar,
}

impl Strategy {
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Dijkstra, Self::AStar].into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    GoalReached,
    /// no reachable tile is left to expand
    Stuck,
    IterationLimitExceeded,
}

impl Termination {
    pub fn is_success(self) -> bool {
        self == Self::GoalReached
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::GoalReached => "destination reached",
            Self::Stuck => "no reachable tile left to expand",
            Self::IterationLimitExceeded => "iteration limit exceeded",
        })
    }
}

#[derive(Debug, Clone)]
pub struct SearchReport {
    pub strategy: Strategy,
    pub iterations: usize,
    pub relaxations: usize,
    pub termination: Termination,
    pub planning_time: Duration,
}
