use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{DEFAULT_ITERATION_CAP, GridConfig};
use crate::grid::Position;

/// Generator for corner-to-corner boards with randomly scattered trees.
#[derive(Debug, Clone)]
pub struct RandomBoard {
    pub min_size: usize,
    pub max_size: usize,
    /// upper bound on obstacle draws as a fraction of the tile count
    pub density: f64,
    pub seed: Option<u64>,
}

impl Default for RandomBoard {
    fn default() -> Self {
        Self {
            min_size: 15,
            max_size: 20,
            density: 0.5,
            seed: None,
        }
    }
}

impl RandomBoard {
    pub fn generate(&self, count: usize) -> Vec<GridConfig> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        (0..count).map(|_| self.board(&mut rng)).collect()
    }

    fn board(&self, rng: &mut impl Rng) -> GridConfig {
        let min_size = self.min_size.max(2);
        let max_size = self.max_size.max(min_size);
        let rows = rng.random_range(min_size..=max_size);
        let cols = rng.random_range(min_size..=max_size);

        let start = Position::new(0, 0);
        let goal = Position::new(rows - 1, cols - 1);

        let max_draws = (rows as f64 * cols as f64 * self.density.clamp(0.0, 1.0)) as usize;
        let draws = rng.random_range(0..=max_draws);

        let mut obstacles: Vec<Position> = (0..draws)
            .map(|_| Position::new(rng.random_range(0..rows), rng.random_range(0..cols)))
            .filter(|&pos| pos != start && pos != goal)
            .collect();
        obstacles.sort_unstable();
        obstacles.dedup();

        log::trace!(
            "random {}x{} board with {} trees",
            rows,
            cols,
            obstacles.len()
        );

        GridConfig {
            rows,
            cols,
            start,
            goal,
            obstacles,
            iteration_cap: DEFAULT_ITERATION_CAP,
            show_iterations: false,
        }
    }
}
