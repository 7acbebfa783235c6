//! Initial grid states

use super::Grid;
use crate::error::LifeError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// All-dead grid of the given size
pub fn zero_cells(rows: usize, columns: usize) -> Result<Grid, LifeError> {
    Grid::new(rows, columns)
}

/// Grid where every cell is independently alive with probability 0.5
pub fn random_cells<R: Rng>(
    rows: usize,
    columns: usize,
    rng: &mut R,
) -> Result<Grid, LifeError> {
    Grid::from_fn(rows, columns, |_, _| rng.random_bool(0.5))
}

/// Reproducible random grid
pub fn random_cells_seeded(rows: usize, columns: usize, seed: u64) -> Result<Grid, LifeError> {
    let mut rng = StdRng::seed_from_u64(seed);
    random_cells(rows, columns, &mut rng)
}
