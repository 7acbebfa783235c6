//! B3/S23 rule and single-generation update

use super::Grid;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Evolve the grid one generation forward
    pub fn evolve(current: &Grid) -> Grid {
        current.map(|row, col, alive| {
            Self::should_be_alive(alive, current.count_neighbors(row, col))
        })
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid);
        }
        grid
    }

    /// Birth on exactly 3 neighbours, survival on 2 or 3
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2 | 3) | (false, 3))
    }
}

/// Next generation of `cells`
pub fn tick(cells: &Grid) -> Grid {
    GameOfLifeRules::evolve(cells)
}
