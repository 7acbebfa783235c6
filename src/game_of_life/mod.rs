//! Game of Life core functionality

pub mod factory;
pub mod grid;
pub mod io;
pub mod patterns;
pub mod rules;

pub use factory::{random_cells, random_cells_seeded, zero_cells};
pub use grid::{get_count, Grid};
pub use io::{load_grid_from_file, parse_grid};
pub use patterns::Pattern;
pub use rules::{tick, GameOfLifeRules};
