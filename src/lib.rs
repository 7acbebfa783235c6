//! Conway's Game of Life on a toroidal grid
//!
//! This library builds initial grids, advances them with the B3/S23 rule and
//! renders them as text, either silently or streaming every generation.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use error::LifeError;
pub use game_of_life::{
    get_count, random_cells, random_cells_seeded, tick, zero_cells, Grid, Pattern,
};
pub use simulation::{simulate, steps, stream, SimulationOptions};
pub use utils::{show_cells, show_row};
