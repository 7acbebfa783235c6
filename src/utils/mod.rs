//! Output formatting utilities

pub mod display;

pub use display::{show_cells, show_row, Color, ColorOutput};
