//! Text rendering of grids and terminal message styling

use crate::game_of_life::Grid;
use itertools::Itertools;

const ALIVE_GLYPH: &str = "*";
const DEAD_GLYPH: &str = " ";

/// Render one row as `[` + glyphs separated by single spaces + `]`
pub fn show_row(row: &[bool]) -> String {
    let glyphs = row
        .iter()
        .map(|&alive| if alive { ALIVE_GLYPH } else { DEAD_GLYPH })
        .join(" ");
    format!("[{glyphs}]")
}

/// Render every row of the grid, one per line, without a trailing newline
pub fn show_cells(grid: &Grid) -> String {
    grid.iter_rows().map(show_row).join("\n")
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
